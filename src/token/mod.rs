//! Token descriptors and their canonical identities.
//!
//! A [`Token`] is what the pool registry hands out: either the chain's native
//! currency or a contract token addressed by contract and code hash. The
//! router never compares tokens directly; it compares their
//! [`TokenIdentity`], which ignores the code hash and keys native currency by
//! denomination.

pub mod types;

pub use types::{CodeHash, ContractAddress, CODE_HASH_LEN};

use crate::errors::TokenError;
use crate::TokenResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix of the textual form of a native token, e.g. `native:uscrt`
const NATIVE_PREFIX: &str = "native";

/// A token descriptor as supplied by the token and pool registries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// The chain's native currency in a given denomination
    #[serde(rename = "native_token")]
    Native { denom: String },
    /// A contract token
    #[serde(rename = "custom_token")]
    Custom {
        contract_addr: ContractAddress,
        token_code_hash: CodeHash,
    },
}

impl Token {
    /// Create a native token descriptor
    pub fn native(denom: impl Into<String>) -> Self {
        Token::Native { denom: denom.into() }
    }

    /// Create a contract token descriptor from raw strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the address or code hash is malformed
    pub fn custom(contract_addr: &str, token_code_hash: &str) -> TokenResult<Self> {
        Ok(Token::Custom {
            contract_addr: ContractAddress::new(contract_addr)?,
            token_code_hash: CodeHash::new(token_code_hash)?,
        })
    }

    /// Resolve the canonical identity of this descriptor
    pub fn identity(&self) -> TokenIdentity {
        match self {
            Token::Native { denom } => TokenIdentity::Native(denom.clone()),
            Token::Custom { contract_addr, .. } => TokenIdentity::Custom(contract_addr.clone()),
        }
    }

    /// Whether this is the chain's native currency
    pub fn is_native(&self) -> bool {
        matches!(self, Token::Native { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Native { denom } => write!(f, "{}", denom),
            Token::Custom { contract_addr, .. } => write!(f, "{}", contract_addr),
        }
    }
}

/// Parses `native:<denom>` or `<contract_addr>:<code_hash>`.
impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, tail) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TokenError::MalformedToken { input: s.to_string() })?;

        if head == NATIVE_PREFIX {
            if tail.is_empty() {
                return Err(TokenError::EmptyDenom);
            }
            return Ok(Token::native(tail));
        }

        Token::custom(head, tail)
    }
}

/// Canonical identity of a token; the only basis for token equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenIdentity {
    Native(String),
    Custom(ContractAddress),
}

impl TokenIdentity {
    /// Whether this identity names native currency
    pub fn is_native(&self) -> bool {
        matches!(self, TokenIdentity::Native(_))
    }
}

impl fmt::Display for TokenIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenIdentity::Native(denom) => write!(f, "{}:{}", NATIVE_PREFIX, denom),
            TokenIdentity::Custom(address) => write!(f, "{}", address),
        }
    }
}

impl From<&Token> for TokenIdentity {
    fn from(token: &Token) -> Self {
        token.identity()
    }
}
