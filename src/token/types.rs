//! Validated primitives carried by token descriptors and pairs.
//!
//! - Contract addresses of tokens and pools
//! - Code hashes pinning the contract code a message is sent to

use crate::errors::TokenError;
use crate::TokenResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length in bytes of a contract code hash
pub const CODE_HASH_LEN: usize = 32;

/// On-chain address of a token or pool contract.
///
/// Addresses are compared verbatim; the router never normalises case or
/// prefixes because the registry already hands out canonical strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Create an address, rejecting empty input and embedded whitespace
    pub fn new(address: impl Into<String>) -> TokenResult<Self> {
        let address = address.into();
        if address.is_empty() {
            return Err(TokenError::EmptyAddress);
        }
        if address.chars().any(char::is_whitespace) {
            return Err(TokenError::MalformedAddress { input: address });
        }
        Ok(Self(address))
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ContractAddress {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ContractAddress {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContractAddress> for String {
    fn from(address: ContractAddress) -> Self {
        address.0
    }
}

/// Hex-encoded hash of a contract's code, stored lowercase without prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CodeHash(String);

impl CodeHash {
    /// Parse a code hash from hex, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid hex or does not decode to
    /// exactly [`CODE_HASH_LEN`] bytes.
    pub fn new(hash: &str) -> TokenResult<Self> {
        let clean = hash.trim_start_matches("0x");
        let bytes = hex::decode(clean).map_err(|source| TokenError::InvalidCodeHash {
            input: hash.to_string(),
            source,
        })?;

        if bytes.len() != CODE_HASH_LEN {
            return Err(TokenError::InvalidCodeHashLength {
                expected: CODE_HASH_LEN,
                actual: bytes.len(),
            });
        }

        Ok(Self(hex::encode(bytes)))
    }

    /// Get the lowercase hex representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CodeHash {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CodeHash {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CodeHash> for String {
    fn from(hash: CodeHash) -> Self {
        hash.0
    }
}
