//! Known liquidity pairs as seen by the router.
//!
//! A [`RouterPair`] is one pool usable as a hop: an undirected edge between
//! two token identities that also remembers the direction it was listed in,
//! so hops can be reported against the registry's own record.

use crate::token::{CodeHash, ContractAddress, Token, TokenIdentity};
use serde::{Deserialize, Serialize};

/// One liquidity pool between two tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouterPair {
    pub from_token: Token,
    pub into_token: Token,
    pub pool_address: ContractAddress,
    pub pool_code_hash: CodeHash,
}

impl RouterPair {
    /// Create a new pair from its two sides and pool metadata
    pub fn new(
        from_token: Token,
        into_token: Token,
        pool_address: ContractAddress,
        pool_code_hash: CodeHash,
    ) -> Self {
        Self {
            from_token,
            into_token,
            pool_address,
            pool_code_hash,
        }
    }

    /// Identity of the listed "from" side
    pub fn from_id(&self) -> TokenIdentity {
        self.from_token.identity()
    }

    /// Identity of the listed "into" side
    pub fn into_id(&self) -> TokenIdentity {
        self.into_token.identity()
    }

    /// Both side identities in listed order
    pub fn identities(&self) -> [TokenIdentity; 2] {
        [self.from_id(), self.into_id()]
    }

    /// True if either side is native currency
    pub fn has_native(&self) -> bool {
        self.from_token.is_native() || self.into_token.is_native()
    }

    /// True if `token` is one of the two sides
    pub fn contains(&self, token: &Token) -> bool {
        let id = token.identity();
        id == self.from_id() || id == self.into_id()
    }

    /// The opposite side of `token`, or `None` if `token` is on neither side.
    pub fn other_side(&self, token: &Token) -> Option<&Token> {
        let id = token.identity();
        if id == self.from_id() {
            Some(&self.into_token)
        } else if id == self.into_id() {
            Some(&self.from_token)
        } else {
            None
        }
    }

    /// The side token whose identity is `id`
    pub fn token_for(&self, id: &TokenIdentity) -> Option<&Token> {
        if *id == self.from_id() {
            Some(&self.from_token)
        } else if *id == self.into_id() {
            Some(&self.into_token)
        } else {
            None
        }
    }

    /// True if this pair trades exactly `a` against `b`, in either direction
    pub fn connects(&self, a: &TokenIdentity, b: &TokenIdentity) -> bool {
        let [from, into] = self.identities();
        (from == *a && into == *b) || (from == *b && into == *a)
    }

    /// Same pool with the two sides swapped
    pub fn reversed(&self) -> RouterPair {
        RouterPair {
            from_token: self.into_token.clone(),
            into_token: self.from_token.clone(),
            pool_address: self.pool_address.clone(),
            pool_code_hash: self.pool_code_hash.clone(),
        }
    }

    /// Both sides resolve to the same identity
    pub fn is_self_loop(&self) -> bool {
        self.from_id() == self.into_id()
    }
}
