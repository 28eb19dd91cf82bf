//! Route assembly errors.

use crate::token::{ContractAddress, TokenIdentity};

/// Errors surfaced by route assembly and route validation.
///
/// Every variant is a deterministic outcome of the supplied pair snapshot and
/// endpoints; the router never retries internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("No pairs provided: cannot assemble a route over an empty pair list")]
    NoPairsProvided,

    #[error("Cannot swap {token} for itself")]
    SameToken { token: TokenIdentity },

    #[error("A pair between {from} and {into} already exists at pool {pool}")]
    PairAlreadyExists {
        from: TokenIdentity,
        into: TokenIdentity,
        pool: ContractAddress,
    },

    #[error("No route found from {from} to {into}")]
    NoRouteFound { from: TokenIdentity, into: TokenIdentity },

    #[error("Invalid pair at pool {pool}: {reason}")]
    InvalidPair { pool: ContractAddress, reason: String },

    #[error("Invalid route: {reason}")]
    InvalidRoute { reason: String },
}

impl RouterError {
    /// Whether the error means "no liquidity path" rather than bad input.
    pub fn is_missing_route(&self) -> bool {
        matches!(self, RouterError::NoRouteFound { .. })
    }
}
