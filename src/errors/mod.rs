//! Error handling for the swap router.
//!
//! Errors are split by concern, mirroring the module layout:
//!
//! - **`RouterError`**: validation and search failures of route assembly
//! - **`TokenError`**: malformed token descriptors and pool metadata
//! - **`ConfigError`**: invalid router configuration
//!
//! # Top-Level Error Type
//!
//! `SwapRouterError` wraps every domain error plus the external errors the
//! crate touches (JSON, I/O). Library entry points that only validate and
//! search return the narrower `RouterError`, so callers can tell "no
//! liquidity route exists" apart from "bad input" by matching on the variant.
//! Loading code (configuration, pair snapshots) returns `Result<T>`, which
//! composes with `?` across all of them.

pub mod config;
pub mod router;
pub mod token;

// Re-export all error types for convenience
pub use config::ConfigError;
pub use router::RouterError;
pub use token::TokenError;

/// Main result type for the library
pub type Result<T> = std::result::Result<T, SwapRouterError>;

/// Top-level error enum that encompasses all possible errors in the crate.
#[derive(Debug, thiserror::Error)]
pub enum SwapRouterError {
    /// Route assembly or route validation failed.
    #[error("Routing failed: {0}")]
    Router(#[from] RouterError),

    /// A token descriptor, address or code hash was malformed.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization or deserialization error.
    ///
    /// Raised when pair snapshots or hop lists cannot be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File system error while reading snapshots.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for cases not covered by specific error types.
    #[error("Generic error: {0}")]
    Other(#[from] anyhow::Error),
}
