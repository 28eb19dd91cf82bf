//! Token descriptor errors

use thiserror::Error;

/// Errors that can occur while parsing token descriptors and pool metadata
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("Contract address cannot be empty")]
    EmptyAddress,

    #[error("Contract address '{input}' contains whitespace")]
    MalformedAddress { input: String },

    #[error("Native denomination cannot be empty")]
    EmptyDenom,

    #[error("Invalid code hash '{input}': {source}")]
    InvalidCodeHash {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Invalid code hash length: expected {expected} bytes, got {actual}")]
    InvalidCodeHashLength { expected: usize, actual: usize },

    #[error("Malformed token '{input}': expected 'native:<denom>' or '<contract_addr>:<code_hash>'")]
    MalformedToken { input: String },
}
