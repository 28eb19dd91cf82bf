//! Configuration errors.

/// Errors raised while loading or validating router configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {variable}: '{value}' ({reason})")]
    InvalidValue {
        variable: String,
        value: String,
        reason: String,
    },

    #[error("Unknown routing mode '{value}': expected 'swap' or 'create_exchange'")]
    UnknownMode { value: String },

    #[error("Maximum hop count must be at least 1, got {max_hops}")]
    InvalidMaxHops { max_hops: usize },

    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    FileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
