//! Configuration management for the swap router.
//!
//! The router itself is a pure function of its inputs; configuration only
//! selects the routing mode and optional search constraints. Values can come
//! from the environment, from a JSON file, or be set through
//! [`crate::builders::RouterBuilder`].

use crate::errors::{ConfigError, Result};
use crate::ConfigResult;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Environment variable selecting the routing mode
pub const ENV_MODE: &str = "SWAP_ROUTER_MODE";
/// Environment variable bounding the number of hops in a route
pub const ENV_MAX_HOPS: &str = "SWAP_ROUTER_MAX_HOPS";
/// Environment variable enabling deterministic pair ordering
pub const ENV_SORT_PAIRS: &str = "SWAP_ROUTER_SORT_PAIRS";

/// What the caller intends to do with the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    /// Plain swap routing
    #[default]
    Swap,
    /// Routing on behalf of the factory's exchange creation; a pool that
    /// already trades the two tokens directly is an error.
    CreateExchange,
}

impl FromStr for RoutingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swap" => Ok(RoutingMode::Swap),
            "create_exchange" | "create-exchange" => Ok(RoutingMode::CreateExchange),
            _ => Err(ConfigError::UnknownMode { value: s.to_string() }),
        }
    }
}

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Routing mode
    pub mode: RoutingMode,
    /// Upper bound on hops per route; `None` searches the whole graph
    pub max_hops: Option<usize>,
    /// Order pairs by pool address before searching so tie-breaking does not
    /// depend on the order the registry returned them in
    pub sort_pairs: bool,
}

impl RouterConfig {
    /// Create a configuration from environment variables
    ///
    /// # Environment Variables
    ///
    /// All optional:
    /// - `SWAP_ROUTER_MODE`: `swap` (default) or `create_exchange`
    /// - `SWAP_ROUTER_MAX_HOPS`: positive integer (default: unbounded)
    /// - `SWAP_ROUTER_SORT_PAIRS`: `true`/`false`/`1`/`0` (default: false)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse
    /// or fails validation
    pub fn from_env() -> Result<Self> {
        tracing::debug!("Loading router configuration from environment");

        let mut config = Self::default();

        if let Ok(mode) = env::var(ENV_MODE) {
            config.mode = Self::parse_value(ENV_MODE, &mode)?;
            tracing::debug!(mode = ?config.mode, "Routing mode loaded from environment");
        }

        if let Ok(max_hops) = env::var(ENV_MAX_HOPS) {
            config.max_hops = Some(Self::parse_value(ENV_MAX_HOPS, &max_hops)?);
        }

        if let Ok(sort_pairs) = env::var(ENV_SORT_PAIRS) {
            config.sort_pairs = Self::parse_flag(ENV_SORT_PAIRS, &sort_pairs)?;
        }

        config.validate()?;

        tracing::info!(
            mode = ?config.mode,
            max_hops = ?config.max_hops,
            sort_pairs = config.sort_pairs,
            "Router configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_label = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path_label.clone(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::FileParse {
            path: path_label.clone(),
            source,
        })?;
        config.validate()?;

        tracing::info!(
            path = %path_label,
            mode = ?config.mode,
            max_hops = ?config.max_hops,
            sort_pairs = config.sort_pairs,
            "Router configuration loaded from file"
        );

        Ok(config)
    }

    /// Check that all values are within range
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(max_hops) = self.max_hops {
            if max_hops == 0 {
                tracing::error!(max_hops = max_hops, "Invalid maximum hop count");
                return Err(ConfigError::InvalidMaxHops { max_hops });
            }
        }
        Ok(())
    }

    fn parse_value<T>(variable: &str, value: &str) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            variable: variable.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
    }

    fn parse_flag(variable: &str, value: &str) -> ConfigResult<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                variable: variable.to_string(),
                value: value.to_string(),
                reason: "expected a boolean".to_string(),
            }),
        }
    }
}
