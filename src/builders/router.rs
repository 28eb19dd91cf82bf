//! Builder pattern for Router

use crate::config::{RouterConfig, RoutingMode};
use crate::errors::Result;
use crate::router::Router;

/// Builder for creating Router instances with a fluent API
#[derive(Debug, Clone, Default)]
pub struct RouterBuilder {
    config: RouterConfig,
}

impl RouterBuilder {
    /// Create a new RouterBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from the environment
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the routing mode
    pub fn mode(mut self, mode: RoutingMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Bound the number of hops per route
    ///
    /// # Arguments
    ///
    /// * `max_hops` - Maximum hops, must be at least 1
    pub fn max_hops(mut self, max_hops: usize) -> Self {
        self.config.max_hops = Some(max_hops);
        self
    }

    /// Remove any hop bound
    pub fn unbounded(mut self) -> Self {
        self.config.max_hops = None;
        self
    }

    /// Sort pairs by pool address before searching
    pub fn sort_pairs(mut self, sort_pairs: bool) -> Self {
        self.config.sort_pairs = sort_pairs;
        self
    }

    /// Build the Router
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn build(self) -> Result<Router> {
        self.config.validate()?;
        Ok(Router::new(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let router = RouterBuilder::new().build().unwrap();
        assert_eq!(router.config(), &RouterConfig::default());
    }

    #[test]
    fn test_builder_settings() {
        let router = RouterBuilder::new()
            .mode(RoutingMode::CreateExchange)
            .max_hops(3)
            .sort_pairs(true)
            .build()
            .unwrap();

        assert_eq!(router.config().mode, RoutingMode::CreateExchange);
        assert_eq!(router.config().max_hops, Some(3));
        assert!(router.config().sort_pairs);

        let router = RouterBuilder::new()
            .config(router.config().clone())
            .unbounded()
            .build()
            .unwrap();
        assert_eq!(router.config().max_hops, None);
        assert!(router.config().sort_pairs);
    }

    #[test]
    fn test_builder_rejects_zero_hops() {
        assert!(RouterBuilder::new().max_hops(0).build().is_err());
    }
}
