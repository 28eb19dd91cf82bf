//! Swap Router Library
//!
//! Assembles multi-hop swap routes over a snapshot of known liquidity pairs.
//! Given the pairs a pool registry knows about and two endpoint tokens, the
//! router returns the route with the fewest hops as an ordered list of steps
//! for an execution layer to submit.
//!
//! # Architecture Overview
//!
//! - **`token`**: Token descriptors and the identities used for equality
//! - **`pair`**: Known pools as edges between two tokens
//! - **`graph`**: Transient adjacency graph and breadth-first search
//! - **`router`**: Route assembly, native-token admission and route validation
//! - **`config`**: Routing mode and search constraints
//! - **`builders`**: Fluent construction of a configured router
//! - **`errors`**: Error taxonomy
//!
//! # Native Tokens
//!
//! Intermediate hops are executed through a token-contract callback that the
//! chain's native currency cannot trigger. Native currency may therefore be
//! offered into the first hop or received from the last hop, never in
//! between. Native identities are keyed by denomination, so pairs in two
//! different native denominations are never joined through one node.
//!
//! # Thread Safety
//!
//! Routing holds no shared state. A `Router` is `Send + Sync` and every call
//! builds and discards its own graph.

pub mod builders;
pub mod config;
pub mod errors;
pub mod graph;
pub mod pair;
pub mod router;
pub mod token;

// Re-export the main Result type and error enum for convenience
pub use errors::{Result, SwapRouterError};

pub use builders::RouterBuilder;
pub use config::{RouterConfig, RoutingMode};
pub use pair::RouterPair;
pub use router::{assemble, Router, RouterHop};
pub use token::{CodeHash, ContractAddress, Token, TokenIdentity};

// Module-specific result types for better ergonomics
pub type RouterResult<T> = std::result::Result<T, errors::RouterError>;
pub type TokenResult<T> = std::result::Result<T, errors::TokenError>;
pub type ConfigResult<T> = std::result::Result<T, errors::ConfigError>;
