//! Path graph used for route search.
//!
//! This module provides an adjacency structure where nodes are token
//! identities and edges are the two directions of every known pair. The graph
//! is transient: the router builds one per call and drops it with the result.

pub mod types;
pub mod core;

// Re-export all public types for convenience
pub use types::{DirectedEdge, EdgeId};
pub use core::PathGraph;
