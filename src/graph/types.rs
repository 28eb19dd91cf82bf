//! Core types for the path graph.
//!
//! - Type aliases for edge identifiers
//! - Directed edge representation

use crate::token::TokenIdentity;

/// Type alias for directed edge identifiers within the graph
pub type EdgeId = usize;

/// One direction of a pair inside the graph.
///
/// Every input pair yields two of these: the pair as listed and its reverse.
/// Both point back at the same input pair through `pair_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedEdge {
    /// Identity of the token offered into this edge
    from: TokenIdentity,
    /// Identity of the token received from this edge
    into: TokenIdentity,
    /// Index of the originating pair in the slice the graph was built from
    pair_index: usize,
    /// Whether this is the synthetic reverse of the listed pair
    reversed: bool,
}

impl DirectedEdge {
    /// Create a new directed edge
    pub fn new(from: TokenIdentity, into: TokenIdentity, pair_index: usize, reversed: bool) -> Self {
        Self {
            from,
            into,
            pair_index,
            reversed,
        }
    }

    /// Get the identity this edge starts at
    pub fn from(&self) -> &TokenIdentity {
        &self.from
    }

    /// Get the identity this edge ends at
    pub fn to(&self) -> &TokenIdentity {
        &self.into
    }

    /// Get the index of the listed pair this edge was derived from
    pub fn pair_index(&self) -> usize {
        self.pair_index
    }

    /// Whether this edge runs against the listed direction of its pair
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}
