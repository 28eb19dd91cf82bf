//! Core path graph implementation.
//!
//! This module contains the `PathGraph` struct: construction from a pair
//! snapshot, adjacency queries and the breadth-first shortest-path search.

use super::types::{DirectedEdge, EdgeId};
use crate::pair::RouterPair;
use crate::token::TokenIdentity;
use std::collections::{HashMap, HashSet, VecDeque};

/// An undirected multigraph over token identities.
///
/// The graph is built once per routing call and discarded afterwards:
/// - Nodes are token identities
/// - Each input pair contributes two directed edges, one per direction
/// - Adjacency lists keep insertion order and may hold duplicates when
///   several pools trade the same two tokens
#[derive(Debug, Clone, Default)]
pub struct PathGraph {
    /// Directed edges, each listed pair immediately followed by its reverse
    edges: Vec<DirectedEdge>,
    /// First edge inserted for each ordered pair of endpoints
    first_edges: HashMap<(TokenIdentity, TokenIdentity), EdgeId>,
    /// Mapping from token identity to the identities reachable in one hop
    adjacency: HashMap<TokenIdentity, Vec<TokenIdentity>>,
}

impl PathGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    // ================================
    // Construction Methods
    // ================================

    /// Build a graph from a pair snapshot.
    ///
    /// Runs in O(P) for P pairs, and edge lookups between two nodes are O(1). Edge and adjacency order follow the order
    /// of `pairs`, which is what makes search tie-breaking reproducible.
    pub fn build(pairs: &[RouterPair]) -> Self {
        let mut graph = Self {
            edges: Vec::with_capacity(pairs.len() * 2),
            first_edges: HashMap::with_capacity(pairs.len() * 2),
            adjacency: HashMap::with_capacity(pairs.len() * 2),
        };

        for (pair_index, pair) in pairs.iter().enumerate() {
            graph.add_pair(pair_index, pair);
        }

        tracing::debug!(
            pair_count = pairs.len(),
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            "Path graph built"
        );

        graph
    }

    /// Insert a pair and its reverse as two directed edges.
    fn add_pair(&mut self, pair_index: usize, pair: &RouterPair) {
        let [from, into] = pair.identities();

        self.add_edge(DirectedEdge::new(from.clone(), into.clone(), pair_index, false));
        self.add_edge(DirectedEdge::new(into, from, pair_index, true));
    }

    fn add_edge(&mut self, edge: DirectedEdge) {
        let edge_id: EdgeId = self.edges.len();

        self.first_edges
            .entry((edge.from().clone(), edge.to().clone()))
            .or_insert(edge_id);
        self.adjacency
            .entry(edge.from().clone())
            .or_default()
            .push(edge.to().clone());
        self.edges.push(edge);
    }

    // ================================
    // Query Methods
    // ================================

    /// Get the number of distinct token identities in the graph
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of directed edges (twice the number of pairs)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the identity appears on any pair
    pub fn contains_node(&self, id: &TokenIdentity) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Get the identities directly reachable from `id`, in insertion order.
    ///
    /// Unknown identities have no neighbors.
    pub fn neighbors(&self, id: &TokenIdentity) -> &[TokenIdentity] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get all directed edges
    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }

    /// Get a directed edge by its ID
    pub fn get_edge(&self, edge_id: EdgeId) -> Option<&DirectedEdge> {
        self.edges.get(edge_id)
    }

    /// ID of the first directed edge from `from` to `into` in insertion order
    pub fn edge_id_between(&self, from: &TokenIdentity, into: &TokenIdentity) -> Option<EdgeId> {
        self.first_edges.get(&(from.clone(), into.clone())).copied()
    }

    /// First directed edge from `from` to `into` in insertion order
    pub fn edge_between(&self, from: &TokenIdentity, into: &TokenIdentity) -> Option<&DirectedEdge> {
        self.edge_id_between(from, into)
            .and_then(|edge_id| self.get_edge(edge_id))
    }

    /// Index of the first listed pair connecting `from` and `into`
    pub fn pair_index_between(&self, from: &TokenIdentity, into: &TokenIdentity) -> Option<usize> {
        self.edge_between(from, into).map(DirectedEdge::pair_index)
    }

    // ================================
    // Search Methods
    // ================================

    /// Find the fewest-hops node sequence from `from` to `into`.
    ///
    /// Breadth-first search with a predecessor map. Among equally short paths
    /// the first one discovered in adjacency order wins.
    ///
    /// # Arguments
    ///
    /// * `from` - Identity to start from
    /// * `into` - Identity to reach
    /// * `max_hops` - Optional upper bound on the number of edges in the path
    /// * `is_transit` - Whether a node other than `from` may be passed through;
    ///   non-transit nodes can still be reached as the destination
    ///
    /// # Returns
    ///
    /// The node sequence including both endpoints, or `None` if `into` is
    /// unreachable under the given constraints
    pub fn shortest_path<F>(
        &self,
        from: &TokenIdentity,
        into: &TokenIdentity,
        max_hops: Option<usize>,
        is_transit: F,
    ) -> Option<Vec<TokenIdentity>>
    where
        F: Fn(&TokenIdentity) -> bool,
    {
        let (start, _) = self.adjacency.get_key_value(from)?;
        if from == into {
            return Some(vec![start.clone()]);
        }

        let mut visited: HashSet<&TokenIdentity> = HashSet::new();
        let mut predecessors: HashMap<&TokenIdentity, &TokenIdentity> = HashMap::new();
        let mut queue: VecDeque<(&TokenIdentity, usize)> = VecDeque::new();

        visited.insert(start);
        queue.push_back((start, 0));

        while let Some((node, hops)) = queue.pop_front() {
            if node != start && !is_transit(node) {
                continue;
            }
            if max_hops.is_some_and(|limit| hops >= limit) {
                continue;
            }

            for next in self.neighbors(node) {
                if !visited.insert(next) {
                    continue;
                }
                predecessors.insert(next, node);

                if next == into {
                    return Some(Self::unwind(&predecessors, start, next));
                }
                queue.push_back((next, hops + 1));
            }
        }

        None
    }

    /// Walk the predecessor map back from `end` and return the path in order.
    fn unwind<'a>(
        predecessors: &HashMap<&'a TokenIdentity, &'a TokenIdentity>,
        start: &'a TokenIdentity,
        end: &'a TokenIdentity,
    ) -> Vec<TokenIdentity> {
        let mut path = vec![end.clone()];
        let mut current = end;

        while current != start {
            match predecessors.get(current) {
                Some(&previous) => {
                    path.push(previous.clone());
                    current = previous;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }
}
