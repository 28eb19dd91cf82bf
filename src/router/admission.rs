//! Native-token admission for graph construction.
//!
//! Native currency can only be offered into the first hop or received from
//! the last one. Pairs whose native side is not one of the queried endpoints
//! are dropped before the graph is built, so two unrelated native pairs can
//! never be bridged through a shared native node.

use crate::pair::RouterPair;
use crate::token::TokenIdentity;

/// Whether every native side of `pair` is one of the route endpoints.
///
/// Pairs without a native side are always admissible.
pub fn is_admissible(pair: &RouterPair, from: &TokenIdentity, into: &TokenIdentity) -> bool {
    pair.identities()
        .iter()
        .filter(|id| id.is_native())
        .all(|id| id == from || id == into)
}

/// Filter `pairs` down to those usable for a route from `from` to `into`,
/// preserving input order.
pub fn admit_pairs(pairs: &[RouterPair], from: &TokenIdentity, into: &TokenIdentity) -> Vec<RouterPair> {
    let admitted: Vec<RouterPair> = pairs
        .iter()
        .filter(|pair| is_admissible(pair, from, into))
        .cloned()
        .collect();

    if admitted.len() < pairs.len() {
        tracing::debug!(
            from = %from,
            into = %into,
            excluded = pairs.len() - admitted.len(),
            admitted = admitted.len(),
            "Excluded native pairs that would place native currency mid-route"
        );
    }

    admitted
}
