//! Multi-hop route assembly.
//!
//! Given a snapshot of known pairs and two endpoint tokens, the [`Router`]
//! finds the route with the fewest hops and returns it as an ordered list of
//! [`RouterHop`]s. Assembly is a pure function of its inputs: every call
//! builds its own [`PathGraph`] and drops it on return, so one `Router` can
//! serve any number of threads.
//!
//! Native currency is confined to the ends of a route. Pairs whose native
//! side is not an endpoint are excluded before the graph is built (see
//! [`admission`]), and the search additionally refuses to pass through a
//! native node.

pub mod admission;
pub mod hop;
pub mod validation;

pub use hop::RouterHop;
pub use validation::RouteValidator;

use crate::config::{RouterConfig, RoutingMode};
use crate::errors::RouterError;
use crate::graph::PathGraph;
use crate::pair::RouterPair;
use crate::token::{Token, TokenIdentity};
use crate::RouterResult;
use itertools::Itertools;
use rayon::prelude::*;

/// Route assembler.
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    /// Create a router with the given configuration
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Assemble the shortest route from `from_token` to `into_token`.
    ///
    /// Checks run in a fixed order: empty input, identical endpoints, an
    /// existing direct pool (exchange creation only), malformed pairs. Only
    /// then is the graph built and searched.
    ///
    /// # Errors
    ///
    /// - `NoPairsProvided` if `known_pairs` is empty
    /// - `SameToken` if both endpoints resolve to the same identity
    /// - `PairAlreadyExists` in `CreateExchange` mode when a pool already
    ///   trades the two tokens
    /// - `InvalidPair` if any pair trades a token against itself
    /// - `NoRouteFound` if the destination is unreachable
    pub fn assemble(
        &self,
        known_pairs: &[RouterPair],
        from_token: &Token,
        into_token: &Token,
    ) -> RouterResult<Vec<RouterHop>> {
        if known_pairs.is_empty() {
            tracing::warn!("Route requested over an empty pair list");
            return Err(RouterError::NoPairsProvided);
        }

        let from_id = from_token.identity();
        let into_id = into_token.identity();

        if from_id == into_id {
            tracing::warn!(token = %from_id, "Route requested from a token to itself");
            return Err(RouterError::SameToken { token: from_id });
        }

        if self.config.mode == RoutingMode::CreateExchange {
            if let Some(existing) = Self::direct_pair(known_pairs, &from_id, &into_id) {
                return Err(RouterError::PairAlreadyExists {
                    from: from_id,
                    into: into_id,
                    pool: existing.pool_address.clone(),
                });
            }
        }

        Self::validate_pairs(known_pairs)?;

        tracing::debug!(
            from = %from_id,
            into = %into_id,
            pair_count = known_pairs.len(),
            max_hops = ?self.config.max_hops,
            "Assembling route"
        );

        let mut pairs = admission::admit_pairs(known_pairs, &from_id, &into_id);
        if self.config.sort_pairs {
            pairs.sort_by_cached_key(|pair| (pair.pool_address.clone(), pair.from_id(), pair.into_id()));
        }

        let graph = PathGraph::build(&pairs);
        let path = graph
            .shortest_path(&from_id, &into_id, self.config.max_hops, |node| !node.is_native())
            .ok_or_else(|| {
                tracing::debug!(from = %from_id, into = %into_id, "No route found");
                RouterError::NoRouteFound {
                    from: from_id.clone(),
                    into: into_id.clone(),
                }
            })?;

        let hops = Self::hops_from_path(&graph, &pairs, &path)?;
        RouteValidator::validate(&hops, from_token, into_token)?;

        let pools: Vec<&str> = hops.iter().map(|hop| hop.pool_address.as_str()).collect();
        tracing::info!(
            from = %from_id,
            into = %into_id,
            hops = hops.len(),
            pools = ?pools,
            "Route assembled"
        );

        Ok(hops)
    }

    /// Assemble routes for several endpoint pairs over one snapshot.
    ///
    /// Requests are routed in parallel; results keep the order of `requests`.
    pub fn assemble_batch(
        &self,
        known_pairs: &[RouterPair],
        requests: &[(Token, Token)],
    ) -> Vec<RouterResult<Vec<RouterHop>>> {
        requests
            .par_iter()
            .map(|(from_token, into_token)| self.assemble(known_pairs, from_token, into_token))
            .collect()
    }

    /// First listed pair trading `a` directly against `b`.
    pub fn direct_pair<'a>(
        known_pairs: &'a [RouterPair],
        a: &TokenIdentity,
        b: &TokenIdentity,
    ) -> Option<&'a RouterPair> {
        known_pairs.iter().find(|pair| pair.connects(a, b))
    }

    /// Reject pairs whose two sides resolve to the same token.
    fn validate_pairs(known_pairs: &[RouterPair]) -> RouterResult<()> {
        match known_pairs.iter().find(|pair| pair.is_self_loop()) {
            Some(pair) => {
                tracing::warn!(
                    pool = %pair.pool_address,
                    token = %pair.from_id(),
                    "Pair trades a token against itself"
                );
                Err(RouterError::InvalidPair {
                    pool: pair.pool_address.clone(),
                    reason: format!("both sides resolve to {}", pair.from_id()),
                })
            }
            None => Ok(()),
        }
    }

    /// Map a node sequence back to hops over the listed pairs.
    ///
    /// Each step uses the first listed pair connecting its two nodes and
    /// offers that pair's own descriptor of the step's starting token.
    fn hops_from_path(
        graph: &PathGraph,
        pairs: &[RouterPair],
        path: &[TokenIdentity],
    ) -> RouterResult<Vec<RouterHop>> {
        path.iter()
            .tuple_windows()
            .map(|(offered, received)| {
                let pair = graph
                    .pair_index_between(offered, received)
                    .and_then(|index| pairs.get(index))
                    .ok_or_else(|| RouterError::InvalidRoute {
                        reason: format!("no pair connects {} and {}", offered, received),
                    })?;

                let offered_token = pair.token_for(offered).cloned().ok_or_else(|| {
                    RouterError::InvalidPair {
                        pool: pair.pool_address.clone(),
                        reason: format!("pair does not trade {}", offered),
                    }
                })?;

                Ok(RouterHop::through(pair, offered_token))
            })
            .collect()
    }
}

/// Assemble a route with the default configuration.
///
/// Shorthand for `Router::default().assemble(..)`.
pub fn assemble(known_pairs: &[RouterPair], from_token: &Token, into_token: &Token) -> RouterResult<Vec<RouterHop>> {
    Router::default().assemble(known_pairs, from_token, into_token)
}
