//! Structural checks on assembled routes.

use super::hop::RouterHop;
use crate::errors::RouterError;
use crate::token::{Token, TokenIdentity};
use std::collections::HashSet;

/// Validator for hop sequences handed to the execution layer.
pub struct RouteValidator;

impl RouteValidator {
    /// Run every check against a route from `from_token` to `into_token`.
    pub fn validate(hops: &[RouterHop], from_token: &Token, into_token: &Token) -> Result<(), RouterError> {
        Self::validate_endpoints(hops, from_token, into_token)?;
        Self::validate_native_endpoints(hops)?;
        Self::validate_no_revisits(hops)?;
        Ok(())
    }

    /// Validate that the route starts at `from_token` and never offers
    /// `into_token`, which can only be received at the end.
    pub fn validate_endpoints(hops: &[RouterHop], from_token: &Token, into_token: &Token) -> Result<(), RouterError> {
        let first = hops.first().ok_or_else(|| RouterError::InvalidRoute {
            reason: "route has no hops".to_string(),
        })?;

        let from_id = from_token.identity();
        if first.offered_token.identity() != from_id {
            tracing::debug!(
                expected = %from_id,
                actual = %first.offered_token.identity(),
                "Route validation failed: first hop does not offer the source token"
            );
            return Err(RouterError::InvalidRoute {
                reason: format!(
                    "first hop offers {} instead of {}",
                    first.offered_token.identity(),
                    from_id
                ),
            });
        }

        let into_id = into_token.identity();
        if let Some(index) = hops.iter().position(|hop| hop.offered_token.identity() == into_id) {
            return Err(RouterError::InvalidRoute {
                reason: format!("hop {} offers the destination token {}", index, into_id),
            });
        }

        Ok(())
    }

    /// Validate that native currency is only ever offered into the first hop.
    ///
    /// Intermediate hops are driven by a token-contract callback which native
    /// currency cannot trigger.
    pub fn validate_native_endpoints(hops: &[RouterHop]) -> Result<(), RouterError> {
        for (index, hop) in hops.iter().enumerate().skip(1) {
            if hop.offered_token.is_native() {
                tracing::debug!(
                    hop_index = index,
                    token = %hop.offered_token,
                    "Route validation failed: native token offered mid-route"
                );
                return Err(RouterError::InvalidRoute {
                    reason: format!(
                        "native token {} offered at hop {} of {}",
                        hop.offered_token,
                        index,
                        hops.len()
                    ),
                });
            }
        }

        Ok(())
    }

    /// Validate that no token is offered twice, i.e. the route has no loops.
    pub fn validate_no_revisits(hops: &[RouterHop]) -> Result<(), RouterError> {
        let mut seen: HashSet<TokenIdentity> = HashSet::with_capacity(hops.len());

        for hop in hops {
            let id = hop.offered_token.identity();
            if !seen.insert(id.clone()) {
                return Err(RouterError::InvalidRoute {
                    reason: format!("token {} is offered more than once", id),
                });
            }
        }

        Ok(())
    }
}
