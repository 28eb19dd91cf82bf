//! Route output handed to the execution layer.

use crate::pair::RouterPair;
use crate::token::{CodeHash, ContractAddress, Token};
use serde::{Deserialize, Serialize};

/// One step of an assembled route.
///
/// `offered_token` is what gets sent into the pool at `pool_address`; the
/// token received is the pool's other side, which is also the next hop's
/// `offered_token`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouterHop {
    pub offered_token: Token,
    pub pool_address: ContractAddress,
    pub pool_code_hash: CodeHash,
}

impl RouterHop {
    /// Create a hop offering `offered_token` into the pool of `pair`
    pub fn through(pair: &RouterPair, offered_token: Token) -> Self {
        Self {
            offered_token,
            pool_address: pair.pool_address.clone(),
            pool_code_hash: pair.pool_code_hash.clone(),
        }
    }
}
