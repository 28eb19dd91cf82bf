use clap::Parser;
use std::path::PathBuf;
use swap_router::config::{RouterConfig, RoutingMode};
use swap_router::errors::Result;
use swap_router::{Router, RouterBuilder, RouterPair, Token};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Assemble a multi-hop swap route over a pair snapshot", long_about = None)]
pub struct Args {
    #[clap(long, env = "SWAP_ROUTER_PAIRS", help = "JSON file holding the known pairs")]
    pub pairs: PathBuf,

    #[clap(long, help = "Token to offer: 'native:<denom>' or '<contract_addr>:<code_hash>'")]
    pub from: Token,

    #[clap(long, help = "Token to receive: 'native:<denom>' or '<contract_addr>:<code_hash>'")]
    pub into: Token,

    #[clap(long, env = "SWAP_ROUTER_MODE", default_value = "swap", help = "Routing mode (swap, create-exchange)")]
    pub mode: RoutingMode,

    #[clap(long, env = "SWAP_ROUTER_MAX_HOPS", help = "Maximum number of hops in the route")]
    pub max_hops: Option<usize>,

    #[clap(long, env = "SWAP_ROUTER_SORT_PAIRS", help = "Sort pairs by pool address before searching")]
    pub sort_pairs: bool,
}

impl Args {
    /// Build a router from the parsed arguments
    pub fn router(&self) -> Result<Router> {
        let config = RouterConfig {
            mode: self.mode,
            max_hops: self.max_hops,
            sort_pairs: self.sort_pairs,
        };

        tracing::debug!(
            mode = ?config.mode,
            max_hops = ?config.max_hops,
            sort_pairs = config.sort_pairs,
            "Router configuration from CLI arguments"
        );

        RouterBuilder::new().config(config).build()
    }

    /// Load the pair snapshot
    pub fn load_pairs(&self) -> Result<Vec<RouterPair>> {
        let raw = std::fs::read_to_string(&self.pairs).map_err(|e| {
            anyhow::anyhow!("Failed to read pair snapshot {}: {}", self.pairs.display(), e)
        })?;
        let pairs: Vec<RouterPair> = serde_json::from_str(&raw)?;

        tracing::info!(
            path = %self.pairs.display(),
            pair_count = pairs.len(),
            "Pair snapshot loaded"
        );

        Ok(pairs)
    }
}

pub fn parse_cli_args() -> Args {
    Args::parse()
}
