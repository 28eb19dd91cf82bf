pub mod cli;

use swap_router::errors::{Result, SwapRouterError};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("route_planner=info,swap_router=info")),
        )
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_cli_args();
    let router = args.router()?;
    let pairs = args.load_pairs()?;

    tracing::info!(from = %args.from, into = %args.into, "Planning route");

    match router.assemble(&pairs, &args.from, &args.into) {
        Ok(hops) => {
            println!("{}", serde_json::to_string_pretty(&hops)?);
            Ok(())
        }
        Err(e) => {
            if e.is_missing_route() {
                tracing::error!(error = %e, "No liquidity route exists between the requested tokens");
            } else {
                tracing::error!(error = %e, "Route request rejected");
            }
            Err(SwapRouterError::Router(e))
        }
    }
}
