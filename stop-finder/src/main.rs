use std::process::ExitCode;

use stop_finder::FinderConfig;
use stop_finder::StopFinder;
use stop_finder::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Static assets directory, relative to the crate root.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; real deployments set the environment directly
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stop_finder=info,tower_http=info")),
        )
        .init();

    // Credentials are checked here, before anything touches the network
    let config = match FinderConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let finder = match StopFinder::from_config(&config) {
        Ok(finder) => finder,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(AppState::new(finder), STATIC_DIR);

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.listen_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Nearest stop finder listening on http://{}", config.listen_addr);
    info!("  GET  /               - Place name form");
    info!("  GET  /nearest        - Nearest stop (HTML or JSON)");
    info!("  GET  /health         - Health check");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
