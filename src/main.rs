mod app;
mod config;
mod routes;
mod services;
mod types;
mod utils;

use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!("Starting app...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if config.mapbox_token.is_none() {
        warn!("MAPBOX_TOKEN not set, every location lookup will fail");
    }
    if config.mbta_key.is_none() {
        warn!("MBTA_API_KEY not set, using unauthenticated MBTA requests");
    }

    let bind_addr = config.bind_addr.clone();
    let app = match app::gen_state(config) {
        Ok(state) => app::gen_app(state),
        Err(e) => {
            error!("Failed to build app: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Listening on {}", bind_addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
