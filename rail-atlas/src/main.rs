//! Rail atlas HTTP server.
//!
//! # Configuration
//!
//! - `RAIL_ATLAS_ADDR` - listen address (default: 127.0.0.1:3000)
//! - `RUST_LOG` - log filter (default: info)

use rail_atlas::config::ServerConfig;
use rail_atlas::map::MapConfig;
use rail_atlas::web::{AppState, create_router};
use tracing::{error, info};

/// Initialize tracing with an env-driven filter.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ServerConfig::from_env().map_err(|e| {
        error!(error = %e, "invalid configuration");
        e
    })?;

    let state = AppState::new(MapConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "rail atlas listening");
    info!("GET  /health              - health check");
    info!("GET  /query/:kind?country - Overpass query (station, rail, city)");
    info!("POST /map                 - render a map from GeoJSON datasets");

    axum::serve(listener, app).await?;
    Ok(())
}
