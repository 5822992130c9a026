use std::net::SocketAddr;

use baywheels_trmnl::cli::{run_once, wants_once};
use baywheels_trmnl::config::AppConfig;
use baywheels_trmnl::gbfs::{GbfsClient, GbfsConfig};
use baywheels_trmnl::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "baywheels_trmnl=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so `--once` output stays clean JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;

    let feed_config = GbfsConfig::new().with_timeout(config.fetch_timeout_secs());
    let feed = GbfsClient::new(feed_config)?;

    // One-shot mode: print the envelope and exit.
    if wants_once(std::env::args().skip(1)) {
        println!("{}", run_once(&feed, &config.station).await?);
        return Ok(());
    }

    if let Err(e) = config.station.validate() {
        warn!(error = %e, "station not configured; requests will fail until it is");
    }

    info!(
        station = config.station.station_short_name.as_deref().unwrap_or("Not configured"),
        feed = %config.station.feed_base_url,
        "BayWheels TRMNL server starting"
    );

    let state = AppState::new(feed, config.station);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
