use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod rest;

use config::ServerConfig;
use domain::{Clock, EventCatalog};
use rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let catalog = EventCatalog::new(config.fixture_path.clone());
    info!("Serving events from {}", catalog.fixture_path().display());
    // A broken fixture is reported per request too, so only warn here
    if let Err(e) = catalog.load().await {
        warn!("Event fixture is not usable yet: {}", e);
    }

    let clock = match config.today {
        Some(today) => {
            info!("Using fixed date {} for upcoming events", today);
            Clock::Fixed(today)
        }
        None => Clock::Local,
    };

    let app = rest::create_router(AppState::new(catalog, clock), &config);

    let listener = TcpListener::bind(config.addr).await?;
    info!("Listening on {}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
