//! Providers API - REST server for provider catalogue management

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalogue::InMemoryCatalogueStore;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store = InMemoryCatalogueStore::new();

    // Build REST router
    let api_routes = api::routes(store);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(config.app));

    info!("Starting Providers API on port {}", config.server.port);

    // Run server with graceful shutdown
    create_production_app(app, &config.server, Duration::from_secs(30), async {
        info!("Shutting down: dropping in-memory catalogue store");
    })
    .await?;

    info!("Providers API shutdown complete");
    Ok(())
}
