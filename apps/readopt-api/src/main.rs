use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{DocumentStore, check_health_detailed, close_client, connect_from_config};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    // Single attempt; the client connects lazily
    let mongo_client = connect_from_config(&config.mongodb).await?;

    let store = DocumentStore::new(mongo_client.database(config.mongodb.database()));

    let health = check_health_detailed(&mongo_client).await;
    if health.healthy {
        info!(
            database = store.name(),
            response_time_ms = health.response_time_ms,
            "MongoDB reachable"
        );
    } else {
        warn!(
            error = ?health.message,
            "MongoDB not reachable at startup, serving anyway"
        );
    }

    let state = AppState {
        config: Arc::new(config),
        store,
    };

    let router = create_router::<openapi::ApiDoc>(api::root_routes(&state), api::routes(&state))?;

    info!("Starting Readopt API with graceful shutdown (30s timeout)");

    let server_config = state.config.server.clone();
    create_production_app(router, &server_config, Duration::from_secs(30), async move {
        drop(state);
        close_client(mongo_client, "main").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Readopt API shutdown complete");
    Ok(())
}
