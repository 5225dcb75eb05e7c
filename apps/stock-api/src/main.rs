//! Stock API - inventory and restock priority server

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let api_routes = api::routes(&db, &config);
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router
        .merge(health_router(config.app))
        .merge(api::health::router(db));

    info!("Starting Stock API on {}", config.server.address());

    create_app(app, &config.server).await?;

    info!("Stock API shutdown complete");
    Ok(())
}
