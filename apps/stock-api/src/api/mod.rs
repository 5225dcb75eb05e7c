//! API routes module

pub mod health;

use axum::Router;
use database::postgres::DatabaseConnection;
use domain_stock::{PgStockRepository, StockService, handlers};

use crate::config::Config;

/// Create all API routes
pub fn routes(db: &DatabaseConnection, config: &Config) -> Router {
    let repository = PgStockRepository::new(db.clone());
    let service = StockService::new(repository, config.pagination);

    Router::new()
        .nest("/stock", handlers::stock_router(service.clone()))
        .nest("/restock", handlers::restock_router(service))
}
