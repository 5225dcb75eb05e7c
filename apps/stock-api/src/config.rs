//! Configuration for Stock API

use core_config::{AppInfo, FromEnv, app_info, env_required, server::ServerConfig};
use database::postgres::PostgresConfig;
use domain_stock::PaginationConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub pagination: PaginationConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let pagination = pagination_from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            pagination,
            environment,
        })
    }
}

// Both bounds are mandatory; a missing or malformed value aborts startup.
fn pagination_from_env() -> eyre::Result<PaginationConfig> {
    let default_limit: i64 = env_required("PAGINATION_DEFAULT_LIMIT")?
        .parse()
        .map_err(|e| eyre::eyre!("Invalid PAGINATION_DEFAULT_LIMIT: {}", e))?;
    let max_limit: i64 = env_required("PAGINATION_MAX_LIMIT")?
        .parse()
        .map_err(|e| eyre::eyre!("Invalid PAGINATION_MAX_LIMIT: {}", e))?;

    PaginationConfig::new(default_limit, max_limit)
        .map_err(|e| eyre::eyre!("Invalid pagination bounds: {}", e))
}
