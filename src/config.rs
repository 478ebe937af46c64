use anyhow::Result;
use ::config::{Config, Environment, File};
use sea_orm::Database;
use serde::Deserialize;
use service::default_services;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Runtime configuration.
///
/// Values are layered: built-in defaults, then an optional `ecommerce.{toml,yaml,json}`
/// file in the working directory, then environment variables (`DATABASE_URL`,
/// `BIND_ADDRESS`, `REQUEST_TIMEOUT_SECS`). A `.env` file is loaded first.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config: AppConfig = Config::builder()
            .set_default("database_url", "sqlite://ecommerce.db?mode=rwc")?
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("request_timeout_secs", 30_i64)?
            .add_source(File::with_name("ecommerce").required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Command line flags win over every other source.
    pub fn with_overrides(mut self, database_url: Option<String>, bind_address: Option<String>) -> Self {
        if let Some(database_url) = database_url {
            self.database_url = database_url;
        }
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        self
    }
}

/// Connect to the database and build the services the handlers use
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    let services = default_services(db.clone());

    Ok(AppState {
        db,
        users: services.users,
        carts: services.carts,
        orders: services.orders,
    })
}

#[cfg(test)]
mod tests {
    use super::AppConfig;

    fn sample() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = sample().with_overrides(None, Some("0.0.0.0:8080".to_string()));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_no_overrides_keep_loaded_values() {
        let config = sample().with_overrides(None, None);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_address, "127.0.0.1:3000");
    }
}
