//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_products::mongodb::DEFAULT_COLLECTION;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `DB_COLLECTION`, the collection holding one document per product
    pub collection: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let app = app_info!();
        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb.app_name = Some(app.name.to_string());
        }
        let server = ServerConfig::from_env()?;
        let collection = env_or_default("DB_COLLECTION", DEFAULT_COLLECTION);

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
            collection,
        })
    }
}
