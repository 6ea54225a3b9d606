use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Connection not established within {0:?}")]
    Timeout(Duration),
}

/// Connect using a MongoConfig and verify the server answers a ping.
///
/// The whole attempt (URI parsing, server selection, ping) is bounded by
/// `config.connect_timeout()`. There is no retry: a failure here is meant to
/// abort startup.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::new("localhost:27017", "catalog");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let budget = config.connect_timeout();
    info!(url = %config.redacted_url(), timeout = ?budget, "Connecting to MongoDB");

    let client = tokio::time::timeout(budget, connect_and_ping(config, budget))
        .await
        .map_err(|_| MongoError::Timeout(budget))??;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

async fn connect_and_ping(config: &MongoConfig, budget: Duration) -> Result<Client, MongoError> {
    let mut options = ClientOptions::parse(config.url()).await?;

    options.connect_timeout = Some(budget);
    options.server_selection_timeout = Some(budget);
    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    ping(&client)
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    Ok(client)
}

/// Round-trip a `ping` command to the server.
pub async fn ping(client: &Client) -> Result<(), mongodb::error::Error> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}
