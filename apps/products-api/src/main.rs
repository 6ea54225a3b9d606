//! Products API - REST server over a MongoDB product catalog

use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Upper bound for closing MongoDB connections after the server stops
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env().wrap_err("Invalid configuration")?;
    init_tracing(&config.environment);

    info!(
        name = config.app.name,
        version = config.app.version,
        mongodb = %config.mongodb.redacted_url(),
        database = config.mongodb.database(),
        collection = %config.collection,
        "Starting Products API"
    );

    let mongo_client = database::mongodb::connect_from_config(&config.mongodb)
        .await
        .wrap_err("MongoDB is unreachable")?;

    let db = mongo_client.database(config.mongodb.database());

    let state = AppState {
        config: config.clone(),
        mongo_client,
        db,
    };

    api::init_indexes(&state)
        .await
        .wrap_err("Failed to create product indexes")?;

    let router = create_router::<openapi::ApiDoc>(api::routes(&state));

    let mongo_client = state.mongo_client.clone();
    create_production_app(router, &config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connection closed");
    })
    .await
    .wrap_err("Server error")?;

    info!("Products API shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use core_config::server::ServerConfig;
    use core_config::{AppInfo, Environment};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use mongodb::Client;
    use test_utils::assertions::assert_json_str;
    use tower::ServiceExt;

    /// Full router against a MongoDB address where nothing listens.
    async fn unreachable_app() -> Router {
        let mut mongodb = MongoConfig::new("127.0.0.1:1", "catalog");
        mongodb.operation_timeout_secs = 2;

        let mongo_client =
            Client::with_uri_str("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200")
                .await
                .unwrap();
        let db = mongo_client.database("catalog");

        let state = AppState {
            config: Config {
                app: AppInfo {
                    name: "products_api",
                    version: "0.1.0",
                },
                mongodb,
                server: ServerConfig::default(),
                environment: Environment::Development,
                collection: "products".to_string(),
            },
            mongo_client,
            db,
        };

        create_router::<openapi::ApiDoc>(api::routes(&state))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_is_independent_of_mongodb() {
        let (status, body) = get(unreachable_app().await, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_json_str(&body, "status", "healthy");
        assert_json_str(&body, "name", "products_api");
    }

    #[tokio::test]
    async fn test_ready_reports_unreachable_mongodb() {
        let (status, body) = get(unreachable_app().await, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_json_str(&body, "mongodb", "disconnected");
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_500() {
        let (status, body) = get(unreachable_app().await, "/products").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get(unreachable_app().await, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = get(unreachable_app().await, "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/products"].is_object());
    }
}
