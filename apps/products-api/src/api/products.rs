//! Products API routes

use axum::Router;
use domain_products::{MongoProductRepository, ProductEndpoints, ProductServiceBuilder, handlers};

use crate::state::AppState;

fn repository(state: &AppState) -> MongoProductRepository {
    MongoProductRepository::new(
        &state.db,
        &state.config.collection,
        state.config.mongodb.operation_timeout(),
    )
}

/// Create products router
pub fn router(state: &AppState) -> Router {
    let service = ProductServiceBuilder::new(repository(state))
        .with_logging()
        .build();
    handlers::router(ProductEndpoints::new(service))
}

/// Initialize products indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    repository(state).init_indexes().await?;
    Ok(())
}
