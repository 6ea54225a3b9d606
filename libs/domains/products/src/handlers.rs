//! HTTP transport for the product endpoints

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError, ErrorResponse,
    errors::responses::{InternalServerErrorResponse, NotFoundResponse},
};
use serde::Serialize;
use utoipa::OpenApi;

use crate::endpoint::{
    DeleteProductRequest, DeleteProductResponse, Failer, GetAllProductsRequest,
    GetAllProductsResponse, GetProductRequest, GetProductResponse, ProductEndpoints,
    UpsertProductRequest, UpsertProductResponse,
};
use crate::models::Product;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(get_all_products, get_product, upsert_product, delete_product),
    components(
        schemas(
            Product,
            GetAllProductsResponse,
            GetProductResponse,
            UpsertProductResponse,
            DeleteProductResponse,
            ErrorResponse
        ),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router(endpoints: ProductEndpoints) -> Router {
    Router::new()
        .route("/products", get(get_all_products).put(upsert_product))
        .route("/products/{sku}", get(get_product).delete(delete_product))
        .with_state(endpoints)
}

/// 200 with the response body, or the mapped error as `{"error": ...}`.
fn encode<R: Failer + Serialize>(response: R) -> Response {
    match response.failed() {
        Some(err) => AppError::from(err.clone()).into_response(),
        None => (StatusCode::OK, Json(response)).into_response(),
    }
}

/// Upsert failures keep the response body (`{"details": ...}` or `{}`).
fn encode_upsert(response: UpsertProductResponse) -> Response {
    let Some(err) = response.failed() else {
        return (StatusCode::OK, Json(response)).into_response();
    };

    let status = AppError::from(err.clone()).status();
    if status.is_server_error() {
        tracing::error!(error = %err, "Product upsert failed");
    } else {
        tracing::info!(error = %err, details = ?response.details, "Product rejected");
    }
    (status, Json(response)).into_response()
}

/// List every product
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = GetAllProductsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all_products(State(endpoints): State<ProductEndpoints>) -> Response {
    encode(endpoints.get_all_products(GetAllProductsRequest).await)
}

/// Get a product by SKU
#[utoipa::path(
    get,
    path = "/products/{sku}",
    tag = "Products",
    params(
        ("sku" = String, Path, description = "Product SKU", example = "FAL-8406270")
    ),
    responses(
        (status = 200, description = "Product found", body = GetProductResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product(
    State(endpoints): State<ProductEndpoints>,
    Path(sku): Path<String>,
) -> Response {
    encode(endpoints.get_product(GetProductRequest { sku }).await)
}

/// Create or replace a product
///
/// The body is the product itself; JSON `null` counts as a missing product.
#[utoipa::path(
    put,
    path = "/products",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Product stored", body = UpsertProductResponse),
        (status = 400, description = "Validation failed, field messages in `details`", body = UpsertProductResponse),
        (status = 500, description = "Malformed body or store failure")
    )
)]
async fn upsert_product(
    State(endpoints): State<ProductEndpoints>,
    body: Bytes,
) -> Result<Response, AppError> {
    let product: Option<Product> = serde_json::from_slice(&body)?;
    Ok(encode_upsert(
        endpoints.upsert_product(UpsertProductRequest { product }).await,
    ))
}

/// Delete a product by SKU
///
/// Deleting an unknown SKU succeeds.
#[utoipa::path(
    delete,
    path = "/products/{sku}",
    tag = "Products",
    params(
        ("sku" = String, Path, description = "Product SKU", example = "FAL-8406270")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteProductResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product(
    State(endpoints): State<ProductEndpoints>,
    Path(sku): Path<String>,
) -> Response {
    encode(endpoints.delete_product(DeleteProductRequest { sku }).await)
}
