//! One typed endpoint per use case.
//!
//! Endpoints never fail themselves: business failures travel inside the
//! response and are exposed through [`Failer`] so the transport can pick a
//! status code.

use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ProductError;
use crate::models::Product;
use crate::service::ProductService;
use crate::validation::{ValidationErrors, validate};

/// Exposes the business error carried by a response, if any.
pub trait Failer {
    fn failed(&self) -> Option<&ProductError>;
}

#[derive(Debug, Default)]
pub struct GetAllProductsRequest;

#[derive(Debug, Serialize, ToSchema)]
pub struct GetAllProductsResponse {
    pub products: Vec<Product>,
    #[serde(skip)]
    pub err: Option<ProductError>,
}

#[derive(Debug)]
pub struct GetProductRequest {
    pub sku: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetProductResponse {
    pub product: Option<Product>,
    #[serde(skip)]
    pub err: Option<ProductError>,
}

#[derive(Debug, Default)]
pub struct UpsertProductRequest {
    pub product: Option<Product>,
}

/// Body is `{}` on success, `{"details": {...}}` when validation failed.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct UpsertProductResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ValidationErrors>,
    #[serde(skip)]
    pub err: Option<ProductError>,
}

#[derive(Debug)]
pub struct DeleteProductRequest {
    pub sku: String,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct DeleteProductResponse {
    #[serde(skip)]
    pub err: Option<ProductError>,
}

macro_rules! impl_failer {
    ($($response:ty),+ $(,)?) => {
        $(
            impl Failer for $response {
                fn failed(&self) -> Option<&ProductError> {
                    self.err.as_ref()
                }
            }
        )+
    };
}

impl_failer!(
    GetAllProductsResponse,
    GetProductResponse,
    UpsertProductResponse,
    DeleteProductResponse,
);

/// The product use cases over a (middleware-wrapped) service.
#[derive(Clone)]
pub struct ProductEndpoints {
    service: Arc<dyn ProductService>,
}

impl ProductEndpoints {
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }

    pub async fn get_all_products(&self, _req: GetAllProductsRequest) -> GetAllProductsResponse {
        match self.service.get_all_products().await {
            Ok(products) => GetAllProductsResponse {
                products,
                err: None,
            },
            Err(err) => GetAllProductsResponse {
                products: Vec::new(),
                err: Some(err),
            },
        }
    }

    pub async fn get_product(&self, req: GetProductRequest) -> GetProductResponse {
        match self.service.get_product(&req.sku).await {
            Ok(product) => GetProductResponse {
                product: Some(product),
                err: None,
            },
            Err(err) => GetProductResponse {
                product: None,
                err: Some(err),
            },
        }
    }

    /// Normalizes and validates before touching the service. An invalid
    /// product never reaches the store.
    pub async fn upsert_product(&self, req: UpsertProductRequest) -> UpsertProductResponse {
        let product = req.product.map(Product::normalized);

        let details = validate(product.as_ref());
        let Some(product) = product.filter(|_| details.is_empty()) else {
            return UpsertProductResponse {
                details: Some(details),
                err: Some(ProductError::InvalidProduct),
            };
        };

        UpsertProductResponse {
            details: None,
            err: self.service.upsert_product(&product).await.err(),
        }
    }

    pub async fn delete_product(&self, req: DeleteProductRequest) -> DeleteProductResponse {
        DeleteProductResponse {
            err: self.service.delete_product(&req.sku).await.err(),
        }
    }
}
