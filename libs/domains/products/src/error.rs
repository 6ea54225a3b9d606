use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("invalid product")]
    InvalidProduct,

    #[error("product not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("database operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Coarse classification that decides the HTTP status of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidProduct,
    NotFound,
    Store,
}

impl ProductError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::InvalidProduct => ErrorKind::InvalidProduct,
            ProductError::NotFound(_) => ErrorKind::NotFound,
            ProductError::Database(_) | ProductError::Timeout(_) | ProductError::Serialization(_) => {
                ErrorKind::Store
            }
        }
    }
}

/// Message clients see for a missing product.
pub const PRODUCT_NOT_FOUND: &str = "product not found";

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err.kind() {
            ErrorKind::InvalidProduct => AppError::BadRequest(err.to_string()),
            ErrorKind::NotFound => AppError::NotFound(PRODUCT_NOT_FOUND.to_string()),
            ErrorKind::Store => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for ProductError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ProductError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_kind_to_status_table() {
        let cases = [
            (ProductError::InvalidProduct, StatusCode::BAD_REQUEST),
            (ProductError::NotFound("FAL-8406270".into()), StatusCode::NOT_FOUND),
            (ProductError::Database("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ProductError::Timeout(Duration::from_secs(5)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ProductError::Serialization("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err.clone()).status(), status, "{err:?}");
        }
    }

    #[test]
    fn test_not_found_message_hides_sku() {
        match AppError::from(ProductError::NotFound("FAL-8406270".into())) {
            AppError::NotFound(msg) => assert_eq!(msg, PRODUCT_NOT_FOUND),
            other => panic!("unexpected {other:?}"),
        }
    }
}
