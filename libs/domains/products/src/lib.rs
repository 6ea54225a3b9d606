//! Products Domain
//!
//! Catalog products stored in MongoDB, keyed by SKU.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP verbs and paths, status codes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Endpoints  │  ← Typed request/response per use case, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Middleware chain (logging) around the basic service
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product entity
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     endpoint::ProductEndpoints,
//!     mongodb::MongoProductRepository,
//!     service::ProductServiceBuilder,
//! };
//! use mongodb::Client;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let repository = MongoProductRepository::new(&db, "products", Duration::from_secs(5));
//! repository.init_indexes().await?;
//!
//! let service = ProductServiceBuilder::new(repository).with_logging().build();
//! let router = handlers::router(ProductEndpoints::new(service));
//! # Ok(())
//! # }
//! ```

pub mod endpoint;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use endpoint::{Failer, ProductEndpoints};
pub use error::{ErrorKind, ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::Product;
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::{
    BasicProductService, LoggingMiddleware, ProductService, ProductServiceBuilder,
    ServiceMiddleware,
};
pub use validation::{ValidationErrors, validate};
