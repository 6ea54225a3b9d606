//! Product Service - orchestration over the repository
//!
//! The basic service passes calls through to a [`ProductRepository`].
//! Cross-cutting concerns are [`ServiceMiddleware`] layers stacked around it
//! by [`ProductServiceBuilder`].

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Product use cases.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_all_products(&self) -> ProductResult<Vec<Product>>;

    /// Fails with [`ProductError::NotFound`] when no product has this sku
    async fn get_product(&self, sku: &str) -> ProductResult<Product>;

    async fn upsert_product(&self, product: &Product) -> ProductResult<()>;

    async fn delete_product(&self, sku: &str) -> ProductResult<()>;
}

/// Service that forwards every call to the repository.
pub struct BasicProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> BasicProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

impl<R: ProductRepository> Clone for BasicProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductService for BasicProductService<R> {
    async fn get_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    async fn get_product(&self, sku: &str) -> ProductResult<Product> {
        self.repository
            .find_by_sku(sku)
            .await?
            .ok_or_else(|| ProductError::NotFound(sku.to_string()))
    }

    async fn upsert_product(&self, product: &Product) -> ProductResult<()> {
        self.repository.upsert(product).await
    }

    async fn delete_product(&self, sku: &str) -> ProductResult<()> {
        self.repository.delete(sku).await
    }
}

/// Wraps a service in another service that adds behavior around each call.
pub trait ServiceMiddleware: Send + Sync {
    fn wrap(&self, next: Arc<dyn ProductService>) -> Arc<dyn ProductService>;
}

/// Assembles a [`BasicProductService`] with an ordered middleware list.
///
/// The first layer added is the outermost: it sees every call first and
/// its result last.
///
/// ```rust,ignore
/// let service = ProductServiceBuilder::new(repository)
///     .with_logging()
///     .build();
/// ```
pub struct ProductServiceBuilder<R: ProductRepository> {
    repository: R,
    layers: Vec<Box<dyn ServiceMiddleware>>,
}

impl<R: ProductRepository + 'static> ProductServiceBuilder<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            layers: Vec::new(),
        }
    }

    pub fn layer(mut self, middleware: impl ServiceMiddleware + 'static) -> Self {
        self.layers.push(Box::new(middleware));
        self
    }

    /// Default chain: call logging.
    pub fn with_logging(self) -> Self {
        self.layer(LoggingMiddleware)
    }

    pub fn build(self) -> Arc<dyn ProductService> {
        let base: Arc<dyn ProductService> = Arc::new(BasicProductService::new(self.repository));
        self.layers
            .iter()
            .rev()
            .fold(base, |inner, middleware| middleware.wrap(inner))
    }
}

/// Logs method, sku, latency and outcome after every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl ServiceMiddleware for LoggingMiddleware {
    fn wrap(&self, next: Arc<dyn ProductService>) -> Arc<dyn ProductService> {
        Arc::new(LoggingService { next })
    }
}

struct LoggingService {
    next: Arc<dyn ProductService>,
}

fn log_call<T>(method: &str, sku: Option<&str>, started: Instant, result: &ProductResult<T>) {
    let took_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(_) => tracing::info!(method, sku, took_ms, success = true, "product service call"),
        Err(e) => tracing::info!(
            method,
            sku,
            took_ms,
            success = false,
            error = %e,
            "product service call"
        ),
    }
}

#[async_trait]
impl ProductService for LoggingService {
    async fn get_all_products(&self) -> ProductResult<Vec<Product>> {
        let started = Instant::now();
        let result = self.next.get_all_products().await;
        log_call("get_all_products", None, started, &result);
        result
    }

    async fn get_product(&self, sku: &str) -> ProductResult<Product> {
        let started = Instant::now();
        let result = self.next.get_product(sku).await;
        log_call("get_product", Some(sku), started, &result);
        result
    }

    async fn upsert_product(&self, product: &Product) -> ProductResult<()> {
        let started = Instant::now();
        let result = self.next.upsert_product(product).await;
        log_call("upsert_product", Some(&product.sku), started, &result);
        result
    }

    async fn delete_product(&self, sku: &str) -> ProductResult<()> {
        let started = Instant::now();
        let result = self.next.delete_product(sku).await;
        log_call("delete_product", Some(sku), started, &result);
        result
    }
}
