use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Persistence contract for products, keyed by `sku`.
///
/// Implementations can use different storage backends; the service only
/// depends on this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in store order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// `None` when no product has this sku
    async fn find_by_sku(&self, sku: &str) -> ProductResult<Option<Product>>;

    /// Insert, or replace the fields of the product with the same sku
    async fn upsert(&self, product: &Product) -> ProductResult<()>;

    /// Deleting a missing sku is not an error
    async fn delete(&self, sku: &str) -> ProductResult<()>;
}
