//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, to_document},
    options::IndexOptions,
};
use std::future::Future;
use std::time::Duration;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Default collection name
pub const DEFAULT_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
///
/// Every call is bounded by `operation_timeout`; an expired call fails with
/// [`ProductError::Timeout`].
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
    operation_timeout: Duration,
}

impl MongoProductRepository {
    pub fn new(db: &Database, collection_name: &str, operation_timeout: Duration) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self {
            collection,
            operation_timeout,
        }
    }

    /// Ensure the unique `sku` index exists. Safe to call on every startup.
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "sku": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_sku_unique".to_string())
                    .build(),
            )
            .build();

        self.bounded(async move { self.collection.create_index(index).await })
            .await?;
        tracing::info!(collection = %self.collection.name(), "Product indexes ensured");
        Ok(())
    }

    /// Underlying typed collection, for reading stored documents directly
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    async fn bounded<T, F>(&self, operation: F) -> ProductResult<T>
    where
        F: Future<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, operation).await {
            Ok(result) => result.map_err(ProductError::from),
            Err(_) => Err(ProductError::Timeout(self.operation_timeout)),
        }
    }

    fn sku_filter(sku: &str) -> Document {
        doc! { "sku": sku }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.bounded(async move {
            let cursor = self.collection.find(doc! {}).await?;
            cursor.try_collect::<Vec<Product>>().await
        })
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_sku(&self, sku: &str) -> ProductResult<Option<Product>> {
        self.bounded(async move { self.collection.find_one(Self::sku_filter(sku)).await })
            .await
    }

    #[instrument(skip(self, product), fields(sku = %product.sku))]
    async fn upsert(&self, product: &Product) -> ProductResult<()> {
        let fields = to_document(product)?;

        let result = self
            .bounded(async move {
                self.collection
                    .update_one(Self::sku_filter(&product.sku), doc! { "$set": fields })
                    .upsert(true)
                    .await
            })
            .await?;

        tracing::debug!(
            matched = result.matched_count,
            upserted = result.upserted_id.is_some(),
            "Product upserted"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, sku: &str) -> ProductResult<()> {
        let result = self
            .bounded(async move { self.collection.delete_one(Self::sku_filter(sku)).await })
            .await?;

        tracing::debug!(deleted = result.deleted_count, "Product delete applied");
        Ok(())
    }
}
