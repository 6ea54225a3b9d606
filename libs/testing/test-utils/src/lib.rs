//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `mongo` (default): Enables MongoDB test infrastructure
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let db = mongo.database(&builder.database_name());
//!     let sku = builder.sku(0);
//! }
//! ```

// Conditionally compile database modules based on features
#[cfg(feature = "mongo")]
mod mongo;

// Re-export based on enabled features
#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_resource");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a well-formed SKU (`TST-` plus 7 digits) for testing
    ///
    /// Different `index` values give different SKUs for the same seed.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let sku = TestDataBuilder::new(42).sku(0);
    /// assert_eq!(sku.len(), "TST-1234567".len());
    /// ```
    pub fn sku(&self, index: u64) -> String {
        let digits = self.seed.wrapping_add(index.wrapping_mul(7_919)) % 10_000_000;
        format!("TST-{:07}", digits)
    }

    /// Database name unique to this seed
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that a JSON body carries `field` with `expected` as a string
    pub fn assert_json_str(body: &serde_json::Value, field: &str, expected: &str) {
        assert_eq!(
            body.get(field).and_then(|v| v.as_str()),
            Some(expected),
            "expected `{}` to be {:?} in {}",
            field,
            expected,
            body
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.sku(0), builder2.sku(0));
        assert_eq!(builder1.database_name(), builder2.database_name());
    }

    #[test]
    fn test_data_builder_from_name() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.database_name(), builder2.database_name());
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.database_name(), builder2.database_name());
    }

    #[test]
    fn test_assert_some_returns_value() {
        assert_eq!(assertions::assert_some(Some(3), "value"), 3);
    }

    #[test]
    #[should_panic(expected = "lookup: expected Some")]
    fn test_assert_some_panics_on_none() {
        assertions::assert_some(None::<u8>, "lookup");
    }

    #[test]
    fn test_sku_shape() {
        let builder = TestDataBuilder::from_test_name("sku_shape");
        for index in 0..5 {
            let sku = builder.sku(index);
            let (prefix, digits) = sku.split_once('-').unwrap();
            assert_eq!(prefix, "TST");
            assert_eq!(digits.len(), 7);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
        assert_ne!(builder.sku(0), builder.sku(1));
    }
}
