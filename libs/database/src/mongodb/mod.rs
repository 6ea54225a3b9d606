//! MongoDB connector and utilities
//!
//! Provides connection management and MongoDB-specific helpers.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{MongoError, connect_from_config, ping};
pub use health::{HealthStatus, check_health};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
