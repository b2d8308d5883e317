//! MongoDB connector, health checks and the generic document store
//!
//! Provides connection management and MongoDB-specific helpers.

mod config;
mod connector;
mod health;
mod store;

pub use config::{DEFAULT_DATABASE, DEFAULT_URL, MongoConfig};
pub use connector::{close_client, connect_from_config};
pub use health::{HealthStatus, check_health_detailed};
pub use store::{DocumentStore, StoreError, StoreResult};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database, bson};
