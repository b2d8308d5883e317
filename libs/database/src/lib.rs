//! Database library providing the document store used by the Readopt services
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health checks and [`mongodb::DocumentStore`]
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, DocumentStore, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "readopt");
//! let client = mongodb::connect_from_config(&config).await?;
//! let store = DocumentStore::new(client.database(config.database()));
//!
//! let id = store.create_document("listing", &new_listing).await?;
//! let found: Option<ListingRecord> = store.find_by_id("listing", &id).await?;
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
