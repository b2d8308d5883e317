//! Listings Domain
//!
//! Books offered for sale, stored in the `listing` collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, result cap
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← DTOs, stored records
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use database::mongodb::DocumentStore;
//! use domain_listings::{ListingService, MongoListingRepository, handlers};
//!
//! let store = DocumentStore::new(client.database("readopt"));
//! let service = ListingService::new(MongoListingRepository::new(store));
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ListingError, ListingResult};
pub use handlers::ApiDoc;
pub use models::{
    BookCondition, COLLECTION, CreateListing, CreatedId, LISTING_LIMIT, Listing, ListingFilter,
    ListingRecord,
};
pub use mongodb::MongoListingRepository;
pub use repository::ListingRepository;
pub use service::ListingService;
