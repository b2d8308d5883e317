use async_trait::async_trait;

use crate::error::ListingResult;
use crate::models::{CreateListing, Listing, ListingFilter};

/// Repository trait for Listing persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Insert a listing and return its new identifier
    async fn create(&self, input: CreateListing) -> ListingResult<String>;

    /// Get a listing by identifier. A malformed identifier is an error.
    async fn get_by_id(&self, id: &str) -> ListingResult<Option<Listing>>;

    /// Listings matching `filter`, at most `limit` of them
    async fn list(&self, filter: ListingFilter, limit: usize) -> ListingResult<Vec<Listing>>;
}
