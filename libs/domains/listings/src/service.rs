//! Listing Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ListingError, ListingResult};
use crate::models::{CreateListing, LISTING_LIMIT, Listing, ListingFilter};
use crate::repository::ListingRepository;

/// Listing service providing business logic operations
pub struct ListingService<R: ListingRepository> {
    repository: Arc<R>,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store a new listing, returning its identifier
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_listing(&self, input: CreateListing) -> ListingResult<String> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Get a listing by identifier
    #[instrument(skip(self))]
    pub async fn get_listing(&self, id: &str) -> ListingResult<Listing> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ListingError::NotFound(id.to_string()))
    }

    /// Search listings, capped at [`LISTING_LIMIT`]
    #[instrument(skip(self))]
    pub async fn list_listings(&self, filter: ListingFilter) -> ListingResult<Vec<Listing>> {
        let mut listings = self.repository.list(filter, LISTING_LIMIT).await?;
        listings.truncate(LISTING_LIMIT);
        Ok(listings)
    }
}

impl<R: ListingRepository> Clone for ListingService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
