//! Listings API routes

use axum::Router;
use domain_listings::{ListingService, MongoListingRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoListingRepository::new(state.store.clone());
    let service = ListingService::new(repository);
    handlers::router(service)
}
