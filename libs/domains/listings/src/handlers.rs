use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{
    QueryParams, ValidatedJson,
    errors::responses::{InternalServerErrorResponse, NotFoundResponse, UnprocessableEntityResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ListingResult;
use crate::models::{BookCondition, CreateListing, CreatedId, Listing, ListingFilter};
use crate::repository::ListingRepository;
use crate::service::ListingService;

/// OpenAPI documentation for Listings API
#[derive(OpenApi)]
#[openapi(
    paths(list_listings, create_listing, get_listing),
    components(
        schemas(Listing, CreateListing, CreatedId, BookCondition, ListingFilter),
        responses(
            NotFoundResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Listings", description = "Book listings for sale")
    )
)]
pub struct ApiDoc;

/// Create the listings router with all HTTP endpoints
pub fn router<R: ListingRepository + 'static>(service: ListingService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_listings).post(create_listing))
        .route("/{id}", get(get_listing))
        .with_state(shared_service)
}

/// Search listings by free text and category
#[utoipa::path(
    get,
    path = "",
    tag = "Listings",
    params(ListingFilter),
    responses(
        (status = 200, description = "Matching listings (at most 100)", body = Vec<Listing>),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_listings<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    QueryParams(filter): QueryParams<ListingFilter>,
) -> ListingResult<Json<Vec<Listing>>> {
    let listings = service.list_listings(filter).await?;
    Ok(Json(listings))
}

/// Create a new listing
#[utoipa::path(
    post,
    path = "",
    tag = "Listings",
    request_body = CreateListing,
    responses(
        (status = 200, description = "Listing created", body = CreatedId),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateListing>,
) -> ListingResult<Json<CreatedId>> {
    let id = service.create_listing(input).await?;
    Ok(Json(CreatedId { id }))
}

/// Get a listing by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Listings",
    params(
        ("id" = String, Path, description = "Listing ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Listing found", body = Listing),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    Path(id): Path<String>,
) -> ListingResult<Json<Listing>> {
    let listing = service.get_listing(&id).await?;
    Ok(Json(listing))
}
