use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::StoreError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Listing not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ListingResult<T> = Result<T, ListingError>;

/// Convert ListingError to AppError for standardized error responses
impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        match err {
            ListingError::NotFound(_) => AppError::NotFound("Listing not found".to_string()),
            ListingError::Validation(errors) => AppError::ValidationError(errors),
            ListingError::Store(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
