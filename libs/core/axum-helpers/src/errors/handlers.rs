use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".to_string()).into_response()
}
