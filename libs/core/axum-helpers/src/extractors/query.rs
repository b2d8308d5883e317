//! Query string extractor that rejects with the standard error body.

use crate::errors::AppError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// Query string extractor.
///
/// Behaves like [`axum::extract::Query`], but a query string that cannot be
/// deserialized into `T` (wrong type, repeated single-valued key) is rejected
/// with a `422` [`ErrorResponse`](crate::errors::ErrorResponse) instead of a
/// plain-text `400`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn search(QueryParams(filter): QueryParams<ListingFilter>) -> String {
///     format!("{:?}", filter.q)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}
