//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Rejects with `422 Unprocessable Entity` both when the body cannot be
/// deserialized into `T` (missing field, wrong type, unknown enum value) and
/// when `T::validate` fails. Handlers only ever see valid payloads.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateListing {
///     #[validate(length(min = 1))]
///     title: String,
///     #[validate(range(min = 0.0))]
///     price: f64,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateListing>) -> String {
///     format!("Listing: {}", payload.title)
/// }
///
/// let app = Router::new().route("/listings", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Book {
        #[validate(length(min = 1))]
        title: String,
        #[validate(range(min = 0.0))]
        price: f64,
    }

    async fn create(ValidatedJson(book): ValidatedJson<Book>) -> String {
        book.title
    }

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route("/books", post(create));
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/books")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_valid_payload_reaches_handler() {
        let app = Router::new().route("/books", post(create));
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/books")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"title":"Dune","price":5.5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Dune");
    }

    #[tokio::test]
    async fn test_validator_failure_is_422() {
        let (status, body) = post_json(r#"{"title":"","price":-1}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["title"].is_array());
        assert!(body["details"]["price"].is_array());
    }

    #[tokio::test]
    async fn test_missing_field_is_422() {
        let (status, body) = post_json(r#"{"title":"Dune"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "JSON_EXTRACTION");
        assert!(
            body["details"]["body"]
                .as_str()
                .unwrap()
                .contains("price")
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_422() {
        let (status, body) = post_json("{not json").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], 1003);
    }
}
