use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{InternalServerErrorResponse, NotFoundResponse, UnprocessableEntityResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, CreatedId, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user),
    components(
        schemas(User, CreateUser, CreatedId),
        responses(NotFoundResponse, UnprocessableEntityResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Users", description = "Marketplace users")
    )
)]
pub struct ApiDoc;

pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/{id}", get(get_user))
        .with_state(Arc::new(service))
}

/// Register a user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = CreatedId),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<Json<CreatedId>> {
    let id = service.create_user(input).await?;
    Ok(Json(CreatedId { id }))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<User>> {
    let user = service.get_user(&id).await?;
    Ok(Json(user))
}
