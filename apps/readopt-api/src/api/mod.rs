//! API routes module

pub mod listings;
pub mod root;
pub mod users;

use axum::Router;
use axum_helpers::server::health_router;

use crate::state::AppState;

/// Routes served at the root: liveness, diagnostics and `/health`
pub fn root_routes(state: &AppState) -> Router {
    root::router(state.clone()).merge(health_router(state.config.app))
}

/// Resource routes.
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/listings", listings::router(state))
        .nest("/users", users::router(state))
}
