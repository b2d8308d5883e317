//! Liveness and database diagnostic endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Maximum number of collection names shown in the diagnostic report
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Maximum number of characters of a store error shown in the report
pub const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize, ToSchema)]
pub struct RootMessage {
    pub message: String,
}

/// Result of probing the database from `/test`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn presence(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

impl DiagnosticReport {
    /// Build the report from the outcome of enumerating collections.
    pub fn new(
        collections: Result<Vec<String>, String>,
        database_url_set: bool,
        database_name_set: bool,
    ) -> Self {
        let (database, collections) = match collections {
            Ok(mut names) => {
                names.truncate(MAX_REPORTED_COLLECTIONS);
                ("✅ Connected & Working".to_string(), names)
            }
            Err(error) => {
                let shown: String = error.chars().take(MAX_ERROR_CHARS).collect();
                (format!("⚠️  Connected but Error: {shown}"), Vec::new())
            }
        };

        Self {
            backend: "✅ Running".to_string(),
            database,
            database_url: presence(database_url_set),
            database_name: presence(database_name_set),
            connection_status: "Connected".to_string(),
            collections,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/test", get(test_database))
        .with_state(state)
}

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses((status = 200, description = "Backend is running", body = RootMessage))
)]
pub async fn read_root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Readopt backend running".to_string(),
    })
}

/// Database diagnostic report. Store failures are reported in the body,
/// never as an error status.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Status",
    responses((status = 200, description = "Diagnostic report", body = DiagnosticReport))
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let collections = state
        .store
        .list_collection_names()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Collection enumeration failed");
            e.to_string()
        });

    Json(DiagnosticReport::new(
        collections,
        state.config.database_url_set,
        state.config.database_name_set,
    ))
}
