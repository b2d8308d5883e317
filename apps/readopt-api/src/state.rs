//! Application state management.

use database::mongodb::DocumentStore;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each handler; both fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Arc<Config>,
    /// Document store over the configured database
    pub store: DocumentStore,
}
