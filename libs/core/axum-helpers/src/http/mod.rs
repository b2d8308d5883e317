//! HTTP middleware module.
//!
//! - CORS configuration (open by default, restricted by `CORS_ALLOWED_ORIGIN`)
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_layer_from_env, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(cors_layer_from_env()?);
//! ```

pub mod cors;
pub mod security;

pub use cors::{
    CORS_ALLOWED_ORIGIN, cors_layer_from_env, create_cors_layer, create_permissive_cors_layer,
    parse_origins,
};
pub use security::security_headers;
