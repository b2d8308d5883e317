use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::DatabaseResult;

/// Build a MongoDB client from a [`MongoConfig`]
///
/// The driver connects lazily, so this only fails on an invalid connection
/// string or options. Reachability is checked separately with
/// [`check_health_detailed`](super::check_health_detailed). There is no retry: callers get the
/// outcome of a single attempt.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "readopt");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!(url = %config.redacted_url(), "Creating MongoDB client");

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;
    Ok(client)
}

/// Close the client's connection pool during shutdown.
///
/// Waits for outstanding sessions and cursors to be dropped, so callers should
/// bound it with a timeout.
pub async fn close_client(client: Client, name: &str) {
    client.shutdown().await;
    info!("MongoDB client '{}' closed", name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseError;

    #[tokio::test]
    async fn test_connect_from_config_is_lazy() {
        // Nothing listens here; client construction must still succeed.
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "readopt");
        assert!(connect_from_config(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_from_config_rejects_bad_url() {
        let config = MongoConfig::new("postgres://localhost:5432");
        let err = connect_from_config(&config).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Mongo(_)));
    }

    #[tokio::test]
    async fn test_close_client_without_open_connections() {
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "readopt");
        let client = connect_from_config(&config).await.unwrap();

        let closed =
            tokio::time::timeout(Duration::from_secs(5), close_client(client, "test")).await;
        assert!(closed.is_ok());
    }
}
