/// Error type for establishing database connections
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// MongoDB driver errors (bad connection string, client construction)
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
