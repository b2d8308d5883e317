use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{CreateUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return its new identifier
    async fn create(&self, input: CreateUser) -> UserResult<String>;

    /// Get a user by identifier. A malformed identifier is an error.
    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>>;
}
