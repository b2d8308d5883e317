use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store a new user, returning its identifier
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<String> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use database::mongodb::StoreError;

    fn alice() -> CreateUser {
        CreateUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            location: Some("Lisbon".to_string()),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let mut mock = MockUserRepository::new();
        mock.expect_create()
            .withf(|input| input.email == "alice@example.com")
            .times(1)
            .returning(|_| Ok("65f0000000000000000000aa".to_string()));

        let service = UserService::new(mock);
        assert_eq!(
            service.create_user(alice()).await.unwrap(),
            "65f0000000000000000000aa"
        );
    }

    #[tokio::test]
    async fn test_create_user_invalid_email_never_stored() {
        let mut mock = MockUserRepository::new();
        mock.expect_create().never();

        let service = UserService::new(mock);
        let input = CreateUser {
            email: "nope".to_string(),
            ..alice()
        };
        assert!(matches!(
            service.create_user(input).await,
            Err(UserError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_get_user_missing_and_store_failure() {
        let mut mock = MockUserRepository::new();
        mock.expect_get_by_id().returning(|id| {
            if id.len() == 24 {
                Ok(None)
            } else {
                Err(StoreError::InvalidId(id.to_string()).into())
            }
        });

        let service = UserService::new(mock);
        assert!(matches!(
            service.get_user("65f0000000000000000000ab").await,
            Err(UserError::NotFound(_))
        ));
        assert!(matches!(
            service.get_user("xyz").await,
            Err(UserError::Store(_))
        ));
    }
}
