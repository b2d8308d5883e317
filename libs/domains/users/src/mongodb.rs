use async_trait::async_trait;
use database::mongodb::DocumentStore;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{COLLECTION, CreateUser, User, UserRecord};
use crate::repository::UserRepository;

/// MongoDB-backed user repository
#[derive(Clone)]
pub struct MongoUserRepository {
    store: DocumentStore,
}

impl MongoUserRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateUser) -> UserResult<String> {
        let id = self.store.create_document(COLLECTION, &input).await?;
        tracing::info!(user_id = %id, "User created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let record: Option<UserRecord> = self.store.find_by_id(COLLECTION, id).await?;
        Ok(record.map(User::from))
    }
}
