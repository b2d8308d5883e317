//! Generic persistence for named collections of documents.

use futures_util::TryStreamExt;
use mongodb::{
    Database,
    bson::{self, Bson, DateTime, Document, doc, oid::ObjectId},
    options::FindOptions,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

/// Failure while reading from or writing to the document store.
///
/// The display text is the raw underlying error, which the HTTP layer passes
/// through to clients on server errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error(
        "'{0}' is not a valid ObjectId, it must be a 12-byte input or a 24-character hex string"
    )]
    InvalidId(String),

    #[error("{0}")]
    Serialization(#[from] bson::ser::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Thin wrapper over a MongoDB database exposing create/query by collection name.
///
/// Cloning is cheap: the underlying handle shares the client's connection pool.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    db: Database,
}

impl DocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Name of the underlying database
    pub fn name(&self) -> &str {
        self.db.name()
    }

    /// Insert `record` into `collection` and return the assigned identifier.
    ///
    /// The stored document is stamped with `created_at` and `updated_at`.
    #[instrument(skip(self, record))]
    pub async fn create_document<T>(&self, collection: &str, record: &T) -> StoreResult<String>
    where
        T: Serialize,
    {
        let mut document = bson::to_document(record)?;
        let now = DateTime::now();
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };

        debug!(%id, "Document inserted");
        Ok(id)
    }

    /// Fetch up to `limit` documents from `collection` matching `filter`.
    ///
    /// Top-level filter keys are ANDed; `$or` groups alternatives. Result order
    /// is whatever the server returns.
    #[instrument(skip(self))]
    pub async fn get_documents<T>(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> StoreResult<Vec<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .db
            .collection::<T>(collection)
            .find(filter)
            .with_options(options)
            .await?;
        let records: Vec<T> = cursor.try_collect().await?;

        debug!(count = records.len(), "Documents fetched");
        Ok(records)
    }

    /// Look up a single document by its identifier.
    ///
    /// An `id` that is not an ObjectId is an error, not a miss.
    #[instrument(skip(self))]
    pub async fn find_by_id<T>(&self, collection: &str, id: &str) -> StoreResult<Option<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let oid = ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))?;

        let record = self
            .db
            .collection::<T>(collection)
            .find_one(doc! { "_id": oid })
            .await?;
        Ok(record)
    }

    /// Names of all collections in the database
    #[instrument(skip(self))]
    pub async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        let names = self.db.list_collection_names().await?;
        Ok(names)
    }
}
