use database::mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Collection holding users
pub const COLLECTION: &str = "user";

fn default_active() -> bool {
    true
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier (24 hex characters)
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// User document as stored
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            name: record.name.unwrap_or_default(),
            email: record.email.unwrap_or_default(),
            phone: record.phone,
            location: record.location,
            is_active: record.is_active.unwrap_or(true),
        }
    }
}

/// Body returned after a successful create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedId {
    pub id: String,
}
