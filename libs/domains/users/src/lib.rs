//! Users Domain
//!
//! Marketplace users stored in the `user` collection. Users are created once
//! and looked up by identifier; listings do not reference them.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{COLLECTION, CreateUser, CreatedId, User, UserRecord};
pub use mongodb::MongoUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
