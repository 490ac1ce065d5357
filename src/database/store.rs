use crate::post::post_model::Post;
use crate::user::model::User;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// Failures raised by a store, tagged where the query is made so callers never
/// have to inspect driver errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id can never name a record.
    #[error("malformed id: {0}")]
    MalformedId(String),

    #[error("store failure: {0}")]
    Backend(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

pub fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

/// Persistence for whole post aggregates.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert_post(&self, post: &Post) -> Result<(), StoreError>;

    /// Every stored post, in no particular order.
    async fn find_posts(&self) -> Result<Vec<Post>, StoreError>;

    async fn find_post(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Replaces the stored aggregate with `post`.
    async fn save_post(&self, post: &Post) -> Result<(), StoreError>;

    /// Returns false when nothing was removed.
    async fn delete_post(&self, id: &str) -> Result<bool, StoreError>;
}

/// Read-only lookup of user profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_user(&self, id: &str) -> Result<Option<User>, StoreError>;
}
