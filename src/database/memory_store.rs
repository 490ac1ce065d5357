use crate::database::store::{PostStore, ProfileStore, StoreError, parse_id};
use crate::post::post_model::Post;
use crate::user::model::User;
use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

/// Process-local store for development runs and tests. Ids are validated the
/// same way the Mongo store validates them.
#[derive(Default)]
pub struct MemoryStore {
    posts: DashMap<String, Post>,
    users: DashMap<String, User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a profile and returns its id as a hex string.
    pub fn insert_user(&self, name: &str, avatar: &str) -> String {
        let id = ObjectId::new();
        let user = User {
            id: Some(id),
            name: name.to_string(),
            avatar: avatar.to_string(),
        };
        self.users.insert(id.to_hex(), user);
        id.to_hex()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert_post(&self, post: &Post) -> Result<(), StoreError> {
        parse_id(&post.id)?;
        self.posts.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn find_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
        parse_id(id)?;
        Ok(self.posts.get(id).map(|entry| entry.value().clone()))
    }

    async fn save_post(&self, post: &Post) -> Result<(), StoreError> {
        // Like a replace on a vanished document, saving a deleted post is a no-op.
        if let Some(mut entry) = self.posts.get_mut(&post.id) {
            *entry = post.clone();
        }
        Ok(())
    }

    async fn delete_post(&self, id: &str) -> Result<bool, StoreError> {
        parse_id(id)?;
        Ok(self.posts.remove(id).is_some())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        parse_id(id)?;
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }
}
