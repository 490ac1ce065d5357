#![allow(dead_code)]

use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header, encode};
use social_posts::database::store::{PostStore, ProfileStore, StoreError};
use social_posts::database::MemoryStore;
use social_posts::middleware::auth::{AuthUser, Claims};
use social_posts::post::post_model::Post;
use social_posts::user::model::User;
use social_posts::{AppConfig, AppState};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SECRET: &str = "integration-test-secret";

pub fn config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        "STORE_BACKEND" => Some("memory".to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn token_for(user_id: &str) -> String {
    signed_token(user_id, SECRET, 3600)
}

pub fn signed_token(user_id: &str, secret: &str, ttl_seconds: i64) -> String {
    let claims = Claims {
        user: AuthUser {
            id: user_id.to_string(),
        },
        exp: (chrono::Utc::now().timestamp() + ttl_seconds) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn bearer(user_id: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(user_id)))
}

pub fn state_for<S>(store: Arc<S>) -> AppState
where
    S: PostStore + ProfileStore + 'static,
{
    AppState::new(config(), store.clone(), store)
}

pub fn memory_state() -> (Arc<MemoryStore>, AppState) {
    let store = Arc::new(MemoryStore::new());
    let state = state_for(store.clone());
    (store, state)
}

/// Wraps a `MemoryStore` and counts every call that reaches it.
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostStore for CountingStore {
    async fn insert_post(&self, post: &Post) -> Result<(), StoreError> {
        self.hit();
        self.inner.insert_post(post).await
    }

    async fn find_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.hit();
        self.inner.find_posts().await
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
        self.hit();
        self.inner.find_post(id).await
    }

    async fn save_post(&self, post: &Post) -> Result<(), StoreError> {
        self.hit();
        self.inner.save_post(post).await
    }

    async fn delete_post(&self, id: &str) -> Result<bool, StoreError> {
        self.hit();
        self.inner.delete_post(id).await
    }
}

#[async_trait]
impl ProfileStore for CountingStore {
    async fn find_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        self.hit();
        self.inner.find_user(id).await
    }
}

/// Every call fails the way an unreachable database would.
pub struct FailingStore;

fn down() -> StoreError {
    StoreError::Backend("connection refused".to_string())
}

#[async_trait]
impl PostStore for FailingStore {
    async fn insert_post(&self, _post: &Post) -> Result<(), StoreError> {
        Err(down())
    }

    async fn find_posts(&self) -> Result<Vec<Post>, StoreError> {
        Err(down())
    }

    async fn find_post(&self, _id: &str) -> Result<Option<Post>, StoreError> {
        Err(down())
    }

    async fn save_post(&self, _post: &Post) -> Result<(), StoreError> {
        Err(down())
    }

    async fn delete_post(&self, _id: &str) -> Result<bool, StoreError> {
        Err(down())
    }
}

#[async_trait]
impl ProfileStore for FailingStore {
    async fn find_user(&self, _id: &str) -> Result<Option<User>, StoreError> {
        Err(down())
    }
}

/// Reads and inserts normally, but every save of an existing post fails.
#[derive(Default)]
pub struct SaveFailingStore {
    pub inner: MemoryStore,
}

#[async_trait]
impl PostStore for SaveFailingStore {
    async fn insert_post(&self, post: &Post) -> Result<(), StoreError> {
        self.inner.insert_post(post).await
    }

    async fn find_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.inner.find_posts().await
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
        self.inner.find_post(id).await
    }

    async fn save_post(&self, _post: &Post) -> Result<(), StoreError> {
        Err(down())
    }

    async fn delete_post(&self, id: &str) -> Result<bool, StoreError> {
        self.inner.delete_post(id).await
    }
}

#[async_trait]
impl ProfileStore for SaveFailingStore {
    async fn find_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        self.inner.find_user(id).await
    }
}
