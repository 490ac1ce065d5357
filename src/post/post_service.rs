use crate::database::{PostStore, ProfileStore, StoreError};
use crate::post::post_model::{Comment, Like, Post};
use crate::user::model::User;
use crate::utils::error::CustomError;
use log::{info, warn};
use std::sync::Arc;

pub const POST_NOT_FOUND: &str = "post not found";
pub const COMMENT_NOT_FOUND: &str = "comment does not exist";
pub const NOT_AUTHORIZED: &str = "user not authorized";

/// Ownership, existence and idempotence rules for posts, likes and comments.
///
/// Every mutation reads the whole aggregate, changes it in memory and writes
/// it back. Nothing here serializes concurrent writers.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostStore>,
    profiles: Arc<dyn ProfileStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, profiles: Arc<dyn ProfileStore>) -> Self {
        PostService { posts, profiles }
    }

    pub async fn create_post(&self, user_id: &str, text: String) -> Result<Post, CustomError> {
        let author = self.profile(user_id).await?;
        let post = Post::new(user_id, &author, text);

        self.posts
            .insert_post(&post)
            .await
            .map_err(|e| CustomError::ServerError(format!("failed to create post: {}", e)))?;

        info!("post {} created by {}", post.id, user_id);
        Ok(post)
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, CustomError> {
        let mut posts = self
            .posts
            .find_posts()
            .await
            .map_err(|e| CustomError::ServerError(format!("failed to list posts: {}", e)))?;

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, CustomError> {
        self.fetch_post(id).await
    }

    pub async fn delete_post(&self, user_id: &str, id: &str) -> Result<(), CustomError> {
        let post = self.fetch_post(id).await?;

        if post.user != user_id {
            warn!("{} tried to delete post {} owned by {}", user_id, id, post.user);
            return Err(CustomError::Unauthorized(NOT_AUTHORIZED.to_string()));
        }

        let removed = self
            .posts
            .delete_post(id)
            .await
            .map_err(|e| store_failure("failed to delete post", e))?;

        if !removed {
            return Err(CustomError::NotFound(POST_NOT_FOUND.to_string()));
        }

        info!("post {} removed by {}", id, user_id);
        Ok(())
    }

    pub async fn like_post(&self, user_id: &str, id: &str) -> Result<Vec<Like>, CustomError> {
        let mut post = self.fetch_post(id).await?;

        if post.has_liked(user_id) {
            return Err(CustomError::AlreadyLiked);
        }

        post.add_like(user_id);
        self.save(&post).await?;
        Ok(post.likes)
    }

    pub async fn unlike_post(&self, user_id: &str, id: &str) -> Result<Vec<Like>, CustomError> {
        let mut post = self.fetch_post(id).await?;

        if !post.remove_like(user_id) {
            return Err(CustomError::NotLiked);
        }

        self.save(&post).await?;
        Ok(post.likes)
    }

    pub async fn add_comment(
        &self,
        user_id: &str,
        id: &str,
        text: String,
    ) -> Result<Vec<Comment>, CustomError> {
        let author = self.profile(user_id).await?;
        let mut post = self.fetch_post(id).await?;

        post.add_comment(user_id, &author, text);
        self.save(&post).await?;
        Ok(post.comments)
    }

    pub async fn delete_comment(
        &self,
        user_id: &str,
        id: &str,
        comment_id: &str,
    ) -> Result<Vec<Comment>, CustomError> {
        let mut post = self.fetch_post(id).await?;

        let comment = post
            .find_comment(comment_id)
            .ok_or_else(|| CustomError::NotFound(COMMENT_NOT_FOUND.to_string()))?;

        if comment.user != user_id {
            warn!(
                "{} tried to delete comment {} owned by {}",
                user_id, comment_id, comment.user
            );
            return Err(CustomError::Unauthorized(NOT_AUTHORIZED.to_string()));
        }

        post.remove_comment(comment_id);
        self.save(&post).await?;
        Ok(post.comments)
    }

    async fn fetch_post(&self, id: &str) -> Result<Post, CustomError> {
        match self.posts.find_post(id).await {
            Ok(Some(post)) => Ok(post),
            Ok(None) | Err(StoreError::MalformedId(_)) => {
                Err(CustomError::NotFound(POST_NOT_FOUND.to_string()))
            }
            Err(e @ StoreError::Backend(_)) => Err(store_failure("failed to fetch post", e)),
        }
    }

    async fn profile(&self, user_id: &str) -> Result<User, CustomError> {
        match self.profiles.find_user(user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(CustomError::ServerError(format!(
                "no profile for authenticated user {}",
                user_id
            ))),
            Err(e) => Err(store_failure("failed to load profile", e)),
        }
    }

    async fn save(&self, post: &Post) -> Result<(), CustomError> {
        self.posts
            .save_post(post)
            .await
            .map_err(|e| store_failure("failed to save post", e))
    }
}

fn store_failure(context: &str, err: StoreError) -> CustomError {
    CustomError::ServerError(format!("{}: {}", context, err))
}
