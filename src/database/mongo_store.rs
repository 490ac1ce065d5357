use crate::database::store::{PostStore, ProfileStore, StoreError, parse_id};
use crate::post::post_model::{Comment, Like, Post};
use crate::user::model::User;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

/// Stored shape of a post: native ObjectId keys and BSON dates, so the
/// collection stays queryable by other Mongo clients. The API types keep hex
/// ids and RFC 3339 dates.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: String,
    pub text: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub likes: Vec<LikeDocument>,
    #[serde(default)]
    pub comments: Vec<CommentDocument>,
    pub date: bson::DateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LikeDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommentDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: String,
    pub text: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub date: bson::DateTime,
}

fn to_bson_date(date: &DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(date.timestamp_millis())
}

fn from_bson_date(date: bson::DateTime) -> Result<DateTime<Utc>, StoreError> {
    DateTime::<Utc>::from_timestamp_millis(date.timestamp_millis())
        .ok_or_else(|| StoreError::Backend(format!("date out of range: {}", date)))
}

impl TryFrom<&Post> for PostDocument {
    type Error = StoreError;

    fn try_from(post: &Post) -> Result<Self, Self::Error> {
        let likes = post
            .likes
            .iter()
            .map(|like| {
                Ok(LikeDocument {
                    id: parse_id(&like.id)?,
                    user: like.user.clone(),
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        let comments = post
            .comments
            .iter()
            .map(|c| {
                Ok(CommentDocument {
                    id: parse_id(&c.id)?,
                    user: c.user.clone(),
                    text: c.text.clone(),
                    name: c.name.clone(),
                    avatar: c.avatar.clone(),
                    date: to_bson_date(&c.date),
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(PostDocument {
            id: parse_id(&post.id)?,
            user: post.user.clone(),
            text: post.text.clone(),
            name: post.name.clone(),
            avatar: post.avatar.clone(),
            likes,
            comments,
            date: to_bson_date(&post.date),
        })
    }
}

impl TryFrom<PostDocument> for Post {
    type Error = StoreError;

    fn try_from(doc: PostDocument) -> Result<Self, Self::Error> {
        let comments = doc
            .comments
            .into_iter()
            .map(|c| {
                Ok(Comment {
                    id: c.id.to_hex(),
                    user: c.user,
                    text: c.text,
                    name: c.name,
                    avatar: c.avatar,
                    date: from_bson_date(c.date)?,
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Post {
            id: doc.id.to_hex(),
            user: doc.user,
            text: doc.text,
            name: doc.name,
            avatar: doc.avatar,
            likes: doc
                .likes
                .into_iter()
                .map(|like| Like {
                    id: like.id.to_hex(),
                    user: like.user,
                })
                .collect(),
            comments,
            date: from_bson_date(doc.date)?,
        })
    }
}

#[derive(Clone)]
pub struct MongoStore {
    posts: Collection<PostDocument>,
    users: Collection<User>,
}

impl MongoStore {
    pub fn new(client: &Client, database: &str) -> Self {
        let db = client.database(database);
        MongoStore {
            posts: db.collection::<PostDocument>("posts"),
            users: db.collection::<User>("users"),
        }
    }
}

#[async_trait]
impl PostStore for MongoStore {
    async fn insert_post(&self, post: &Post) -> Result<(), StoreError> {
        let document = PostDocument::try_from(post)?;
        self.posts.insert_one(&document).await?;
        Ok(())
    }

    async fn find_posts(&self) -> Result<Vec<Post>, StoreError> {
        let cursor = self.posts.find(doc! {}).await?;
        let documents: Vec<PostDocument> = cursor.try_collect().await?;
        documents.into_iter().map(Post::try_from).collect()
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let object_id = parse_id(id)?;
        self.posts
            .find_one(doc! { "_id": object_id })
            .await?
            .map(Post::try_from)
            .transpose()
    }

    async fn save_post(&self, post: &Post) -> Result<(), StoreError> {
        let document = PostDocument::try_from(post)?;
        self.posts
            .replace_one(doc! { "_id": document.id }, &document)
            .await?;
        Ok(())
    }

    async fn delete_post(&self, id: &str) -> Result<bool, StoreError> {
        let object_id = parse_id(id)?;
        let result = self.posts.delete_one(doc! { "_id": object_id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl ProfileStore for MongoStore {
    async fn find_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        let object_id = parse_id(id)?;
        Ok(self.users.find_one(doc! { "_id": object_id }).await?)
    }
}
