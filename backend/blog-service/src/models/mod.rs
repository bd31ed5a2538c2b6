/// Data models for blog-service
///
/// Row types map one-to-one onto the tables in `sql/schema.sql` and serialize to the
/// JSON shapes returned by the API.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user. The stored password is never selected into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub post_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One user liking one post; (post_id, user_id) is unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// A page of posts plus the total across all pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeCount {
    pub likes: i64,
}

/// Body of successful deletes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
