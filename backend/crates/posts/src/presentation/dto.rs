//! API DTOs (Data Transfer Objects)
//!
//! Every response body is wrapped in a `data` envelope; snake_case JSON.

use serde::{Deserialize, Serialize};

use crate::domain::entity::Post;

/// Response envelope
#[derive(Debug, Clone, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Create post request
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
}

/// Single post
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.post_id.to_string(),
            author_id: post.author_id.to_string(),
            title: post.title.clone(),
            body: post.body.clone(),
            created_at: post.created_at,
        }
    }
}

/// One page of posts
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub items: Vec<PostResponse>,
    /// Opaque cursor for the next page; absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}
