//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, PostId};

use crate::error::{PostsError, PostsResult};

/// Maximum title length in characters
pub const TITLE_MAX_LENGTH: usize = 300;

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub author_id: AccountId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with validated content
    pub fn new(author_id: AccountId, title: String, body: String) -> PostsResult<Self> {
        let title = title.trim().to_string();

        if title.is_empty() {
            return Err(PostsError::Validation("Title cannot be empty".to_string()));
        }
        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(PostsError::Validation(format!(
                "Title must be at most {} characters",
                TITLE_MAX_LENGTH
            )));
        }
        if body.trim().is_empty() {
            return Err(PostsError::Validation("Body cannot be empty".to_string()));
        }

        let now = Utc::now();

        Ok(Self {
            post_id: PostId::new(),
            author_id,
            title,
            body,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_trims_title() {
        let post = Post::new(AccountId::new(), "  Hello  ".to_string(), "World".to_string())
            .unwrap();
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn test_new_post_rejects_bad_content() {
        let author = AccountId::new();
        assert!(Post::new(author, "".to_string(), "body".to_string()).is_err());
        assert!(Post::new(author, "   ".to_string(), "body".to_string()).is_err());
        assert!(Post::new(author, "title".to_string(), "   ".to_string()).is_err());
        assert!(Post::new(author, "x".repeat(TITLE_MAX_LENGTH + 1), "body".to_string()).is_err());
    }
}
