//! Repository Traits

use kernel::page::PageRequest;

use crate::domain::entity::Post;
use crate::error::PostsResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> PostsResult<()>;

    /// Fetch one page worth of posts, newest first
    ///
    /// Implementations must return up to [`PageRequest::fetch_limit`] rows
    /// ordered by `(created_at DESC, post_id DESC)`, starting strictly after
    /// the request's cursor when one is present.
    async fn list(&self, page: &PageRequest) -> PostsResult<Vec<Post>>;
}
