//! Create Post Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostsResult;

/// Create post input
pub struct CreatePostInput {
    pub author_id: AccountId,
    pub title: String,
    pub body: String,
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostsResult<Post> {
        let post = Post::new(input.author_id, input.title, input.body)?;

        self.repo.create(&post).await?;

        tracing::info!(post_id = %post.post_id, author_id = %post.author_id, "Post created");

        Ok(post)
    }
}
