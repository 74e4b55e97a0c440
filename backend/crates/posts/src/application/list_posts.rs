//! List Posts Use Case
//!
//! The repository over-fetches by one row; the page assembly drops the
//! extra row and turns it into the next cursor.

use std::sync::Arc;

use kernel::page::{Cursor, Page, PageRequest};

use crate::domain::entity::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostsResult;

/// List posts use case
pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, page: PageRequest) -> PostsResult<Page<Post>> {
        let rows = self.repo.list(&page).await?;

        Ok(Page::from_rows(rows, &page, |post| {
            Cursor::new(*post.post_id.as_uuid(), post.created_at)
        }))
    }
}
