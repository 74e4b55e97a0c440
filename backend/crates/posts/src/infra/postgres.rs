//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{AccountId, PostId};
use kernel::page::PageRequest;

use crate::domain::entity::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostsResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                author_id,
                title,
                body,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self, page: &PageRequest) -> PostsResult<Vec<Post>> {
        // The composite comparison and the matching ORDER BY are what make
        // the walk stable when timestamps collide.
        let rows = match page.cursor() {
            Some(cursor) => {
                sqlx::query_as::<_, PostRow>(
                    r#"
                    SELECT post_id, author_id, title, body, created_at, updated_at
                    FROM posts
                    WHERE (created_at, post_id) < ($1, $2)
                    ORDER BY created_at DESC, post_id DESC
                    LIMIT $3
                    "#,
                )
                .bind(cursor.value)
                .bind(cursor.key)
                .bind(page.fetch_limit())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, PostRow>(
                    r#"
                    SELECT post_id, author_id, title, body, created_at, updated_at
                    FROM posts
                    ORDER BY created_at DESC, post_id DESC
                    LIMIT $1
                    "#,
                )
                .bind(page.fetch_limit())
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    author_id: Uuid,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            author_id: AccountId::from_uuid(self.author_id),
            title: self.title,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
