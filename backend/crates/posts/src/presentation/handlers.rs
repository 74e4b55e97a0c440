//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use account::SessionContext;
use kernel::page::PageRequest;

use crate::application::{CreatePostInput, CreatePostUseCase, ListPostsUseCase};
use crate::domain::repository::PostRepository;
use crate::error::PostsResult;
use crate::presentation::dto::{
    CreatePostRequest, DataEnvelope, PostListResponse, PostResponse,
};

/// Shared state for posts handlers
#[derive(Clone)]
pub struct PostsAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /posts (active session required)
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(session): Extension<SessionContext>,
    Json(req): Json<CreatePostRequest>,
) -> PostsResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let post = use_case
        .execute(CreatePostInput {
            author_id: session.account_id,
            title: req.title,
            body: req.body,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataEnvelope {
            data: PostResponse::from(&post),
        }),
    ))
}

/// GET /posts?limit=&cursor=
pub async fn list_posts<R>(
    State(state): State<PostsAppState<R>>,
    page: PageRequest,
) -> PostsResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());

    let page = use_case.execute(page).await?;

    Ok(Json(DataEnvelope {
        data: PostListResponse {
            items: page.items.iter().map(PostResponse::from).collect(),
            cursor: page.next.map(|c| c.encode()),
        },
    }))
}
