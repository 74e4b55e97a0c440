//! Posts Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use account::AccountConfig;
use account::middleware::{SessionState, require_active_session};

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the posts router with PostgreSQL repository
pub fn posts_router(repo: PgPostRepository, config: AccountConfig) -> Router {
    posts_router_generic(repo, config)
}

/// Create a generic posts router for any repository implementation
pub fn posts_router_generic<R>(repo: R, config: AccountConfig) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
    };
    let session_state = SessionState {
        config: Arc::new(config),
    };

    // Reading is public; writing needs an activated account
    let create = post(handlers::create_post::<R>).layer(axum::middleware::from_fn_with_state(
        session_state,
        require_active_session,
    ));

    Router::new()
        .route("/", get(handlers::list_posts::<R>).merge(create))
        .with_state(state)
}
