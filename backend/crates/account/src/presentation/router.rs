//! Account Router

use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::{AccountRepository, Mailer};
use crate::infra::postgres::PgAccountRepository;
use crate::infra::smtp::SmtpMailer;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::{SessionState, require_session};

/// Create the account router with PostgreSQL repository and SMTP mailer
pub fn account_router(
    repo: PgAccountRepository,
    mailer: SmtpMailer,
    config: AccountConfig,
) -> Router {
    account_router_generic(repo, mailer, config)
}

/// Create a generic account router for any repository/mailer implementation
pub fn account_router_generic<R, M>(repo: R, mailer: M, config: AccountConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);

    let state = AccountAppState {
        repo: Arc::new(repo),
        mailer: Arc::new(mailer),
        config: config.clone(),
    };
    let session_state = SessionState { config };

    // Activation by code and resend act on the session's own account, so
    // they sit behind the session gate even while the account is pending.
    let session_routes = Router::new()
        .route("/activate", post(handlers::activate::<R, M>))
        .route(
            "/activate/resend",
            post(handlers::resend_activation::<R, M>),
        )
        .layer(axum::middleware::from_fn_with_state(
            session_state,
            require_session,
        ))
        .with_state(state.clone());

    Router::new()
        .route("/register", post(handlers::register::<R, M>))
        .route("/login", post(handlers::login::<R, M>))
        .route("/activate/{token}", get(handlers::activate_with_link::<R, M>))
        .route("/forgot", post(handlers::forgot_password::<R, M>))
        .route("/reset", patch(handlers::reset_password::<R, M>))
        .with_state(state)
        .merge(session_routes)
}
