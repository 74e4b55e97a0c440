//! Session Middleware
//!
//! Resolves the caller's session before protected handlers run. The token
//! is taken from `Authorization: Bearer <token>` first, falling back to the
//! session cookie for browser clients. Verification is pure CPU work; no
//! store is consulted.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::cookie::{SESSION_COOKIE, extract_cookie};

use crate::application::config::AccountConfig;
use crate::application::session::{self, SessionContext};
use crate::error::AccountError;

/// Middleware state
#[derive(Clone)]
pub struct SessionState {
    pub config: Arc<AccountConfig>,
}

/// Middleware requiring a valid session, activated or not
///
/// Inserts [`SessionContext`] into request extensions for the handler.
pub async fn require_session(
    State(state): State<SessionState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let session = resolve(&state, req.headers()).map_err(|e| e.into_response())?;

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

/// Middleware requiring a valid session for an activated account
pub async fn require_active_session(
    State(state): State<SessionState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let session = resolve(&state, req.headers()).map_err(|e| e.into_response())?;

    if !session.active {
        return Err(AccountError::AccountInactive.into_response());
    }

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

fn resolve(state: &SessionState, headers: &HeaderMap) -> Result<SessionContext, AccountError> {
    let token = token_from_headers(headers).ok_or(AccountError::SessionInvalid)?;

    session::resolve_session(&state.config, &token)
}

/// Bearer header first, cookie second
fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    bearer_token(headers).or_else(|| extract_cookie(headers, SESSION_COOKIE))
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    (!token.is_empty()).then(|| token.to_string())
}
