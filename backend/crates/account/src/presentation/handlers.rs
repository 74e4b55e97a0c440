//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::session::SessionContext;
use crate::application::{
    ActivateUseCase, ForgotPasswordUseCase, LoginInput, LoginUseCase, RegisterInput,
    RegisterUseCase, ResendActivationUseCase, ResetPasswordInput, ResetPasswordUseCase,
};
use crate::domain::repository::{AccountRepository, Mailer};
use crate::error::AccountResult;
use crate::presentation::dto::{
    ActivateRequest, ForgotRequest, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, ResetRequest,
};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R, M>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub mailer: Arc<M>,
    pub config: Arc<AccountConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /account/register
pub async fn register<R, M>(
    State(state): State<AccountAppState<R, M>>,
    Json(req): Json<RegisterRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.mailer.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: output.account_id,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /account/login
pub async fn login<R, M>(
    State(state): State<AccountAppState<R, M>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie =
        platform::cookie::set_cookie_header(&state.config.session_cookie(), &output.access_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            access_token: output.access_token,
        }),
    ))
}

// ============================================================================
// Activate
// ============================================================================

/// POST /account/activate (session required, pending accounts welcome)
pub async fn activate<R, M>(
    State(state): State<AccountAppState<R, M>>,
    Extension(session): Extension<SessionContext>,
    Json(req): Json<ActivateRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case = ActivateUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute_with_code(&session.account_id, &req.code)
        .await?;

    Ok(StatusCode::OK)
}

/// GET /account/activate/{token} (emailed link)
pub async fn activate_with_link<R, M>(
    State(state): State<AccountAppState<R, M>>,
    Path(token): Path<String>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case = ActivateUseCase::new(state.repo.clone(), state.config.clone());

    use_case.execute_with_token(&token).await?;

    Ok(StatusCode::OK)
}

/// POST /account/activate/resend (session required)
pub async fn resend_activation<R, M>(
    State(state): State<AccountAppState<R, M>>,
    Extension(session): Extension<SessionContext>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case =
        ResendActivationUseCase::new(state.repo.clone(), state.mailer.clone(), state.config.clone());

    use_case.execute(&session.account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Forgot / Reset
// ============================================================================

/// POST /account/forgot
///
/// Answers 204 whether or not the address is known.
pub async fn forgot_password<R, M>(
    State(state): State<AccountAppState<R, M>>,
    Json(req): Json<ForgotRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case =
        ForgotPasswordUseCase::new(state.repo.clone(), state.mailer.clone(), state.config.clone());

    use_case.execute(req.email).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /account/reset
pub async fn reset_password<R, M>(
    State(state): State<AccountAppState<R, M>>,
    Json(req): Json<ResetRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case =
        ResetPasswordUseCase::new(state.repo.clone(), state.mailer.clone(), state.config.clone());

    use_case
        .execute(ResetPasswordInput {
            token: req.token,
            new_password: req.new_password,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
