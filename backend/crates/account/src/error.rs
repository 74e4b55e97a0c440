//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Account not found
    #[error("Account not found")]
    AccountNotFound,

    /// Email address already registered
    #[error("Email address already registered")]
    EmailTaken,

    /// Invalid credentials (unknown email or wrong password - never say which)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session token missing, malformed, expired or forged
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Operation requires an activated account
    #[error("Account is not activated")]
    AccountInactive,

    /// Account is already activated
    #[error("Account is already activated")]
    AlreadyActive,

    /// Activation code/token did not match a pending account
    #[error("Invalid activation code")]
    InvalidActivation,

    /// Reset token invalid, expired, or already consumed
    #[error("Invalid password reset token")]
    InvalidReset,

    /// Input validation error (email format, password policy)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Mail delivery error
    #[error("Mail delivery failed: {0}")]
    Mail(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::AccountNotFound => StatusCode::NOT_FOUND,
            AccountError::EmailTaken | AccountError::AlreadyActive => StatusCode::CONFLICT,
            AccountError::InvalidCredentials
            | AccountError::SessionInvalid
            | AccountError::AccountInactive => StatusCode::UNAUTHORIZED,
            AccountError::InvalidActivation | AccountError::InvalidReset => {
                StatusCode::BAD_REQUEST
            }
            AccountError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AccountError::Mail(_) | AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::AccountNotFound => ErrorKind::NotFound,
            AccountError::EmailTaken | AccountError::AlreadyActive => ErrorKind::Conflict,
            AccountError::InvalidCredentials
            | AccountError::SessionInvalid
            | AccountError::AccountInactive => ErrorKind::Unauthorized,
            AccountError::InvalidActivation | AccountError::InvalidReset => ErrorKind::BadRequest,
            AccountError::Validation(_) => ErrorKind::UnprocessableEntity,
            AccountError::Mail(_) | AccountError::Database(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Mail(msg) => {
                tracing::error!(message = %msg, "Account mail delivery error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::SessionInvalid => {
                tracing::debug!("Rejected session token");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for AccountError {
    fn from(err: platform::token::TokenError) -> Self {
        tracing::debug!(error = %err, "Token verification failed");
        AccountError::SessionInvalid
    }
}

impl From<platform::password::PasswordPolicyError> for AccountError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AccountError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AccountError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AccountError::Internal(err.to_string())
    }
}
