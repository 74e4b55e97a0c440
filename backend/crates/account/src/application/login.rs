//! Login Use Case
//!
//! Verifies credentials and issues a session token. Every failure is the
//! same `InvalidCredentials`, so callers cannot probe which emails exist.
//! Login is allowed before activation; the token then carries
//! `active: false` and activation-gated routes stay closed.

use std::sync::Arc;

use platform::password::Password;

use crate::application::config::AccountConfig;
use crate::application::session;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::Email;
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub access_token: String,
    pub active: bool,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<LoginOutput> {
        let email = Email::new(input.email).map_err(|_| AccountError::InvalidCredentials)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let password =
            Password::new(input.password).map_err(|_| AccountError::InvalidCredentials)?;

        if !account.password_hash.verify(&password) {
            return Err(AccountError::InvalidCredentials);
        }

        let access_token = session::issue_session_token(&self.config, &account)?;

        tracing::info!(
            account_id = %account.account_id,
            active = account.is_active(),
            "Account logged in"
        );

        Ok(LoginOutput {
            access_token,
            active: account.is_active(),
        })
    }
}
