//! Reset Password Use Case
//!
//! The token's subject is the reset marker id, not the account id. The
//! password write and the marker delete happen in one transaction inside
//! the repository; a token whose marker is gone (consumed, or rotated by a
//! newer request) fails with no partial effect.

use std::str::FromStr;
use std::sync::Arc;

use kernel::id::ResetId;
use platform::password::Password;
use platform::token::{self, Claims, NoPayload};

use crate::application::config::AccountConfig;
use crate::domain::repository::{AccountRepository, Mailer};
use crate::error::{AccountError, AccountResult};

/// Reset password input
pub struct ResetPasswordInput {
    pub token: String,
    pub new_password: String,
}

/// Reset password use case
pub struct ResetPasswordUseCase<R, M>
where
    R: AccountRepository,
    M: Mailer,
{
    repo: Arc<R>,
    mailer: Arc<M>,
    config: Arc<AccountConfig>,
}

impl<R, M> ResetPasswordUseCase<R, M>
where
    R: AccountRepository,
    M: Mailer,
{
    pub fn new(repo: Arc<R>, mailer: Arc<M>, config: Arc<AccountConfig>) -> Self {
        Self {
            repo,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> AccountResult<()> {
        let claims: Claims<NoPayload> =
            token::verify(&self.config.reset_secret, &input.token).map_err(|e| {
                tracing::debug!(error = %e, "Reset token rejected");
                AccountError::InvalidReset
            })?;

        let reset_id = ResetId::from_str(&claims.sub).map_err(|_| AccountError::InvalidReset)?;

        let password = Password::new(input.new_password)?;
        let password_hash = password.hash()?;

        let email = self
            .repo
            .consume_reset_marker(&reset_id, &password_hash)
            .await?
            .ok_or(AccountError::InvalidReset)?;

        // Best-effort notice; the reset already succeeded
        if let Err(e) = self.mailer.send_password_changed(&email).await {
            tracing::error!(error = %e, "Failed to send password-changed notice");
        }

        tracing::info!("Password reset completed");

        Ok(())
    }
}
