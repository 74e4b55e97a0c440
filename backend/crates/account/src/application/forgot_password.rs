//! Forgot Password Use Case
//!
//! Anti-enumeration: whatever the client submits, the outcome it can
//! observe is the same. Unknown or malformed addresses are logged and
//! swallowed; only storage failures surface as errors.

use std::sync::Arc;

use platform::token::{self, NoPayload};

use crate::application::config::AccountConfig;
use crate::domain::repository::{AccountRepository, Mailer};
use crate::domain::value_object::Email;
use crate::error::{AccountError, AccountResult};

/// Forgot password use case
pub struct ForgotPasswordUseCase<R, M>
where
    R: AccountRepository,
    M: Mailer,
{
    repo: Arc<R>,
    mailer: Arc<M>,
    config: Arc<AccountConfig>,
}

impl<R, M> ForgotPasswordUseCase<R, M>
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

    pub async fn execute(&self, email: String) -> AccountResult<()> {
        let Ok(email) = Email::new(email) else {
            tracing::debug!("Forgot password with malformed email, ignoring");
            return Ok(());
        };

        let Some(account) = self.repo.find_by_email(&email).await? else {
            tracing::debug!("Forgot password for unknown email, ignoring");
            return Ok(());
        };

        // Upsert rotates the marker id: the newest mailed link wins, any
        // earlier one dies with the old id.
        let reset_id = self.repo.upsert_reset_marker(&account.account_id).await?;

        let reset_token = token::issue(
            &self.config.reset_secret,
            &reset_id.to_string(),
            self.config.reset_ttl,
            NoPayload {},
        )
        .map_err(|e| AccountError::Internal(e.to_string()))?;
        let link = self.config.reset_link(&reset_token);

        // Mail failure must not change the observable outcome
        if let Err(e) = self.mailer.send_password_reset(&account.email, &link).await {
            tracing::error!(error = %e, "Failed to send password reset mail");
            return Ok(());
        }

        tracing::info!(account_id = %account.account_id, "Password reset mail sent");

        Ok(())
    }
}
