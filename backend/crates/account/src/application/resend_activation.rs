//! Resend Activation Use Case
//!
//! Rotates the activation code of a still-pending account and mails it
//! again with a fresh link. The old code stops working the moment the new
//! one is stored.

use std::sync::Arc;

use kernel::id::AccountId;
use platform::token::{self, NoPayload};

use crate::application::config::AccountConfig;
use crate::domain::repository::{AccountRepository, Mailer};
use crate::domain::value_object::ActivationCode;
use crate::error::{AccountError, AccountResult};

/// Resend activation use case
pub struct ResendActivationUseCase<R, M>
where
    R: AccountRepository,
    M: Mailer,
{
    repo: Arc<R>,
    mailer: Arc<M>,
    config: Arc<AccountConfig>,
}

impl<R, M> ResendActivationUseCase<R, M>
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

    pub async fn execute(&self, account_id: &AccountId) -> AccountResult<()> {
        let account = self
            .repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        if account.is_active() {
            return Err(AccountError::AlreadyActive);
        }

        let code = ActivationCode::generate();

        if !self.repo.rotate_activation_code(account_id, &code).await? {
            // Lost a race with activation
            return Err(AccountError::AlreadyActive);
        }

        let activation_token = token::issue(
            &self.config.activation_secret,
            &account_id.to_string(),
            self.config.activation_ttl,
            NoPayload {},
        )
        .map_err(|e| AccountError::Internal(e.to_string()))?;
        let link = self.config.activation_link(&activation_token);

        self.mailer
            .send_activation(&account.email, &code, &link)
            .await?;

        tracing::info!(account_id = %account_id, "Activation mail resent");

        Ok(())
    }
}
