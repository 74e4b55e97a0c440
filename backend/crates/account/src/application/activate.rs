//! Activate Use Case
//!
//! Two ways in, one outcome: flip a pending account to active and clear its
//! code in a single conditional update. A second attempt finds no matching
//! row and fails, which is what makes activation single-shot.

use std::str::FromStr;
use std::sync::Arc;

use kernel::id::AccountId;
use platform::token::{self, Claims, NoPayload};

use crate::application::config::AccountConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::ActivationCode;
use crate::error::{AccountError, AccountResult};

/// Activate use case
pub struct ActivateUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> ActivateUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    /// Activate with the mailed code, on behalf of the session's account
    pub async fn execute_with_code(
        &self,
        account_id: &AccountId,
        code: &str,
    ) -> AccountResult<()> {
        let code = ActivationCode::new(code).map_err(|_| AccountError::InvalidActivation)?;

        if !self.repo.activate_with_code(account_id, &code).await? {
            return Err(AccountError::InvalidActivation);
        }

        tracing::info!(account_id = %account_id, "Account activated (code)");

        Ok(())
    }

    /// Activate with the token embedded in the mailed link
    pub async fn execute_with_token(&self, activation_token: &str) -> AccountResult<()> {
        let claims: Claims<NoPayload> =
            token::verify(&self.config.activation_secret, activation_token).map_err(|e| {
                tracing::debug!(error = %e, "Activation token rejected");
                AccountError::InvalidActivation
            })?;

        let account_id =
            AccountId::from_str(&claims.sub).map_err(|_| AccountError::InvalidActivation)?;

        if !self.repo.activate_pending(&account_id).await? {
            return Err(AccountError::InvalidActivation);
        }

        tracing::info!(account_id = %account_id, "Account activated (link)");

        Ok(())
    }
}
