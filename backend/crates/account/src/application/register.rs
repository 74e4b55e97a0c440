//! Register Use Case
//!
//! Creates a new pending account and mails the activation code and link.

use std::sync::Arc;

use platform::password::Password;
use platform::token::{self, NoPayload};

use crate::application::config::AccountConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::{AccountRepository, Mailer};
use crate::domain::value_object::{ActivationCode, Email};
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub account_id: String,
}

/// Register use case
pub struct RegisterUseCase<R, M>
where
    R: AccountRepository,
    M: Mailer,
{
    repo: Arc<R>,
    mailer: Arc<M>,
    config: Arc<AccountConfig>,
}

impl<R, M> RegisterUseCase<R, M>
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

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        // Validate email
        let email =
            Email::new(input.email).map_err(|e| AccountError::Validation(e.to_string()))?;

        // Validate and hash password
        let password = Password::new(input.password)?;

        // Check availability up front; the unique index still backstops races
        if self.repo.exists_by_email(&email).await? {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = password.hash()?;

        let code = ActivationCode::generate();
        let account = Account::new(email, password_hash, code.clone());

        self.repo.create(&account).await?;

        // Activation link carries a token of the activation flavor
        let activation_token = token::issue(
            &self.config.activation_secret,
            &account.account_id.to_string(),
            self.config.activation_ttl,
            NoPayload {},
        )
        .map_err(|e| AccountError::Internal(e.to_string()))?;
        let link = self.config.activation_link(&activation_token);

        self.mailer
            .send_activation(&account.email, &code, &link)
            .await?;

        tracing::info!(
            account_id = %account.account_id,
            "Account registered, activation mail sent"
        );

        Ok(RegisterOutput {
            account_id: account.account_id.to_string(),
        })
    }
}
