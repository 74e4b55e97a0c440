//! Repository Traits
//!
//! Interfaces for data persistence and outbound mail. Implementations live
//! in the infrastructure layer.

use kernel::id::{AccountId, ResetId};
use platform::password::PasswordHash;

use crate::domain::entity::account::Account;
use crate::domain::value_object::{ActivationCode, Email};
use crate::error::AccountResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account
    async fn create(&self, account: &Account) -> AccountResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;

    /// Activate a pending account whose stored code matches
    ///
    /// Flips status to active and clears the code in one update. Returns
    /// `false` when nothing matched (wrong code, already active, unknown id).
    async fn activate_with_code(
        &self,
        account_id: &AccountId,
        code: &ActivationCode,
    ) -> AccountResult<bool>;

    /// Activate a pending account without a code (emailed-link path)
    ///
    /// Returns `false` when the account is unknown or already active.
    async fn activate_pending(&self, account_id: &AccountId) -> AccountResult<bool>;

    /// Replace the activation code of a pending account
    ///
    /// Returns `false` when the account is unknown or already active.
    async fn rotate_activation_code(
        &self,
        account_id: &AccountId,
        code: &ActivationCode,
    ) -> AccountResult<bool>;

    /// Create or rotate the reset marker for an account, returning its id
    async fn upsert_reset_marker(&self, account_id: &AccountId) -> AccountResult<ResetId>;

    /// Consume a reset marker: write the new password hash and delete the
    /// marker in one transaction
    ///
    /// Returns the account's email for the change notice, or `None` when the
    /// marker no longer exists (expired by rotation or already consumed).
    async fn consume_reset_marker(
        &self,
        reset_id: &ResetId,
        password_hash: &PasswordHash,
    ) -> AccountResult<Option<Email>>;
}

/// Outbound mail trait
#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Send the registration mail carrying the activation code and link
    async fn send_activation(
        &self,
        to: &Email,
        code: &ActivationCode,
        link: &str,
    ) -> AccountResult<()>;

    /// Send the password reset link
    async fn send_password_reset(&self, to: &Email, link: &str) -> AccountResult<()>;

    /// Send the password-changed notice
    async fn send_password_changed(&self, to: &Email) -> AccountResult<()>;
}
