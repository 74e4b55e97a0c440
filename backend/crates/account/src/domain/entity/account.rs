//! Account Entity

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::PasswordHash;

use crate::domain::value_object::{AccountStatus, ActivationCode, Email};

/// Account entity
///
/// One row per registered identity. The activation code is present only
/// while the account is pending; activation clears it in the same update
/// that flips the status, which is what makes activation single-shot.
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub status: AccountStatus,
    pub activation_code: Option<ActivationCode>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new pending account
    pub fn new(email: Email, password_hash: PasswordHash, activation_code: ActivationCode) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            email,
            password_hash,
            status: AccountStatus::Pending,
            activation_code: Some(activation_code),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::Password;

    fn sample_account() -> Account {
        let hash = Password::new("secret123".to_string()).unwrap().hash().unwrap();
        Account::new(
            Email::new("user@example.com").unwrap(),
            hash,
            ActivationCode::generate(),
        )
    }

    #[test]
    fn test_new_account_is_pending_with_code() {
        let account = sample_account();
        assert!(!account.is_active());
        assert!(account.activation_code.is_some());
    }
}
