//! Session Token Issuance and Resolution
//!
//! Sessions are stateless: the signed token is the session. Issuing happens
//! at login; resolution is pure CPU work (signature + expiry check), no
//! store lookup on the request path.

use std::str::FromStr;

use kernel::id::AccountId;
use platform::token::{self, Claims};
use serde::{Deserialize, Serialize};

use crate::application::config::AccountConfig;
use crate::domain::entity::account::Account;
use crate::error::{AccountError, AccountResult};

/// Extra claims carried by session tokens
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Whether the account was activated at issue time
    pub active: bool,
}

/// Verified caller identity, inserted into request extensions
#[derive(Debug, Clone, Copy)]
pub struct SessionContext {
    pub account_id: AccountId,
    pub active: bool,
}

/// Issue a session token for an account
///
/// The activation state is captured into the claims, so a token issued
/// before activation keeps reporting `active: false` until re-login.
pub fn issue_session_token(config: &AccountConfig, account: &Account) -> AccountResult<String> {
    token::issue(
        &config.session_secret,
        &account.account_id.to_string(),
        config.session_ttl,
        SessionPayload {
            active: account.is_active(),
        },
    )
    .map_err(|e| AccountError::Internal(e.to_string()))
}

/// Verify a session token and extract the caller's identity
pub fn resolve_session(config: &AccountConfig, token: &str) -> AccountResult<SessionContext> {
    let claims: Claims<SessionPayload> = token::verify(&config.session_secret, token)?;

    let account_id =
        AccountId::from_str(&claims.sub).map_err(|_| AccountError::SessionInvalid)?;

    Ok(SessionContext {
        account_id,
        active: claims.payload.active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{ActivationCode, Email};
    use platform::password::Password;

    fn sample_account() -> Account {
        let hash = Password::new("secret123".to_string())
            .unwrap()
            .hash()
            .unwrap();
        Account::new(
            Email::new("user@example.com").unwrap(),
            hash,
            ActivationCode::generate(),
        )
    }

    #[test]
    fn test_issue_and_resolve() {
        let config = AccountConfig::with_random_secrets();
        let account = sample_account();

        let token = issue_session_token(&config, &account).unwrap();
        let session = resolve_session(&config, &token).unwrap();

        assert_eq!(session.account_id, account.account_id);
        assert!(!session.active);
    }

    #[test]
    fn test_session_token_is_not_an_activation_token() {
        let config = AccountConfig::with_random_secrets();
        let account = sample_account();

        let token = platform::token::issue(
            &config.activation_secret,
            &account.account_id.to_string(),
            config.activation_ttl,
            platform::token::NoPayload {},
        )
        .unwrap();

        assert!(matches!(
            resolve_session(&config, &token),
            Err(AccountError::SessionInvalid)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let config = AccountConfig::with_random_secrets();
        assert!(matches!(
            resolve_session(&config, "not.a.token"),
            Err(AccountError::SessionInvalid)
        ));
    }
}
