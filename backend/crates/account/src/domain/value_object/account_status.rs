//! Account Status Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Account activation status
///
/// Every account starts `Pending` and becomes `Active` exactly once, when
/// the activation code or link is consumed. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// Registered, activation mail sent, not yet confirmed
    #[default]
    Pending,
    /// Email ownership confirmed
    Active,
}

impl AccountStatus {
    /// String form used in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "pending",
            AccountStatus::Active => "active",
        }
    }

    /// Parse the database string form
    pub fn from_db(s: &str) -> AppResult<Self> {
        match s {
            "pending" => Ok(AccountStatus::Pending),
            "active" => Ok(AccountStatus::Active),
            other => Err(AppError::internal(format!(
                "Unknown account status: {}",
                other
            ))),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_roundtrip() {
        for status in [AccountStatus::Pending, AccountStatus::Active] {
            assert_eq!(AccountStatus::from_db(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(AccountStatus::from_db("suspended").is_err());
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(AccountStatus::default(), AccountStatus::Pending);
        assert!(!AccountStatus::default().is_active());
    }
}
