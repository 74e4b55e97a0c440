//! Application Configuration
//!
//! Configuration for the account application layer. Each token flavor gets
//! its own secret and TTL, so a compromised or rotated secret in one flow
//! never crosses into another.

use chrono::Duration;

use platform::cookie::{CookieConfig, SESSION_COOKIE};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Account application configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Secret for session/access tokens
    pub session_secret: Vec<u8>,
    /// Secret for activation-link tokens
    pub activation_secret: Vec<u8>,
    /// Secret for password-reset tokens
    pub reset_secret: Vec<u8>,
    /// Session token TTL (15 minutes)
    pub session_ttl: Duration,
    /// Activation token TTL (10 minutes)
    pub activation_ttl: Duration,
    /// Reset token TTL (5 minutes)
    pub reset_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Base URL of the client app, used to build mailed links
    pub client_url: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            session_secret: Vec::new(),
            activation_secret: Vec::new(),
            reset_secret: Vec::new(),
            session_ttl: Duration::minutes(15),
            activation_ttl: Duration::minutes(10),
            reset_ttl: Duration::minutes(5),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            client_url: "http://localhost:3000".to_string(),
        }
    }
}

impl AccountConfig {
    /// Create config with random secrets (for development and tests)
    pub fn with_random_secrets() -> Self {
        use rand::RngCore;

        let mut random_secret = || {
            let mut secret = vec![0u8; 32];
            rand::thread_rng().fill_bytes(&mut secret);
            secret
        };

        Self {
            session_secret: random_secret(),
            activation_secret: random_secret(),
            reset_secret: random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secrets()
        }
    }

    /// Cookie attributes for the session token
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: SESSION_COOKIE.to_string(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.num_seconds()),
        }
    }

    /// Activation link embedded in the registration mail
    pub fn activation_link(&self, token: &str) -> String {
        format!(
            "{}/account/activate/{}",
            self.client_url.trim_end_matches('/'),
            token
        )
    }

    /// Reset link embedded in the forgot-password mail
    pub fn reset_link(&self, token: &str) -> String {
        format!(
            "{}/account/reset/{}",
            self.client_url.trim_end_matches('/'),
            token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = AccountConfig::default();
        assert_eq!(config.session_ttl, Duration::minutes(15));
        assert_eq!(config.activation_ttl, Duration::minutes(10));
        assert_eq!(config.reset_ttl, Duration::minutes(5));
    }

    #[test]
    fn test_links_tolerate_trailing_slash() {
        let config = AccountConfig {
            client_url: "https://app.example.com/".to_string(),
            ..AccountConfig::default()
        };

        assert_eq!(
            config.activation_link("tok"),
            "https://app.example.com/account/activate/tok"
        );
        assert_eq!(
            config.reset_link("tok"),
            "https://app.example.com/account/reset/tok"
        );
    }

    #[test]
    fn test_random_secrets_are_distinct() {
        let config = AccountConfig::with_random_secrets();
        assert_ne!(config.session_secret, config.activation_secret);
        assert_ne!(config.activation_secret, config.reset_secret);
    }
}
