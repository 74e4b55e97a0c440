//! SMTP Mailer Implementation
//!
//! Plain-text transactional mail over authenticated SMTP (STARTTLS relay).

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::repository::Mailer;
use crate::domain::value_object::{ActivationCode, Email};
use crate::error::{AccountError, AccountResult};

/// SMTP connection settings
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// From address, e.g. `Accounts <no-reply@example.com>`
    pub from: String,
}

/// SMTP-backed mailer
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> AccountResult<Self> {
        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| AccountError::Mail(format!("Invalid from address: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AccountError::Mail(e.to_string()))?
            .credentials(Credentials::new(config.username, config.password))
            .port(config.port)
            .build();

        Ok(Self { transport, from })
    }

    async fn send(&self, to: &Email, subject: &str, body: String) -> AccountResult<()> {
        let to = to
            .as_str()
            .parse::<Mailbox>()
            .map_err(|e| AccountError::Mail(format!("Invalid to address: {}", e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| AccountError::Mail(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AccountError::Mail(e.to_string()))?;

        Ok(())
    }
}

impl Mailer for SmtpMailer {
    async fn send_activation(
        &self,
        to: &Email,
        code: &ActivationCode,
        link: &str,
    ) -> AccountResult<()> {
        self.send(to, "Activate your account", activation_body(code, link))
            .await
    }

    async fn send_password_reset(&self, to: &Email, link: &str) -> AccountResult<()> {
        self.send(to, "Password reset request", reset_body(link))
            .await
    }

    async fn send_password_changed(&self, to: &Email) -> AccountResult<()> {
        self.send(to, "Your password was changed", changed_body())
            .await
    }
}

// ============================================================================
// Templates
// ============================================================================

fn activation_body(code: &ActivationCode, link: &str) -> String {
    format!(
        "Welcome!\n\
        \n\
        Your activation code is:\n\
        \n\
        {}\n\
        \n\
        You can also activate your account directly:\n\
        \n\
        {}\n\
        \n\
        The link expires in 10 minutes; the code stays valid until it is\n\
        used or replaced.\n",
        code, link
    )
}

fn reset_body(link: &str) -> String {
    format!(
        "Hello,\n\
        \n\
        A password reset was requested for your account. To choose a new\n\
        password, open this link:\n\
        \n\
        {}\n\
        \n\
        The link expires in 5 minutes and can be used once. If you did not\n\
        request a reset, you can ignore this mail.\n",
        link
    )
}

fn changed_body() -> String {
    "Hello,\n\
    \n\
    The password of your account was just changed. If this was you, no\n\
    action is needed. If it was not, request a password reset immediately\n\
    to lock the intruder out.\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_body_content() {
        let code = ActivationCode::generate();
        let body = activation_body(&code, "https://app.example.com/account/activate/tok");

        assert!(body.contains(code.as_str()));
        assert!(body.contains("/account/activate/tok"));
        assert!(body.contains("expires in 10 minutes"));
    }

    #[test]
    fn test_reset_body_content() {
        let body = reset_body("https://app.example.com/account/reset/tok");

        assert!(body.contains("/account/reset/tok"));
        assert!(body.contains("expires in 5 minutes"));
        assert!(body.contains("did not request"));
    }

    #[test]
    fn test_changed_body_content() {
        let body = changed_body();
        assert!(body.contains("password of your account was just changed"));
    }
}
