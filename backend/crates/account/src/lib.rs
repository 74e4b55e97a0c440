//! Account (Identity & Session) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and SMTP implementations
//! - `presentation/` - HTTP handlers, DTOs, router, session middleware
//!
//! ## Features
//! - Registration with email + password and mailed activation code/link
//! - Login issuing a signed stateless session token (header + cookie)
//! - Single-shot account activation (code or emailed link)
//! - Forgot/reset password with single-use, latest-wins reset markers
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Session/activation/reset tokens signed with HMAC-SHA512 under
//!   flavor-specific secrets and short TTLs (15/10/5 minutes)
//! - Unknown email and wrong password are indistinguishable on login
//! - Forgot-password always answers 204, known address or not

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use application::session::SessionContext;
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgAccountRepository;
pub use infra::smtp::SmtpMailer;
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
