//! Application Layer
//!
//! Use cases orchestrating domain objects, repositories, and the mailer.

pub mod activate;
pub mod config;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod resend_activation;
pub mod reset_password;
pub mod session;

pub use activate::ActivateUseCase;
pub use forgot_password::ForgotPasswordUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use resend_activation::ResendActivationUseCase;
pub use reset_password::{ResetPasswordInput, ResetPasswordUseCase};
