//! Value Objects

pub mod account_status;
pub mod activation_code;
pub mod email;

pub use account_status::AccountStatus;
pub use activation_code::ActivationCode;
pub use email::Email;
