//! Entities

pub mod account;
pub mod reset_marker;

pub use account::Account;
pub use reset_marker::ResetMarker;
