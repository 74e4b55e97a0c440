//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - HMAC-signed claim tokens (session / activation / password reset)
//! - Cookie management

pub mod cookie;
pub mod password;
pub mod token;
