//! API DTOs (Data Transfer Objects)
//!
//! Wire format is snake_case JSON.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub id: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
///
/// The same token also travels back as the session cookie.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

// ============================================================================
// Activate
// ============================================================================

/// Activate request (mailed code, on behalf of the session's account)
#[derive(Debug, Clone, Deserialize)]
pub struct ActivateRequest {
    pub code: String,
}

// ============================================================================
// Forgot / Reset
// ============================================================================

/// Forgot password request
#[derive(Debug, Clone, Deserialize)]
pub struct ForgotRequest {
    pub email: String,
}

/// Reset password request
#[derive(Debug, Clone, Deserialize)]
pub struct ResetRequest {
    pub token: String,
    pub new_password: String,
}
