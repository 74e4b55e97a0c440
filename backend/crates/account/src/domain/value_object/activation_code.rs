//! Activation Code Value Object
//!
//! Short code mailed at registration and typed back (or embedded in the
//! activation link mail alongside the signed link). Eight uppercase
//! alphanumeric characters, roughly 41 bits of entropy, single-use because
//! activation clears it.

use kernel::error::app_error::{AppError, AppResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Code length in characters
pub const CODE_LENGTH: usize = 8;

/// Alphabet for generated codes (uppercase alphanumerics)
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Account activation code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationCode(String);

impl ActivationCode {
    /// Generate a fresh random code
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code = (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Validate and wrap a code submitted by a client
    ///
    /// Input is uppercased first so codes are case-insensitive to type.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let code = raw.into().trim().to_uppercase();

        if code.len() != CODE_LENGTH {
            return Err(AppError::bad_request("Invalid activation code"));
        }
        if !code.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(AppError::bad_request("Invalid activation code"));
        }

        Ok(Self(code))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActivationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_shape() {
        let code = ActivationCode::generate();
        assert_eq!(code.as_str().len(), CODE_LENGTH);
        assert!(code.as_str().bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generated_codes_differ() {
        assert_ne!(
            ActivationCode::generate().as_str(),
            ActivationCode::generate().as_str()
        );
    }

    #[test]
    fn test_submitted_code_is_uppercased() {
        let code = ActivationCode::new("abcd1234").unwrap();
        assert_eq!(code.as_str(), "ABCD1234");
    }

    #[test]
    fn test_submitted_code_rejected() {
        assert!(ActivationCode::new("").is_err());
        assert!(ActivationCode::new("SHORT").is_err());
        assert!(ActivationCode::new("TOOLONGCODE1").is_err());
        assert!(ActivationCode::new("ABC-1234").is_err());
    }
}
