//! Signed Claim Tokens
//!
//! One generic mechanism behind the three token flavors the account system
//! uses (session/access, activation, password reset). A token is a compact
//! signed string:
//!
//! ```text
//! base64url(header) . base64url(claims) . base64url(HMAC-SHA512 signature)
//! ```
//!
//! Claims always carry `sub` (subject id), `iat` and `exp` (Unix seconds),
//! plus an optional flavor-specific payload flattened into the same object.
//! Each flavor is instantiated with its own secret and TTL, so a leaked or
//! rotated secret for one flow cannot be replayed as another.
//!
//! Verification fails closed: the signature is checked before any claim is
//! trusted, and a malformed token, a bad signature and an expired token are
//! all the same generic failure to the caller. The [`TokenError`] variants
//! exist for internal logging only and must never be distinguished in a
//! response.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::Sha512;
use thiserror::Error;

type HmacSha512 = Hmac<Sha512>;

const HEADER: &str = r#"{"alg":"HS512","typ":"JWT"}"#;

/// Token verification/issuance failure
///
/// Variants are for diagnostics; map them all to the same unauthorized
/// outcome at the HTTP boundary.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("signature mismatch")]
    Signature,

    #[error("token expired")]
    Expired,

    #[error("claims encoding failed: {0}")]
    Encoding(String),
}

/// Claims carried by a signed token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims<P> {
    /// Subject identifier (account id or reset marker id)
    pub sub: String,
    /// Issued-at, Unix seconds
    pub iat: i64,
    /// Expires-at, Unix seconds
    pub exp: i64,
    /// Flavor-specific fields, flattened into the claims object
    #[serde(flatten)]
    pub payload: P,
}

/// Payload for flavors that carry nothing beyond the subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoPayload {}

/// Issue a signed token for `subject`, valid for `ttl` from now
pub fn issue<P: Serialize>(
    secret: &[u8],
    subject: &str,
    ttl: Duration,
    payload: P,
) -> Result<String, TokenError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        iat: now,
        exp: now + ttl.num_seconds(),
        payload,
    };

    let header = URL_SAFE_NO_PAD.encode(HEADER);
    let body = URL_SAFE_NO_PAD.encode(
        serde_json::to_vec(&claims).map_err(|e| TokenError::Encoding(e.to_string()))?,
    );

    let signing_input = format!("{header}.{body}");
    let signature = URL_SAFE_NO_PAD.encode(hmac_sha512(secret, signing_input.as_bytes()));

    Ok(format!("{signing_input}.{signature}"))
}

/// Verify a token and return its claims
///
/// The signature is verified (constant-time) before the claims are parsed;
/// the validity window (`iat`/`exp`) is checked last.
pub fn verify<P: DeserializeOwned>(secret: &[u8], token: &str) -> Result<Claims<P>, TokenError> {
    let mut parts = token.split('.');
    let (Some(header), Some(body), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| TokenError::Malformed)?;
    let parsed_header: Header =
        serde_json::from_slice(&header_bytes).map_err(|_| TokenError::Malformed)?;
    if parsed_header.alg != "HS512" {
        return Err(TokenError::Malformed);
    }

    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| TokenError::Malformed)?;

    let signing_input = format!("{header}.{body}");
    let mut mac =
        HmacSha512::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(signing_input.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::Signature)?;

    let claims_bytes = URL_SAFE_NO_PAD
        .decode(body)
        .map_err(|_| TokenError::Malformed)?;
    let claims: Claims<P> =
        serde_json::from_slice(&claims_bytes).map_err(|_| TokenError::Malformed)?;

    let now = Utc::now().timestamp();
    if claims.iat > now {
        // Not issued yet; no honest issuer produces this
        return Err(TokenError::Malformed);
    }
    if now > claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

fn hmac_sha512(secret: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha512::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[derive(Deserialize)]
struct Header {
    alg: String,
    #[allow(dead_code)]
    #[serde(default)]
    typ: Option<String>,
}
