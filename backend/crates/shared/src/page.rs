//! Keyset Pagination
//!
//! The cursor encodes the last-seen row as a `(key, value)` pair: the row's
//! UUID and its creation timestamp. List queries order by
//! `(created_at DESC, id DESC)` and filter `(created_at, id) < (value, key)`,
//! which stays stable under concurrent inserts. The timestamp alone is not
//! unique, so the UUID tie-break is part of the ordering contract.
//!
//! Wire format: base64url of `{"key":"<uuid>","value":"<rfc3339>"}`. The
//! cursor carries no privilege, only a position, so it is unsigned — but a
//! cursor that fails to decode is an invalid request parameter, never a
//! silent restart from page one.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::app_error::{AppError, AppResult};

/// Page size used when the client sends no `limit`
pub const DEFAULT_LIMIT: i64 = 9;

/// Upper bound for the `limit` query parameter
pub const MAX_LIMIT: i64 = 20;

/// Base64url, emitted padded; decoding accepts padded and unpadded forms
/// since some clients strip the `=` before echoing the cursor back.
const CURSOR_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ============================================================================
// Cursor
// ============================================================================

/// Position of the last item seen by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// UUID of the last row (ordering tie-break)
    pub key: Uuid,
    /// Creation timestamp of the last row
    pub value: DateTime<Utc>,
}

impl Cursor {
    pub fn new(key: Uuid, value: DateTime<Utc>) -> Self {
        Self { key, value }
    }

    /// Encode as an opaque URL-safe string
    pub fn encode(&self) -> String {
        // Serialization of a two-field struct cannot fail
        let json = serde_json::to_vec(self).expect("cursor serialization");
        CURSOR_ENGINE.encode(json)
    }

    /// Decode from the query-parameter form
    ///
    /// Any failure (bad base64, bad JSON, bad UUID/timestamp) is reported
    /// as an invalid pagination parameter.
    pub fn decode(s: &str) -> AppResult<Self> {
        let bytes = CURSOR_ENGINE
            .decode(s)
            .map_err(|e| AppError::unprocessable("Invalid pagination cursor").with_source(e))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::unprocessable("Invalid pagination cursor").with_source(e))
    }
}

// ============================================================================
// PageRequest
// ============================================================================

/// Validated pagination parameters for a single list request
///
/// Constructed per request from query parameters, never persisted.
#[derive(Debug, Clone)]
pub struct PageRequest {
    limit: i64,
    cursor: Option<Cursor>,
}

impl PageRequest {
    /// Build from raw query values, enforcing `limit` in `[1, MAX_LIMIT]`
    ///
    /// Out-of-range limits are rejected rather than clamped so callers are
    /// never surprised by a different effective page size.
    pub fn new(limit: Option<i64>, cursor: Option<Cursor>) -> AppResult<Self> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::unprocessable("Invalid pagination params"));
        }

        Ok(Self { limit, cursor })
    }

    /// First page with the default limit
    pub fn first_page() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            cursor: None,
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Row count repositories should actually query: one extra row proves
    /// the existence of a next page and becomes the next cursor.
    pub fn fetch_limit(&self) -> i64 {
        self.limit + 1
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of results plus the cursor for the next one
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<Cursor>,
}

impl<T> Page<T> {
    /// Assemble a page from rows fetched with [`PageRequest::fetch_limit`]
    ///
    /// If the extra row is present it is dropped from the result and the new
    /// last row becomes the next cursor; otherwise the sequence is exhausted
    /// and no cursor is emitted.
    pub fn from_rows<F>(mut rows: Vec<T>, request: &PageRequest, cursor_of: F) -> Self
    where
        F: Fn(&T) -> Cursor,
    {
        let limit = request.limit() as usize;

        let next = if rows.len() > limit {
            rows.truncate(limit);
            rows.last().map(&cursor_of)
        } else {
            None
        };

        Self { items: rows, next }
    }
}

// ============================================================================
// Axum extractor (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
mod extract {
    use axum::extract::{FromRequestParts, Query};
    use http::request::Parts;
    use serde::Deserialize;

    use super::{Cursor, PageRequest};
    use crate::error::app_error::AppError;

    #[derive(Deserialize)]
    struct PageParams {
        limit: Option<i64>,
        cursor: Option<String>,
    }

    impl<S> FromRequestParts<S> for PageRequest
    where
        S: Send + Sync,
    {
        type Rejection = AppError;

        async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
            let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    AppError::unprocessable("Invalid pagination params").with_source(e)
                })?;

            let cursor = params
                .cursor
                .as_deref()
                .map(Cursor::decode)
                .transpose()?;

            PageRequest::new(params.limit, cursor)
        }
    }
}
