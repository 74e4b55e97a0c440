//! Reset Marker Entity

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, ResetId};

/// Server-side record of an outstanding password reset request
///
/// At most one marker exists per account; requesting another reset rotates
/// the marker id, which silently invalidates any previously mailed token
/// (the token's subject is the marker id). Consuming the marker deletes the
/// row, so every token is single-use.
#[derive(Debug, Clone)]
pub struct ResetMarker {
    pub reset_id: ResetId,
    pub account_id: AccountId,
    pub created_at: DateTime<Utc>,
}

impl ResetMarker {
    pub fn new(account_id: AccountId) -> Self {
        Self {
            reset_id: ResetId::new(),
            account_id,
            created_at: Utc::now(),
        }
    }
}
