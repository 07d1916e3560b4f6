//! The claim set carried inside a session token.
//!
//! This module defines the types that travel "inside the token" — the
//! structures that get serialized to JSON, wrapped in base64, and parsed
//! back when a stored token is restored on startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A unique identifier for a user account.
///
/// This is a newtype wrapper around `u64`: you can't accidentally pass a
/// post id where a user id is expected, and function signatures like
/// `fn find_user(id: UserId)` document themselves.
///
/// `#[serde(transparent)]` makes serde serialize this as the inner number,
/// so a `UserId(3)` is just `3` inside the token JSON, not `{ "0": 3 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Display lets us use `{}` in format strings and logging.
/// `tracing::info!("session for {}", user_id)` prints "session for u-3".
impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Claims — what a token asserts
// ---------------------------------------------------------------------------

/// The identity and timing fields encoded in a session token.
///
/// The JSON shape is fixed by the external interface:
///
/// ```json
/// { "userId": 3, "username": "mike_dev", "email": "mike@example.com",
///   "iat": 1700000000000, "exp": 1700000300000 }
/// ```
///
/// `iat` and `exp` are epoch **milliseconds** (not seconds). The
/// `#[serde(rename_all = "camelCase")]` attribute turns `user_id` into
/// `"userId"` on the wire while the Rust field keeps snake_case.
///
/// Claims are never edited once issued. A profile edit does not re-issue
/// the token, so the `username` here can go stale relative to the store;
/// that staleness is a documented property of the system, and only the
/// `user_id` should be treated as authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// The subject: which user this session belongs to.
    pub user_id: UserId,

    /// Display name at issue time.
    pub username: String,

    /// Email at issue time.
    pub email: String,

    /// Issued-at instant, epoch milliseconds.
    pub iat: i64,

    /// Expires-at instant, epoch milliseconds. A token is expired when
    /// `exp <= now`; expired tokens must be treated as absent.
    pub exp: i64,
}

impl Claims {
    /// Builds a claim set issued at `now` and valid for `ttl`.
    pub fn issued_at(
        user_id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let iat = now.timestamp_millis();
        // A ttl past the representable range saturates rather than wraps.
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        Self {
            user_id,
            username: username.into(),
            email: email.into(),
            iat,
            exp: iat.saturating_add(ttl_ms),
        }
    }

    /// True when the token is no longer valid at `now` (`exp <= now`).
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp_millis()
    }

    /// The issued-at instant. Claims outside chrono's representable range
    /// saturate to the epoch.
    pub fn issued_instant(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.iat).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// The expires-at instant, saturating at the far end of the range.
    pub fn expires_instant(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.exp).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// How long the token was valid for when issued.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.exp.saturating_sub(self.iat).max(0) as u64)
    }
}

// =========================================================================
// Tests
// =========================================================================
