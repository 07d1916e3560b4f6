//! The session store adapter: fixed keys, degrade-don't-crash.

use chrono::{DateTime, Utc};

use crate::KeyValueMedium;

/// Well-known key holding the opaque session token.
pub const TOKEN_KEY: &str = "connectify_token";

/// Well-known key holding the last-activity instant as string-encoded
/// epoch milliseconds.
pub const LAST_ACTIVITY_KEY: &str = "last_activity";

/// Persists and retrieves the current token and the last-activity marker.
///
/// This is the only place that knows the key names or the on-medium
/// encodings. Every operation is fire-and-forget from the caller's
/// perspective: a failing medium is logged at `warn` and degrades to
/// "no stored session" (reads return absent, writes are dropped). Nothing
/// in the session lifecycle should crash because the durable medium
/// had a bad day.
#[derive(Debug, Clone)]
pub struct SessionStore<M> {
    medium: M,
}

impl<M: KeyValueMedium> SessionStore<M> {
    /// Wraps a medium.
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Persists the session token.
    pub fn save_token(&self, token: &str) {
        if let Err(e) = self.medium.set(TOKEN_KEY, token) {
            tracing::warn!(error = %e, "failed to persist session token");
        }
    }

    /// Loads the stored token. Absent and unreadable are the same thing
    /// to callers: no stored session.
    pub fn load_token(&self) -> Option<String> {
        match self.medium.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored token; treating as absent");
                None
            }
        }
    }

    /// Removes the stored token.
    pub fn clear_token(&self) {
        if let Err(e) = self.medium.remove(TOKEN_KEY) {
            tracing::warn!(error = %e, "failed to clear stored token");
        }
    }

    /// Stamps the last-activity marker with the current instant.
    pub fn touch_activity(&self) {
        self.touch_activity_at(Utc::now());
    }

    /// Stamps the last-activity marker with an explicit instant.
    pub fn touch_activity_at(&self, at: DateTime<Utc>) {
        let millis = at.timestamp_millis().to_string();
        if let Err(e) = self.medium.set(LAST_ACTIVITY_KEY, &millis) {
            tracing::warn!(error = %e, "failed to stamp last activity");
        }
    }

    /// Reads the last-activity instant.
    ///
    /// Absent, unreadable, and unparseable markers all degrade to the
    /// epoch — which reads as "idle for ages" and errs on the side of
    /// logging out rather than keeping a stale session alive.
    pub fn last_activity(&self) -> DateTime<Utc> {
        let raw = match self.medium.get(LAST_ACTIVITY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DateTime::<Utc>::UNIX_EPOCH,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read last activity; treating as epoch");
                return DateTime::<Utc>::UNIX_EPOCH;
            }
        };

        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

// =========================================================================
// Tests
// =========================================================================
