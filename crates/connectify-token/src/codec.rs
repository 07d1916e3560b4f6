//! Turning claims into opaque token strings and back.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};

use std::time::Duration;

use crate::claims::{Claims, UserId};
use crate::error::TokenError;

/// Encodes and decodes session tokens.
///
/// The format is fixed by the external interface: the claim set is
/// serialized to JSON and the JSON is wrapped in standard base64. There is
/// no signature — decoding proves nothing about who produced the token,
/// only that it parses (see the crate docs for the security model).
///
/// The codec is a pure function of its arguments and the clock. The
/// `issue`/`decode` pair read `Utc::now()`; the `*_at` variants take an
/// explicit instant so tests can pin time exactly.
///
/// # Example
///
/// ```
/// use connectify_token::{TokenCodec, UserId};
/// use std::time::Duration;
///
/// let codec = TokenCodec;
/// let token = codec.issue(
///     UserId(1),
///     "taharoshaan",
///     "taha@connectify.com",
///     Duration::from_secs(300),
/// );
///
/// let claims = codec.decode(&token).unwrap();
/// assert_eq!(claims.user_id, UserId(1));
/// assert_eq!(claims.username, "taharoshaan");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCodec;

impl TokenCodec {
    /// Issues a token for `user_id` valid for `ttl`, starting now.
    pub fn issue(
        &self,
        user_id: UserId,
        username: &str,
        email: &str,
        ttl: Duration,
    ) -> String {
        self.issue_at(user_id, username, email, ttl, Utc::now())
    }

    /// Issues a token as of an explicit `now`.
    pub fn issue_at(
        &self,
        user_id: UserId,
        username: &str,
        email: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> String {
        let claims = Claims::issued_at(user_id, username, email, now, ttl);
        self.encode(&claims)
    }

    /// Encodes an already-built claim set.
    ///
    /// Exposed separately so callers (and tests) can encode claims with
    /// arbitrary timing fields.
    pub fn encode(&self, claims: &Claims) -> String {
        // Claims is a plain struct of strings and integers; serializing it
        // to JSON cannot fail.
        let json = serde_json::to_vec(claims).expect("claims serialize to JSON");
        STANDARD.encode(json)
    }

    /// Decodes a token against the current clock.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Malformed`] when the string is not base64, not
    ///   UTF-8 JSON, or not the expected claim shape.
    /// - [`TokenError::Expired`] when the claims parse but `exp <= now`.
    ///   Expired is a distinguished result, not a parse failure: callers
    ///   must treat it as "no session", never as a valid claim set.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_at(token, Utc::now())
    }

    /// Decodes a token as of an explicit `now`.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|e| TokenError::Malformed(e.to_string()))?;

        // `from_slice` covers both UTF-8 validation and JSON shape.
        let claims: Claims =
            serde_json::from_slice(&bytes).map_err(|e| TokenError::Malformed(e.to_string()))?;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}

// =========================================================================
// Tests
// =========================================================================
