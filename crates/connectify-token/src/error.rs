//! Error types for the token layer.
//!
//! Each crate in Connectify defines its own error enum. This keeps errors
//! specific and meaningful — when you see a `TokenError`, you know the
//! problem is the token string itself, not storage or the feed.

/// Errors that can occur while decoding a session token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The string cannot be parsed into the expected claim shape.
    ///
    /// Covers every parse-stage failure: input that is not base64, bytes
    /// that are not UTF-8 JSON, and JSON missing claim fields. The inner
    /// string carries the underlying cause for logs; callers treat all
    /// malformed tokens the same way (as "no session").
    #[error("malformed token: {0}")]
    Malformed(String),

    /// The claims parsed but `exp` is at or before the current clock.
    ///
    /// Distinguished from `Malformed` so callers can tell "this was a real
    /// session that lapsed" from "this was never a token" — useful for
    /// logging, identical for control flow: both mean unauthenticated.
    #[error("token expired")]
    Expired,
}
