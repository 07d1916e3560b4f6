//! Unified error type for the Connectify facade.

use connectify_feed::FeedError;
use connectify_session::AuthError;

/// Top-level error the facade surfaces.
///
/// Callers deal with this single type instead of importing errors from
/// each layer. Conversions flatten: a store failure that bubbled through
/// the session layer still comes out as [`ConnectifyError::Feed`], so
/// every failure has exactly one place to match it.
#[derive(Debug, thiserror::Error)]
pub enum ConnectifyError {
    /// A session-layer failure (password mismatch, missing session).
    #[error(transparent)]
    Auth(AuthError),

    /// An entity-store failure (credentials, uniqueness, lookups,
    /// ownership).
    #[error(transparent)]
    Feed(#[from] FeedError),
}

impl From<AuthError> for ConnectifyError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Feed(feed) => Self::Feed(feed),
            other => Self::Auth(other),
        }
    }
}
