//! Error types for the session layer.

use connectify_feed::FeedError;

/// Errors surfaced by the auth session manager.
///
/// Entity-store failures (bad credentials, taken identifiers, missing
/// rows) pass through unchanged as [`AuthError::Feed`]; the other
/// variants are failures the session layer detects itself.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The two password fields of a signup did not match.
    /// Checked locally, before the entity store is consulted.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The operation needs a live session and there is none.
    #[error("no authenticated session")]
    NotAuthenticated,

    /// A failure from the entity store, passed through unchanged.
    #[error(transparent)]
    Feed(#[from] FeedError),
}
