//! Session types: configuration, the auth state machine, and the session
//! record itself.

use std::time::Duration;

use chrono::{DateTime, Utc};

use connectify_feed::User;
use connectify_token::Claims;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Timing for issued tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long an issued token stays valid.
    ///
    /// Expiry is only enforced when a stored token is restored on
    /// startup. A live session is ended by logout or by the idle
    /// supervisor, never by the token lapsing underneath it.
    pub token_ttl: Duration,
}

impl SessionConfig {
    /// Default token lifetime: five minutes.
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(5 * 60);
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_ttl: Self::DEFAULT_TOKEN_TTL,
        }
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Where the client is in the auth lifecycle.
///
/// The manager starts in `Initializing` and never returns there; a single
/// [`bootstrap`](crate::AuthSessionManager::bootstrap) call resolves the
/// stored token into one of the two settled states:
///
/// ```text
///                  bootstrap: valid stored token
///  Initializing ─────────────────────────────────────▶ Authenticated
///       │                                               ▲        │
///       │ bootstrap: token absent,             login /  │        │ logout /
///       │ malformed, or expired                signup   │        │ idle timeout
///       ▼                                               │        ▼
///  Unauthenticated ─────────────────────────────────────┴◀───────
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Startup state: the stored token has not been examined yet.
    Initializing,
    /// A session is live.
    Authenticated(Session),
    /// No session. The resting state after logout, a failed restore, or
    /// an idle cut.
    Unauthenticated,
}

impl AuthState {
    /// True when a session is live.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Session record
// ---------------------------------------------------------------------------

/// A live authenticated session.
///
/// `user` is the current-user snapshot the UI reads; a profile edit
/// replaces it in place. The token fields never change after issue (a
/// fresh login re-issues the token rather than editing it), so the
/// username inside the encoded claims can drift from `user.username`
/// here. Only the user id in a token is authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The signed-in user.
    pub user: User,
    /// The encoded token, exactly as persisted in the session store.
    pub token: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the token lapses. Checked on restore, not mid-session.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Builds a session from an issued token and the claims inside it.
    pub(crate) fn new(user: User, token: String, claims: &Claims) -> Self {
        Self {
            user,
            token,
            issued_at: claims.issued_instant(),
            expires_at: claims.expires_instant(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
