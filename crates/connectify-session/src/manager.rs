//! The auth session manager: the state machine that owns login, signup,
//! restore, and logout.
//!
//! # Concurrency note
//!
//! `AuthSessionManager` is NOT thread-safe by itself. A single user agent
//! has a single auth lifecycle, so the manager is owned by the client
//! facade and accessed through a mutex at that level. Keeping it plain
//! here avoids hidden locking.

use chrono::Utc;

use connectify_feed::{FeedStore, NewUser, ProfileUpdate, STOCK_AVATAR, User};
use connectify_storage::{KeyValueMedium, SessionStore};
use connectify_token::{Claims, TokenCodec};

use crate::error::AuthError;
use crate::session::{AuthState, Session, SessionConfig};

/// Drives the auth lifecycle over a persisted token.
///
/// The manager owns the current [`AuthState`] and the session store; the
/// entity store is *borrowed* by each operation that needs it, so one
/// [`FeedStore`] can sit behind a lock and serve both this manager and
/// the feed operations without belonging to either.
///
/// ## Lifecycle
///
/// ```text
/// bootstrap() ──→ login()/signup() ──→ update_profile() ──→ logout()
///      │                 │                                     │
///      ▼                 ▼                                     ▼
/// [settled state]   [Authenticated]                   [Unauthenticated]
/// ```
///
/// # Example
///
/// ```
/// use connectify_feed::FeedStore;
/// use connectify_session::{AuthSessionManager, SessionConfig};
/// use connectify_storage::{MemoryMedium, SessionStore};
///
/// let feed = FeedStore::seeded();
/// let mut manager = AuthSessionManager::new(
///     SessionConfig::default(),
///     SessionStore::new(MemoryMedium::new()),
/// );
///
/// manager.bootstrap(); // no stored token: lands Unauthenticated
/// let session = manager
///     .login(&feed, "taha@connectify.com", "password123")
///     .unwrap();
/// assert_eq!(session.user.username, "taharoshaan");
/// ```
pub struct AuthSessionManager<M: KeyValueMedium> {
    config: SessionConfig,
    codec: TokenCodec,
    store: SessionStore<M>,
    state: AuthState,
}

impl<M: KeyValueMedium> AuthSessionManager<M> {
    /// Creates a manager in the [`Initializing`](AuthState::Initializing)
    /// state. Call [`bootstrap`](Self::bootstrap) before anything else.
    pub fn new(config: SessionConfig, store: SessionStore<M>) -> Self {
        Self {
            config,
            codec: TokenCodec,
            store,
            state: AuthState::Initializing,
        }
    }

    // -----------------------------------------------------------------------
    // State accessors
    // -----------------------------------------------------------------------

    /// The current auth state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.session().map(|session| &session.user)
    }

    /// True when a session is live.
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Resolves the stored token into a settled state. Run once at
    /// startup.
    ///
    /// A valid token restores the session it encodes: the profile is
    /// rebuilt from the claims (with stock placeholder fields for what a
    /// token does not carry) and the activity marker is stamped so the
    /// restored session does not start half-idle. An absent token lands
    /// [`AuthState::Unauthenticated`] without touching the store; a
    /// malformed or expired token is also cleared from the store. Neither
    /// failure surfaces to the caller.
    pub fn bootstrap(&mut self) -> &AuthState {
        let Some(token) = self.store.load_token() else {
            tracing::debug!("no stored token");
            self.state = AuthState::Unauthenticated;
            return &self.state;
        };

        match self.codec.decode(&token) {
            Ok(claims) => {
                tracing::info!(user = %claims.user_id, "session restored from stored token");
                let user = profile_from_claims(&claims);
                self.store.touch_activity();
                self.state = AuthState::Authenticated(Session::new(user, token, &claims));
            }
            Err(reason) => {
                tracing::warn!(%reason, "stored token rejected, clearing it");
                self.store.clear_token();
                self.state = AuthState::Unauthenticated;
            }
        }
        &self.state
    }

    /// Checks `email`/`password` against the entity store and, on
    /// success, issues and persists a fresh token.
    ///
    /// Failure leaves the current state untouched, so a bad re-login
    /// attempt cannot knock out a live session. Logging in while already
    /// authenticated simply replaces the session; the most recent call
    /// wins.
    ///
    /// # Errors
    ///
    /// [`InvalidCredentials`](connectify_feed::FeedError::InvalidCredentials)
    /// for an unknown email or a wrong password; the two cases are
    /// deliberately indistinguishable to the caller.
    pub fn login(
        &mut self,
        feed: &FeedStore,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let user = feed.authenticate(email, password)?.clone();
        tracing::info!(user = %user.id, username = %user.username, "logged in");
        Ok(self.establish(user))
    }

    /// Creates an account and signs it in.
    ///
    /// The confirmation check runs first, locally; only then is the
    /// entity store asked to create the user, which enforces email and
    /// username uniqueness. The chosen password is never stored — every
    /// account authenticates with the shared mock password afterwards.
    ///
    /// # Errors
    ///
    /// - [`AuthError::PasswordMismatch`] when the two password fields
    ///   differ (nothing is inserted).
    /// - [`EmailTaken`](connectify_feed::FeedError::EmailTaken) /
    ///   [`UsernameTaken`](connectify_feed::FeedError::UsernameTaken)
    ///   from the store, likewise with nothing inserted.
    pub fn signup(
        &mut self,
        feed: &mut FeedStore,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Session, AuthError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let user = feed.create_user(NewUser {
            username: username.to_owned(),
            email: email.to_owned(),
        })?;
        tracing::info!(user = %user.id, username = %user.username, "signed up");
        Ok(self.establish(user))
    }

    /// Ends the session: clears the stored token and lands
    /// [`AuthState::Unauthenticated`].
    ///
    /// Idempotent — calling it without a live session settles the state
    /// and does nothing else.
    pub fn logout(&mut self) {
        if !self.state.is_authenticated() {
            self.state = AuthState::Unauthenticated;
            return;
        }
        self.store.clear_token();
        self.state = AuthState::Unauthenticated;
        tracing::info!("logged out");
    }

    /// Applies a profile edit through the entity store and refreshes the
    /// session's user snapshot with the result.
    ///
    /// The token is *not* re-issued: the claims inside it keep the
    /// username they were minted with. Only the user id in a token is
    /// authoritative, so the drift is accepted (see [`Claims`]).
    ///
    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] without a live session; store
    /// failures ([`UserNotFound`](connectify_feed::FeedError::UserNotFound),
    /// [`UsernameTaken`](connectify_feed::FeedError::UsernameTaken)) pass
    /// through.
    pub fn update_profile(
        &mut self,
        feed: &mut FeedStore,
        update: ProfileUpdate,
    ) -> Result<User, AuthError> {
        let AuthState::Authenticated(session) = &mut self.state else {
            return Err(AuthError::NotAuthenticated);
        };

        let user = feed.update_user_profile(session.user.id, update)?;
        session.user = user.clone();
        tracing::debug!(user = %user.id, "session profile snapshot refreshed");
        Ok(user)
    }

    /// Issues a token for `user`, persists it, stamps activity, and
    /// swaps the state to authenticated.
    fn establish(&mut self, user: User) -> Session {
        let claims = Claims::issued_at(
            user.id,
            &user.username,
            &user.email,
            Utc::now(),
            self.config.token_ttl,
        );
        let token = self.codec.encode(&claims);

        self.store.save_token(&token);
        self.store.touch_activity();

        let session = Session::new(user, token, &claims);
        self.state = AuthState::Authenticated(session.clone());
        session
    }
}

/// Rebuilds a displayable user from bare token claims.
///
/// A token carries identity, not a profile, so the missing fields get the
/// same stock values a brand-new signup gets. The entity store is not
/// consulted: a restored session shows the claim-time username until the
/// next fresh login.
fn profile_from_claims(claims: &Claims) -> User {
    User {
        id: claims.user_id,
        username: claims.username.clone(),
        email: claims.email.clone(),
        avatar: STOCK_AVATAR.to_owned(),
        bio: None,
        verified: false,
        created_at: claims.issued_instant(),
    }
}

// =========================================================================
// Tests
// =========================================================================
