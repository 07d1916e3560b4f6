//! The client facade: one shared handle over the session, idle, and
//! feed layers.
//!
//! A [`Client`] is cheap to clone; clones share state through an `Arc`,
//! so the same client can be handed to UI tasks, background watchers,
//! and tests. Locks are held only for the store operation itself —
//! simulated latency is slept off *before* any lock is taken, so a slow
//! "request" never blocks the rest of the app.
//!
//! Mutations apply directly to the single in-process store. There is no
//! remote service to reconcile with, so the value an operation returns
//! is the settled state, not an optimistic guess that could later be
//! rolled back.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::info;

use connectify_feed::{
    Comment, CommentId, FeedError, FeedStore, LeaderboardEntry, Post, PostId, ProfileUpdate, User,
    UserId,
};
use connectify_idle::{ActivitySignal, IdleConfig, IdleHandle, IdleSupervisor};
use connectify_session::{AuthError, AuthSessionManager, AuthState, Session, SessionConfig};
use connectify_storage::{KeyValueMedium, MemoryMedium, SessionStore};

use crate::error::ConnectifyError;
use crate::latency::LatencyProfile;

/// How many accounts the leaderboard returns.
const LEADERBOARD_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// State shared by every clone of a [`Client`].
///
/// Lock order is `feed` before `auth` whenever both are held.
struct ClientState<M: KeyValueMedium + Clone> {
    feed: Mutex<FeedStore>,
    auth: Mutex<AuthSessionManager<M>>,
    /// Activity marker store handed to each idle supervisor.
    activity: SessionStore<M>,
    /// Handle to the running idle supervisor, if a session is live.
    idle: Mutex<Option<IdleHandle>>,
    idle_config: IdleConfig,
    latency: LatencyProfile,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for a [`Client`].
///
/// The defaults are the stock demo setup: the seeded dataset, in-memory
/// persistence, and production-like latency. Tests usually swap in
/// [`LatencyProfile::none`] and, for idle scenarios, a shared medium
/// they can inspect.
pub struct ClientBuilder<M: KeyValueMedium + Clone = MemoryMedium> {
    medium: M,
    feed: FeedStore,
    session_config: SessionConfig,
    idle_config: IdleConfig,
    latency: LatencyProfile,
}

impl ClientBuilder<MemoryMedium> {
    /// Starts from the defaults.
    pub fn new() -> Self {
        Self {
            medium: MemoryMedium::new(),
            feed: FeedStore::seeded(),
            session_config: SessionConfig::default(),
            idle_config: IdleConfig::default(),
            latency: LatencyProfile::default(),
        }
    }
}

impl Default for ClientBuilder<MemoryMedium> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: KeyValueMedium + Clone> ClientBuilder<M> {
    /// Swaps the persistence medium. A [`FileMedium`] makes sessions
    /// survive process restarts; a shared [`MemoryMedium`] lets several
    /// clients see the same stored token.
    ///
    /// [`FileMedium`]: connectify_storage::FileMedium
    pub fn medium<N: KeyValueMedium + Clone>(self, medium: N) -> ClientBuilder<N> {
        ClientBuilder {
            medium,
            feed: self.feed,
            session_config: self.session_config,
            idle_config: self.idle_config,
            latency: self.latency,
        }
    }

    /// Replaces the seeded dataset.
    pub fn feed_store(mut self, feed: FeedStore) -> Self {
        self.feed = feed;
        self
    }

    /// Sets the session token configuration.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Sets the inactivity thresholds.
    pub fn idle_config(mut self, config: IdleConfig) -> Self {
        self.idle_config = config;
        self
    }

    /// Sets the simulated latency profile.
    pub fn latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Builds the client. Nothing touches the medium until
    /// [`Client::bootstrap`].
    pub fn build(self) -> Client<M> {
        let activity = SessionStore::new(self.medium.clone());
        let auth = AuthSessionManager::new(self.session_config, SessionStore::new(self.medium));
        Client {
            inner: Arc::new(ClientState {
                feed: Mutex::new(self.feed),
                auth: Mutex::new(auth),
                activity,
                idle: Mutex::new(None),
                idle_config: self.idle_config,
                latency: self.latency,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Handle to the client core.
pub struct Client<M: KeyValueMedium + Clone> {
    inner: Arc<ClientState<M>>,
}

impl<M: KeyValueMedium + Clone> Clone for Client<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Client<MemoryMedium> {
    /// A builder with the stock setup.
    pub fn builder() -> ClientBuilder<MemoryMedium> {
        ClientBuilder::new()
    }
}

impl<M: KeyValueMedium + Clone> Client<M> {
    // -----------------------------------------------------------------------
    // Auth lifecycle
    // -----------------------------------------------------------------------

    /// Resolves any stored token into a settled auth state. Run once at
    /// startup; not latency-simulated, since nothing leaves the process.
    ///
    /// When a session is restored, the idle supervisor starts watching
    /// it exactly as if the user had just logged in.
    pub async fn bootstrap(&self) -> AuthState {
        let state = self.inner.auth.lock().await.bootstrap().clone();
        if state.is_authenticated() {
            self.start_idle_watch().await;
        }
        state
    }

    /// Signs in with an email and password. On success the idle
    /// supervisor starts watching the new session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ConnectifyError> {
        self.simulate(self.inner.latency.auth).await;
        let session = {
            let feed = self.inner.feed.lock().await;
            let mut auth = self.inner.auth.lock().await;
            auth.login(&feed, email, password)?
        };
        self.start_idle_watch().await;
        Ok(session)
    }

    /// Creates an account and signs it in.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Session, ConnectifyError> {
        self.simulate(self.inner.latency.auth).await;
        let session = {
            let mut feed = self.inner.feed.lock().await;
            let mut auth = self.inner.auth.lock().await;
            auth.signup(&mut feed, username, email, password, confirm_password)?
        };
        self.start_idle_watch().await;
        Ok(session)
    }

    /// Signs out: stops the idle supervisor and clears the stored token.
    ///
    /// Idempotent. This is also what the idle watcher calls when the
    /// inactivity threshold is crossed.
    pub async fn logout(&self) {
        let handle = self.inner.idle.lock().await.take();
        if let Some(handle) = handle {
            handle.shutdown().await;
        }
        self.inner.auth.lock().await.logout();
    }

    /// Reports a user interaction, resetting the idle clock for the live
    /// session. Does nothing when signed out.
    pub async fn record_activity(&self, signal: ActivitySignal) {
        if let Some(handle) = self.inner.idle.lock().await.as_ref() {
            handle.record(signal);
        }
    }

    /// Edits the signed-in user's profile. The feed store re-syncs the
    /// author snapshots denormalized onto posts and comments.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ConnectifyError> {
        self.simulate(self.inner.latency.feed).await;
        let mut feed = self.inner.feed.lock().await;
        let mut auth = self.inner.auth.lock().await;
        Ok(auth.update_profile(&mut feed, update)?)
    }

    /// The current auth state.
    pub async fn auth_state(&self) -> AuthState {
        self.inner.auth.lock().await.state().clone()
    }

    /// The live session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.inner.auth.lock().await.session().cloned()
    }

    /// The signed-in user's latest profile snapshot, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.inner.auth.lock().await.current_user().cloned()
    }

    /// Whether a session is live.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.auth.lock().await.is_authenticated()
    }

    // -----------------------------------------------------------------------
    // Feed reads
    // -----------------------------------------------------------------------

    /// The whole feed, most recent first.
    pub async fn posts(&self) -> Vec<Post> {
        self.simulate(self.inner.latency.feed).await;
        self.inner.feed.lock().await.posts().to_vec()
    }

    /// Every post authored by `user`, most recent first.
    pub async fn user_posts(&self, user: UserId) -> Vec<Post> {
        self.simulate(self.inner.latency.feed).await;
        self.inner.feed.lock().await.user_posts(user)
    }

    /// Looks up a single post.
    pub async fn post(&self, id: PostId) -> Result<Post, ConnectifyError> {
        self.simulate(self.inner.latency.interact).await;
        let feed = self.inner.feed.lock().await;
        let post = feed.post(id).ok_or(FeedError::PostNotFound(id))?;
        Ok(post.clone())
    }

    /// Looks up a single profile.
    pub async fn user(&self, id: UserId) -> Result<User, ConnectifyError> {
        self.simulate(self.inner.latency.interact).await;
        let feed = self.inner.feed.lock().await;
        let user = feed.find_user_by_id(id).ok_or(FeedError::UserNotFound(id))?;
        Ok(user.clone())
    }

    /// The points leaderboard, best first.
    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.simulate(self.inner.latency.feed).await;
        self.inner.feed.lock().await.leaderboard(LEADERBOARD_SIZE)
    }

    // -----------------------------------------------------------------------
    // Posts
    // -----------------------------------------------------------------------

    /// Publishes a post authored by the signed-in user.
    pub async fn create_post(
        &self,
        content: &str,
        image: Option<String>,
    ) -> Result<Post, ConnectifyError> {
        let author = self.authed_user_id().await?;
        self.simulate(self.inner.latency.feed).await;
        let mut feed = self.inner.feed.lock().await;
        Ok(feed.create_post(author, content.to_owned(), image)?)
    }

    /// Rewrites one of the signed-in user's posts.
    pub async fn update_post(
        &self,
        id: PostId,
        content: &str,
        image: Option<String>,
    ) -> Result<Post, ConnectifyError> {
        let editor = self.authed_user_id().await?;
        self.simulate(self.inner.latency.feed).await;
        let mut feed = self.inner.feed.lock().await;
        Ok(feed.update_post(id, editor, content.to_owned(), image)?)
    }

    /// Removes one of the signed-in user's posts, with its comments.
    pub async fn delete_post(&self, id: PostId) -> Result<(), ConnectifyError> {
        let editor = self.authed_user_id().await?;
        self.simulate(self.inner.latency.feed).await;
        let mut feed = self.inner.feed.lock().await;
        Ok(feed.delete_post(id, editor)?)
    }

    // -----------------------------------------------------------------------
    // Votes
    // -----------------------------------------------------------------------

    /// Casts this client's vote on a post and returns the updated view.
    /// Voting twice is a no-op.
    pub async fn vote(&self, id: PostId) -> Result<Post, ConnectifyError> {
        self.simulate(self.inner.latency.vote).await;
        Ok(self.inner.feed.lock().await.vote(id)?)
    }

    /// Withdraws this client's vote and returns the updated view. Also
    /// idempotent.
    pub async fn unvote(&self, id: PostId) -> Result<Post, ConnectifyError> {
        self.simulate(self.inner.latency.vote).await;
        Ok(self.inner.feed.lock().await.unvote(id)?)
    }

    // -----------------------------------------------------------------------
    // Comments
    // -----------------------------------------------------------------------

    /// Comments on a post as the signed-in user.
    pub async fn add_comment(
        &self,
        post: PostId,
        content: &str,
    ) -> Result<Comment, ConnectifyError> {
        let author = self.authed_user_id().await?;
        self.simulate(self.inner.latency.interact).await;
        let mut feed = self.inner.feed.lock().await;
        Ok(feed.add_comment(post, content.to_owned(), author)?)
    }

    /// Rewrites a comment's text.
    pub async fn edit_comment(
        &self,
        id: CommentId,
        content: &str,
    ) -> Result<Comment, ConnectifyError> {
        self.simulate(self.inner.latency.interact).await;
        let mut feed = self.inner.feed.lock().await;
        Ok(feed.edit_comment(id, content.to_owned())?)
    }

    /// Removes a comment from its post.
    pub async fn delete_comment(&self, id: CommentId) -> Result<(), ConnectifyError> {
        self.simulate(self.inner.latency.interact).await;
        Ok(self.inner.feed.lock().await.delete_comment(id)?)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// The signed-in user's id, or `NotAuthenticated`.
    async fn authed_user_id(&self) -> Result<UserId, ConnectifyError> {
        let auth = self.inner.auth.lock().await;
        let user = auth.current_user().ok_or(AuthError::NotAuthenticated)?;
        Ok(user.id)
    }

    async fn simulate(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Starts (or restarts) the idle supervisor and arranges the forced
    /// logout when it times out.
    ///
    /// The watcher task holds only a weak reference to the client state,
    /// so an abandoned client winds down instead of keeping itself alive
    /// through its own watcher.
    async fn start_idle_watch(&self) {
        let (handle, timed_out) =
            IdleSupervisor::spawn(self.inner.idle_config, self.inner.activity.clone());

        // A replaced supervisor (repeat login) is shut down, not leaked.
        let previous = self.inner.idle.lock().await.replace(handle);
        if let Some(previous) = previous {
            previous.shutdown().await;
        }

        let state = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            // Err means the supervisor shut down without a timeout;
            // nothing to do then.
            if let Ok(timeout) = timed_out.await {
                if let Some(inner) = state.upgrade() {
                    info!(
                        idle_secs = timeout.idle_for.as_secs(),
                        "inactivity threshold crossed, signing out"
                    );
                    Client { inner }.logout().await;
                }
            }
        });
    }
}
