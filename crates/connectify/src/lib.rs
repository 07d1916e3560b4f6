//! # Connectify
//!
//! A self-contained social feed client core: token-based sessions,
//! inactivity logout, and a seeded in-memory backend with simulated
//! latency, all behind one async facade.
//!
//! The stack, bottom to top:
//!
//! - `connectify-token` — self-describing session tokens (claims,
//!   base64 codec, expiry).
//! - `connectify-storage` — the key/value persistence media and the
//!   typed session store (token + activity marker).
//! - `connectify-feed` — users, posts, comments, votes, and the
//!   leaderboard, plus the seeded dataset.
//! - `connectify-idle` — the inactivity supervisor that sweeps the
//!   activity marker.
//! - `connectify-session` — the auth state machine gluing tokens to
//!   storage.
//!
//! This crate ties them together as [`Client`]: a cloneable handle that
//! serializes store access, sleeps off per-tier latency before each
//! operation, and force-logs-out sessions that go idle.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use connectify::prelude::*;
//!
//! # async fn run() -> Result<(), ConnectifyError> {
//! let client = ClientBuilder::new().build();
//! client.bootstrap().await;
//!
//! let session = client.login("taha@connectify.com", MOCK_PASSWORD).await?;
//! println!("signed in as {}", session.user.username);
//!
//! for post in client.posts().await {
//!     println!("{}: {}", post.username, post.content);
//! }
//!
//! client.logout().await;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod latency;

pub use client::{Client, ClientBuilder};
pub use error::ConnectifyError;
pub use latency::LatencyProfile;

/// Everything an embedder usually needs, in one import.
pub mod prelude {
    pub use crate::{Client, ClientBuilder, ConnectifyError, LatencyProfile};

    pub use connectify_feed::{
        Comment, CommentId, FeedError, FeedStore, LeaderboardEntry, MOCK_PASSWORD, Post, PostId,
        ProfileUpdate, User, UserId, VOTE_WEIGHT,
    };
    pub use connectify_idle::{ActivitySignal, IdleConfig};
    pub use connectify_session::{AuthError, AuthState, Session, SessionConfig};
    pub use connectify_storage::{FileMedium, KeyValueMedium, MemoryMedium, SessionStore};
}
