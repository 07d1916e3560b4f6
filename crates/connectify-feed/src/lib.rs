//! The in-memory data layer for Connectify: users, posts, comments,
//! votes, and the points leaderboard.
//!
//! Everything here is mock data — collections live in process memory,
//! reset on restart, and every account accepts one shared password. The
//! substance is in the semantics: unique ids, emails, and usernames;
//! denormalized author copies that re-sync on profile edits; and an
//! idempotent vote model where `liked` and `likes` move together.
//!
//! # Key types
//!
//! - [`FeedStore`] — owns every collection; all mutations go through it
//! - [`User`], [`Post`], [`Comment`] — the entities
//! - [`FeedError`] — typed failures for lookups, credentials, uniqueness
//!
//! The store is synchronous. Simulated network latency is layered on top
//! by the client facade, not here.

mod error;
mod models;
mod seed;
mod store;

pub use connectify_token::UserId;
pub use error::FeedError;
pub use models::{
    Comment, CommentId, LeaderboardEntry, NewUser, Post, PostId, ProfileUpdate, User,
};
pub use store::{FeedStore, MOCK_PASSWORD, STOCK_AVATAR, VOTE_WEIGHT};
