//! The entities held by the feed store.
//!
//! Posts and comments carry *denormalized* copies of their author's
//! username and avatar, snapshotted at creation time so a feed renders
//! without a join. Those copies go stale when the author edits their
//! profile; the store's profile-update operation re-syncs them.

use chrono::{DateTime, Utc};
use connectify_token::UserId;
use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Ids
// ---------------------------------------------------------------------------

/// A unique identifier for a post.
///
/// Same newtype pattern as [`UserId`]: serializes as the bare number,
/// displays with a type prefix (`p-3`) in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p-{}", self.0)
    }
}

/// A unique identifier for a comment. Displays as `c-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A registered account.
///
/// `id`, `username`, and `email` are each unique across the store. Users
/// are never deleted; a profile edit may change `username`, `bio`, and
/// `avatar` but nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Image URL shown next to the user's name.
    pub avatar: String,
    pub bio: Option<String>,
    /// Whether the account carries a verified badge.
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// A feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    /// The user who wrote the post.
    pub author_id: UserId,
    /// Denormalized from the author; re-synced on profile edits.
    pub username: String,
    /// Denormalized from the author; re-synced on profile edits.
    pub avatar: String,
    /// Denormalized from the author at creation time.
    pub verified: bool,
    pub content: String,
    /// Optional attached image URL.
    pub image: Option<String>,
    /// Like score. Votes move this in fixed steps of `VOTE_WEIGHT`.
    pub likes: u32,
    /// Whether this client has voted on the post. Moves together with
    /// `likes`, never independently.
    pub liked: bool,
    /// Comments in insertion order. A comment lives inside its post and
    /// cannot outlive it.
    pub comments: Vec<Comment>,
    pub shares: u32,
    pub created_at: DateTime<Utc>,
    /// Set on the first edit; `None` for never-edited posts.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    /// Back-reference to the post this comment sits under.
    pub post_id: PostId,
    pub author_id: UserId,
    /// Denormalized from the author; re-synced on profile edits.
    pub username: String,
    /// Denormalized from the author; re-synced on profile edits.
    pub avatar: String,
    pub content: String,
    pub likes: u32,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Operation inputs
// ---------------------------------------------------------------------------

/// Caller-supplied fields for a new account.
///
/// Everything else on [`User`] — id, avatar, bio, verified flag, creation
/// time — is filled in by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// The editable slice of a profile.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub username: String,
    pub bio: Option<String>,
    pub avatar: String,
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// One row of the points leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user: User,
    pub points: u32,
}
