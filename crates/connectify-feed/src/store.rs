//! The in-memory entity store: users, posts, comments, and the vote model.
//!
//! One [`FeedStore`] is the single authority for all feed data in the
//! process. Higher layers own it behind a lock and route every mutation
//! through these methods; there are no module-level globals. Collections
//! reset when the process restarts — only the session token outlives a
//! reload, and that lives in the session store, not here.

use std::collections::HashMap;

use chrono::Utc;
use connectify_token::UserId;

use crate::models::{
    Comment, CommentId, LeaderboardEntry, NewUser, Post, PostId, ProfileUpdate, User,
};
use crate::FeedError;

/// How much one vote moves a post's like score.
///
/// Votes count in tens, not ones. The scale is shared with the points
/// leaderboard, where seeded accounts hold four-digit totals.
pub const VOTE_WEIGHT: u32 = 10;

/// The password every account accepts.
///
/// A mock backend has no real credential check: any known email paired
/// with this string logs in, and accounts created through signup never
/// store the password they chose.
pub const MOCK_PASSWORD: &str = "password123";

/// Avatar assigned to accounts created through signup, and to profiles
/// rebuilt from bare token claims when a session is restored.
pub const STOCK_AVATAR: &str =
    "https://images.pexels.com/photos/771742/pexels-photo-771742.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop";

/// Bio assigned to accounts created through signup.
const STOCK_BIO: &str = "New to Connectify! 👋";

/// The authoritative in-memory collections.
///
/// Posts are kept most-recent-first; comments live inside their posts in
/// insertion order. Ids are minted from store-owned counters, never from
/// globals.
pub struct FeedStore {
    users: Vec<User>,
    posts: Vec<Post>,
    /// Leaderboard points by user id. Only seeded accounts have an entry;
    /// accounts created at runtime stay off the board.
    points: HashMap<UserId, u32>,
    next_user_id: u64,
    next_post_id: u64,
    next_comment_id: u64,
}

impl FeedStore {
    /// Creates an empty store. Most callers want [`FeedStore::seeded`].
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            posts: Vec::new(),
            points: HashMap::new(),
            next_user_id: 1,
            next_post_id: 1,
            next_comment_id: 1,
        }
    }

    pub(crate) fn from_parts(
        users: Vec<User>,
        posts: Vec<Post>,
        points: HashMap<UserId, u32>,
    ) -> Self {
        let next_user_id = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        let next_post_id = posts.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let next_comment_id = posts
            .iter()
            .flat_map(|p| p.comments.iter())
            .map(|c| c.id.0)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            users,
            posts,
            points,
            next_user_id,
            next_post_id,
            next_comment_id,
        }
    }

    // -----------------------------------------------------------------------
    // Users
    // -----------------------------------------------------------------------

    /// Looks up a user by email.
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Looks up a user by id.
    pub fn find_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Looks up a user by username.
    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Checks a credential pair against the store.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&User, FeedError> {
        let user = self
            .find_user_by_email(email)
            .ok_or(FeedError::InvalidCredentials)?;
        if password != MOCK_PASSWORD {
            return Err(FeedError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Inserts a new account with a freshly minted id.
    ///
    /// Fails if the email or username is already in use; nothing is
    /// inserted on failure. New accounts get the stock avatar and bio and
    /// start unverified.
    pub fn create_user(&mut self, candidate: NewUser) -> Result<User, FeedError> {
        if self.find_user_by_email(&candidate.email).is_some() {
            return Err(FeedError::EmailTaken(candidate.email));
        }
        if self.find_user_by_username(&candidate.username).is_some() {
            return Err(FeedError::UsernameTaken(candidate.username));
        }

        let id = UserId(self.next_user_id);
        self.next_user_id += 1;

        let user = User {
            id,
            username: candidate.username,
            email: candidate.email,
            avatar: STOCK_AVATAR.to_string(),
            bio: Some(STOCK_BIO.to_string()),
            verified: false,
            created_at: Utc::now(),
        };
        self.users.push(user.clone());
        tracing::info!(%id, username = %user.username, "user created");
        Ok(user)
    }

    /// Applies a profile edit and re-syncs every denormalized copy.
    ///
    /// The new username must not belong to a *different* account (keeping
    /// your own is fine). After this returns, every post and comment
    /// authored by `user_id` shows the new username and avatar.
    pub fn update_user_profile(
        &mut self,
        user_id: UserId,
        profile: ProfileUpdate,
    ) -> Result<User, FeedError> {
        let idx = self
            .users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or(FeedError::UserNotFound(user_id))?;
        if self
            .users
            .iter()
            .any(|u| u.username == profile.username && u.id != user_id)
        {
            return Err(FeedError::UsernameTaken(profile.username));
        }

        let user = &mut self.users[idx];
        user.username = profile.username;
        user.bio = profile.bio;
        user.avatar = profile.avatar;
        let updated = user.clone();

        let mut synced = 0usize;
        for post in &mut self.posts {
            if post.author_id == user_id {
                post.username = updated.username.clone();
                post.avatar = updated.avatar.clone();
                synced += 1;
            }
            for comment in &mut post.comments {
                if comment.author_id == user_id {
                    comment.username = updated.username.clone();
                    comment.avatar = updated.avatar.clone();
                    synced += 1;
                }
            }
        }
        tracing::debug!(%user_id, synced, "profile edit propagated");
        Ok(updated)
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // -----------------------------------------------------------------------
    // Posts
    // -----------------------------------------------------------------------

    /// The full feed, most-recent-first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Looks up a post by id.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// All posts authored by one user, most-recent-first.
    pub fn user_posts(&self, user_id: UserId) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.author_id == user_id)
            .cloned()
            .collect()
    }

    /// Number of posts in the feed.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    fn post_mut(&mut self, id: PostId) -> Result<&mut Post, FeedError> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(FeedError::PostNotFound(id))
    }

    /// Inserts a new post at the head of the feed.
    ///
    /// The author's username, avatar, and verified flag are snapshotted
    /// onto the post. New posts start with no likes, no comments, and no
    /// shares.
    pub fn create_post(
        &mut self,
        author_id: UserId,
        content: String,
        image: Option<String>,
    ) -> Result<Post, FeedError> {
        let author = self
            .find_user_by_id(author_id)
            .ok_or(FeedError::UserNotFound(author_id))?;
        let (username, avatar, verified) = (
            author.username.clone(),
            author.avatar.clone(),
            author.verified,
        );

        let id = PostId(self.next_post_id);
        self.next_post_id += 1;

        let post = Post {
            id,
            author_id,
            username,
            avatar,
            verified,
            content,
            image,
            likes: 0,
            liked: false,
            comments: Vec::new(),
            shares: 0,
            created_at: Utc::now(),
            updated_at: None,
        };
        // Newest first.
        self.posts.insert(0, post.clone());
        tracing::debug!(%id, %author_id, "post created");
        Ok(post)
    }

    /// Rewrites a post's content, and optionally its image.
    ///
    /// Only the author may edit. Passing `image: None` keeps the current
    /// image; an image cannot be detached once attached.
    pub fn update_post(
        &mut self,
        post_id: PostId,
        editor: UserId,
        content: String,
        image: Option<String>,
    ) -> Result<Post, FeedError> {
        let post = self.post_mut(post_id)?;
        if post.author_id != editor {
            return Err(FeedError::NotPostAuthor(post_id, editor));
        }
        post.content = content;
        if let Some(image) = image {
            post.image = Some(image);
        }
        post.updated_at = Some(Utc::now());
        Ok(post.clone())
    }

    /// Removes a post and the comments nested in it.
    ///
    /// Only the author may delete.
    pub fn delete_post(&mut self, post_id: PostId, editor: UserId) -> Result<(), FeedError> {
        let idx = self
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or(FeedError::PostNotFound(post_id))?;
        if self.posts[idx].author_id != editor {
            return Err(FeedError::NotPostAuthor(post_id, editor));
        }
        self.posts.remove(idx);
        tracing::debug!(%post_id, "post deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Votes
    // -----------------------------------------------------------------------

    /// Marks a post as voted and adds [`VOTE_WEIGHT`] to its score.
    /// Returns the updated view.
    ///
    /// Voting an already-voted post is a no-op: `liked` and `likes` always
    /// move together, so repeated calls cannot inflate the score.
    pub fn vote(&mut self, post_id: PostId) -> Result<Post, FeedError> {
        let post = self.post_mut(post_id)?;
        if !post.liked {
            post.liked = true;
            post.likes += VOTE_WEIGHT;
        }
        Ok(post.clone())
    }

    /// Clears the vote and takes [`VOTE_WEIGHT`] back off the score.
    /// Returns the updated view.
    ///
    /// A no-op when the post is not currently voted.
    pub fn unvote(&mut self, post_id: PostId) -> Result<Post, FeedError> {
        let post = self.post_mut(post_id)?;
        if post.liked {
            post.liked = false;
            post.likes = post.likes.saturating_sub(VOTE_WEIGHT);
        }
        Ok(post.clone())
    }

    // -----------------------------------------------------------------------
    // Comments
    // -----------------------------------------------------------------------

    /// Looks up a comment anywhere in the feed.
    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.posts
            .iter()
            .flat_map(|p| p.comments.iter())
            .find(|c| c.id == id)
    }

    /// Appends a comment to a post.
    ///
    /// The author's username and avatar are snapshotted onto the comment,
    /// the same way post creation snapshots them.
    pub fn add_comment(
        &mut self,
        post_id: PostId,
        content: String,
        author_id: UserId,
    ) -> Result<Comment, FeedError> {
        let author = self
            .find_user_by_id(author_id)
            .ok_or(FeedError::UserNotFound(author_id))?;
        let (username, avatar) = (author.username.clone(), author.avatar.clone());

        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(FeedError::PostNotFound(post_id))?;

        let comment = Comment {
            id: CommentId(self.next_comment_id),
            post_id,
            author_id,
            username,
            avatar,
            content,
            likes: 0,
            liked: false,
            created_at: Utc::now(),
        };
        post.comments.push(comment.clone());
        self.next_comment_id += 1;
        Ok(comment)
    }

    /// Rewrites a comment's text.
    pub fn edit_comment(
        &mut self,
        comment_id: CommentId,
        content: String,
    ) -> Result<Comment, FeedError> {
        let comment = self
            .posts
            .iter_mut()
            .flat_map(|p| p.comments.iter_mut())
            .find(|c| c.id == comment_id)
            .ok_or(FeedError::CommentNotFound(comment_id))?;
        comment.content = content;
        Ok(comment.clone())
    }

    /// Removes a comment from its post.
    pub fn delete_comment(&mut self, comment_id: CommentId) -> Result<(), FeedError> {
        for post in &mut self.posts {
            if let Some(idx) = post.comments.iter().position(|c| c.id == comment_id) {
                post.comments.remove(idx);
                return Ok(());
            }
        }
        Err(FeedError::CommentNotFound(comment_id))
    }

    // -----------------------------------------------------------------------
    // Leaderboard
    // -----------------------------------------------------------------------

    /// Points held by a user; zero if they are not on the board.
    pub fn user_points(&self, user_id: UserId) -> u32 {
        self.points.get(&user_id).copied().unwrap_or(0)
    }

    /// The top `limit` users by points, highest first.
    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .users
            .iter()
            .filter_map(|user| {
                self.points.get(&user.id).map(|&points| LeaderboardEntry {
                    user: user.clone(),
                    points,
                })
            })
            .collect();
        entries.sort_by(|a, b| b.points.cmp(&a.points));
        entries.truncate(limit);
        entries
    }
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::new()
    }
}
