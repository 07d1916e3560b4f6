//! Error types for the feed store.

use connectify_token::UserId;

use crate::models::{CommentId, PostId};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The email/password pair did not match an account. The same error
    /// covers an unknown email and a wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Another account already uses this email.
    #[error("email {0} is already registered")]
    EmailTaken(String),

    /// Another account already uses this username.
    #[error("username {0} is already taken")]
    UsernameTaken(String),

    /// No user with this id.
    #[error("user {0} not found")]
    UserNotFound(UserId),

    /// No post with this id.
    #[error("post {0} not found")]
    PostNotFound(PostId),

    /// No comment with this id, on any post.
    #[error("comment {0} not found")]
    CommentNotFound(CommentId),

    /// Posts can only be edited or deleted by their author.
    #[error("user {1} is not the author of post {0}")]
    NotPostAuthor(PostId, UserId),
}
