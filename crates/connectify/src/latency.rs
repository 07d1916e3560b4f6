//! Simulated network latency.
//!
//! The mock backend answers from memory in microseconds, which hides a
//! whole class of UI bugs (spinners that never render, optimistic
//! updates that are never observably "optimistic"). Sleeping for a
//! realistic interval before each operation keeps the facade honest.
//!
//! Delays are grouped into tiers by payload size rather than configured
//! per operation:
//!
//! | tier       | operations                                        |
//! |------------|---------------------------------------------------|
//! | `auth`     | login, signup                                     |
//! | `feed`     | timelines, post writes, profile edit, leaderboard |
//! | `interact` | comments, single-user lookups                     |
//! | `vote`     | vote / unvote toggles                             |

use std::time::Duration;

/// Per-tier artificial delays applied by [`Client`](crate::Client)
/// before each simulated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Credential checks: login and signup.
    pub auth: Duration,
    /// Feed-sized transfers: timelines, post writes, profile edits, the
    /// leaderboard.
    pub feed: Duration,
    /// Small interactions: comments and single-profile lookups.
    pub interact: Duration,
    /// Vote toggles, the snappiest tier.
    pub vote: Duration,
}

impl LatencyProfile {
    /// Default delay for the auth tier.
    pub const DEFAULT_AUTH: Duration = Duration::from_millis(1000);
    /// Default delay for the feed tier.
    pub const DEFAULT_FEED: Duration = Duration::from_millis(500);
    /// Default delay for the interaction tier.
    pub const DEFAULT_INTERACT: Duration = Duration::from_millis(300);
    /// Default delay for the vote tier.
    pub const DEFAULT_VOTE: Duration = Duration::from_millis(200);

    /// No artificial delay on any tier. What most tests want.
    pub fn none() -> Self {
        Self {
            auth: Duration::ZERO,
            feed: Duration::ZERO,
            interact: Duration::ZERO,
            vote: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            auth: Self::DEFAULT_AUTH,
            feed: Self::DEFAULT_FEED,
            interact: Self::DEFAULT_INTERACT,
            vote: Self::DEFAULT_VOTE,
        }
    }
}
