//! Auth session lifecycle for Connectify.
//!
//! This crate owns the path from "app starts" to "user is signed in (or
//! not)":
//!
//! 1. **Restore** — resolving a stored token into a live session at
//!    startup ([`AuthSessionManager::bootstrap`])
//! 2. **Credentials** — login and signup against the entity store
//! 3. **Teardown** — logout, whether the user asked for it or the idle
//!    supervisor forced it
//!
//! # How it fits in the stack
//!
//! ```text
//! Client facade (above)  ← calls login/logout, reacts to state changes
//!     ↕
//! Session layer (this crate)  ← owns AuthState and the stored token
//!     ↕
//! Token codec + session store (below)  ← encode claims, persist the token
//! ```
//!
//! The entity store sits *beside* this crate rather than below it:
//! operations that need user records borrow a
//! [`FeedStore`](connectify_feed::FeedStore) for the duration of the call
//! instead of owning one.

mod error;
mod manager;
mod session;

pub use error::AuthError;
pub use manager::AuthSessionManager;
pub use session::{AuthState, Session, SessionConfig};
