//! Durable key-value storage for Connectify sessions.
//!
//! Provides the [`KeyValueMedium`] trait that abstracts over wherever the
//! session actually lives (an in-memory map, a file standing in for
//! browser local storage), and the [`SessionStore`] adapter that owns the
//! two well-known keys everything else reads.
//!
//! # Architecture
//!
//! The medium is the external seam: the rest of the system never touches
//! keys directly, it goes through [`SessionStore`], which turns medium
//! failures into "no stored session" instead of surfacing them.
//!
//! ```text
//! Session manager / idle supervisor → SessionStore (fixed keys, degrade)
//!                                        → KeyValueMedium (get/set/remove)
//! ```

mod error;
mod file;
mod memory;
mod session;

pub use error::StorageError;
pub use file::FileMedium;
pub use memory::MemoryMedium;
pub use session::{LAST_ACTIVITY_KEY, SessionStore, TOKEN_KEY};

/// A durable, synchronous key-value medium holding string values.
///
/// Implementations are handles: cloning shares the underlying storage, and
/// all methods take `&self` so a medium can be handed to several components
/// (the session manager and the idle supervisor both touch it).
///
/// ## Trait bounds explained
///
/// - `Send + Sync` → safe to share between threads (the supervisor task
///   may run on any thread in Tokio's pool).
/// - `'static` → the medium owns everything it needs; it doesn't borrow
///   temporary data. Required for types held by long-lived tasks.
///
/// The associated `Error` keeps each medium honest about its own failure
/// modes ([`MemoryMedium`] cannot fail, [`FileMedium`] can hit I/O errors)
/// while callers above the adapter never see either.
pub trait KeyValueMedium: Send + Sync + 'static {
    /// The error type for medium operations.
    type Error: std::error::Error + Send + Sync;

    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Removes the value stored under `key`. Removing an absent key is
    /// not an error.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}
