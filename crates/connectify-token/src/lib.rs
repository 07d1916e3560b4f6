//! Session tokens for Connectify.
//!
//! This crate defines the identity "language" the rest of the system
//! speaks:
//!
//! - **Types** ([`UserId`], [`Claims`]) — who a session belongs to and
//!   when it was issued / when it expires.
//! - **Codec** ([`TokenCodec`]) — how a claim set becomes an opaque
//!   token string and back.
//! - **Errors** ([`TokenError`]) — what can go wrong during decoding.
//!
//! # Architecture
//!
//! The token layer is a leaf: it knows nothing about storage, timers, or
//! the feed. It is a pure function of its inputs and the clock.
//!
//! ```text
//! Session manager (lifecycle) → Token codec (claims ⇄ string) → Store (bytes)
//! ```
//!
//! # Security model
//!
//! Tokens are **not** cryptographically signed. Anyone holding the
//! encoding scheme can mint or alter one. That is an accepted limitation
//! of this single-origin mock client, not an oversight: treat the token
//! as a capability only safe in non-adversarial contexts.

mod claims;
mod codec;
mod error;

pub use claims::{Claims, UserId};
pub use codec::TokenCodec;
pub use error::TokenError;
