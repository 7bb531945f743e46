//! Core domain models shared across all Clubhouse crates.
//!
//! These are the "truth" types — what the database stores and callers pass
//! around. Identifiers are positive `i64` keys assigned by the store.

pub mod club;
pub mod event;
pub mod role;
pub mod user;

/// Re-export all model types for convenience.
pub use club::*;
pub use event::*;
pub use role::*;
pub use user::*;
