//! # clubhouse-core
//!
//! The leadership succession workflow and the async authorization wrapper.
//! Both operate over a narrow user-store collaborator; persistence itself
//! lives in `clubhouse-db`. Callers are expected to run the relevant
//! permission check (see `clubhouse_common::permissions`) before invoking any
//! mutating operation here — the workflows do not re-check authorization.

pub mod authorizer;
pub mod leadership;
pub mod store;

pub use authorizer::{AuthAction, Authorizer};
pub use leadership::LeadershipCoordinator;
pub use store::{MemoryUserStore, UserStore};
