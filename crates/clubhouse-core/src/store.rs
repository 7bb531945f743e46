//! The user-store collaborator boundary.
//!
//! The workflows in this crate touch persistence only through [`UserStore`].
//! `clubhouse-db` provides the SQLite-backed implementation;
//! [`MemoryUserStore`] backs tests and in-process embedding.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

use clubhouse_common::error::ClubResult;
use clubhouse_common::models::{Role, User};

/// Narrow persistence interface consumed by the leadership coordinator and
/// the authorizer.
#[allow(async_fn_in_trait)]
pub trait UserStore {
    /// Load a user by id.
    async fn find_by_id(&self, id: i64) -> ClubResult<Option<User>>;

    /// The club's current Chairman, if one exists.
    async fn find_chairman(&self, club_id: i64) -> ClubResult<Option<User>>;

    /// Whether a club with this id exists.
    async fn club_exists(&self, club_id: i64) -> ClubResult<bool>;

    /// Persist a user's mutated fields.
    async fn save(&self, user: &User) -> ClubResult<()>;

    /// Persist several users atomically: either all rows land or none do.
    /// The Chairman swap relies on this to never expose a two-Chairman state.
    async fn save_batch(&self, users: &[User]) -> ClubResult<()>;
}

/// In-memory store. Every operation takes the single lock, so `save_batch`
/// is atomic with respect to concurrent readers.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<i64, User>,
    clubs: HashSet<i64>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: User) {
        self.lock().users.insert(user.id, user);
    }

    pub fn insert_club(&self, club_id: i64) {
        self.lock().clubs.insert(club_id);
    }

    /// Snapshot of a user record, for assertions and read-backs.
    pub fn user(&self, id: i64) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    /// Users of a club currently holding the given role.
    pub fn club_members_with_role(&self, club_id: i64, role: Role) -> Vec<User> {
        self.lock()
            .users
            .values()
            .filter(|u| u.club_id == Some(club_id) && u.role == role)
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> ClubResult<Option<User>> {
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn find_chairman(&self, club_id: i64) -> ClubResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .values()
            .find(|u| u.club_id == Some(club_id) && u.role == Role::Chairman)
            .cloned())
    }

    async fn club_exists(&self, club_id: i64) -> ClubResult<bool> {
        Ok(self.lock().clubs.contains(&club_id))
    }

    async fn save(&self, user: &User) -> ClubResult<()> {
        self.lock().users.insert(user.id, user.clone());
        Ok(())
    }

    async fn save_batch(&self, users: &[User]) -> ClubResult<()> {
        let mut inner = self.lock();
        for user in users {
            inner.users.insert(user.id, user.clone());
        }
        Ok(())
    }
}
