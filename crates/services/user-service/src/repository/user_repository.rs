//! In-memory user repository.
//!
//! `UserStore` owns the id-to-record mapping and the id generator. Every
//! operation is a single atomic transition on that state; callers only ever
//! receive clones of the stored records.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use domain::{DomainError, DomainResult, User, UserId, FIRST_USER_ID};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups report absence with `None`/`false` rather than an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Create a user with the next id (fails only once the id space is used up)
    fn create(&self, name: String, email: String) -> DomainResult<User>;

    /// Find user by ID
    fn find_by_id(&self, id: UserId) -> Option<User>;

    /// Snapshot of all stored users
    fn list(&self) -> Vec<User>;

    /// Remove user by ID, returning whether a record was removed
    fn delete(&self, id: UserId) -> bool;

    /// Number of stored users
    fn count(&self) -> usize;
}

/// Concrete in-memory implementation of UserRepository
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<HashMap<UserId, User>>,
    next_id: AtomicI64,
}

impl UserStore {
    /// Create an empty store whose first id is 1
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(FIRST_USER_ID),
        }
    }

    /// Create a store pre-populated with `(name, email)` pairs, in order.
    pub fn with_users<I, N, E>(users: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<String>,
        E: Into<String>,
    {
        let store = Self::new();
        for (name, email) in users {
            store.create(name.into(), email.into())?;
        }
        Ok(store)
    }

    #[cfg(test)]
    fn with_next_id(next_id: UserId) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(next_id),
        }
    }

    // Every mutation is a single insert/remove, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<UserId, User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<UserId, User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for UserStore {
    fn create(&self, name: String, email: String) -> DomainResult<User> {
        // Allocate under the write lock so ids, timestamps and insertion agree on order.
        let mut users = self.write();
        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(|_| DomainError::internal("user id space exhausted"))?;
        let user = User::new(id, name, email);
        users.insert(id, user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.read().get(&id).cloned()
    }

    fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.read().values().cloned().collect();
        users.sort_by_key(|user| user.id);
        users
    }

    fn delete(&self, id: UserId) -> bool {
        self.write().remove(&id).is_some()
    }

    fn count(&self) -> usize {
        self.read().len()
    }
}
