//! Application state for dependency injection.

use std::sync::Arc;

use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create new app state with an injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create app state backed by the given in-memory store.
    pub fn from_store(store: Arc<UserStore>) -> Self {
        Self::new(Arc::new(UserManager::new(store)))
    }
}
