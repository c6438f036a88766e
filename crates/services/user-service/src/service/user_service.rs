//! User service - Handles user-related business logic.
//!
//! Turns the repository's absent-value results into `AppError::NotFound`
//! and applies presence checks to caller input.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::{AppResult, OptionExt};
use domain::{validate_new_user, DomainError, User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user (name and email must be non-blank)
    async fn create_user(&self, name: String, email: String) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Permanently delete user
    async fn delete_user(&self, id: UserId) -> AppResult<()>;

    /// Number of stored users
    async fn user_count(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, name: String, email: String) -> AppResult<User> {
        validate_new_user(&name, &email)?;

        let user = self.repo.create(name, email)?;
        info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        debug!(user_id = id, "Fetching user");
        self.repo.find_by_id(id).ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.list())
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        if !self.repo.delete(id) {
            return Err(DomainError::not_found(format!("User {}", id)).into());
        }

        info!(user_id = id, "Deleted user");
        Ok(())
    }

    async fn user_count(&self) -> AppResult<usize> {
        Ok(self.repo.count())
    }
}
