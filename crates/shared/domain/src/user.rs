//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::is_present;
use crate::error::{DomainError, DomainResult};

/// User identifier assigned by the store
pub type UserId = i64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user stamped with the current time
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User{{id={}, name='{}', email='{}', created_at={}}}",
            self.id,
            self.name,
            self.email,
            self.created_at.to_rfc3339()
        )
    }
}

/// Presence check for caller-supplied user fields.
pub fn validate_new_user(name: &str, email: &str) -> DomainResult<()> {
    if !is_present(name) {
        return Err(DomainError::validation("Name cannot be empty"));
    }
    if !is_present(email) {
        return Err(DomainError::validation("Email cannot be empty"));
    }
    Ok(())
}
