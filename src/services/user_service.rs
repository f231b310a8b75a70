//! Domain service for managing user records.
//!
//! Validation, uniqueness and lifecycle rules live here; the HTTP layer only
//! translates [`UserError`] into status codes.

use crate::models::{User, UserPayload};
use crate::store::Conflict;
use thiserror::Error;

/// Errors specific to user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User {0} not found")]
    NotFound(i64),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<Conflict> for UserError {
    fn from(conflict: Conflict) -> Self {
        Self::Conflict(conflict.to_string())
    }
}

/// Domain service trait for users.
#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Lists every user in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Gets a single user by id.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if no record has this id.
    async fn get_user(&self, id: i64) -> Result<User, UserError>;

    /// Validates the payload and appends a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Validation`] for blank fields or a malformed email.
    /// Returns [`UserError::Conflict`] if the username or email is taken.
    async fn create_user(&self, payload: UserPayload) -> Result<User, UserError>;

    /// Replaces the username, email and full name of an existing user.
    ///
    /// The user being updated does not conflict with itself.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if no record has this id, otherwise
    /// the same errors as [`UserService::create_user`].
    async fn update_user(&self, id: i64, payload: UserPayload) -> Result<User, UserError>;

    /// Removes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if no record has this id.
    async fn delete_user(&self, id: i64) -> Result<(), UserError>;

    /// Whether the backing store can serve requests.
    async fn is_ready(&self) -> bool;
}
