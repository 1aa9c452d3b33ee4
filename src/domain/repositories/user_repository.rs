//! Repository trait for user records.

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists every user ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Inserts a new user and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors, including a
    /// duplicate email.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Applies a partial update.
    ///
    /// Returns `None` when no user has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn update(&self, update: UserUpdate) -> Result<Option<User>, AppError>;

    /// Removes a user. Returns `false` when nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
