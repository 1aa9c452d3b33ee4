//! Repository trait for roles.

use crate::domain::entities::{NewRole, Role};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for roles.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRoleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Lists every role ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn list(&self) -> Result<Vec<Role>, AppError>;

    /// Inserts a role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors, including a
    /// duplicate name.
    async fn create(&self, new_role: NewRole) -> Result<Role, AppError>;
}
