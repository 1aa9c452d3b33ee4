//! Role service.

use crate::domain::entities::{NewRole, Role};
use crate::domain::repositories::RoleRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Maximum role name length, matching the `roles.name` column.
const MAX_ROLE_NAME_LEN: usize = 50;

/// Service for reading roles and creating them from the admin CLI.
pub struct RoleService {
    repository: Arc<dyn RoleRepository>,
}

impl RoleService {
    /// Creates a new role service.
    pub fn new(repository: Arc<dyn RoleRepository>) -> Self {
        Self { repository }
    }

    /// Lists all roles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        self.repository.list().await
    }

    /// Creates a role after validating its name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or too long.
    /// Returns [`AppError::Persistence`] on database errors, including a
    /// duplicate name.
    pub async fn create_role(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Role, AppError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_ROLE_NAME_LEN {
            return Err(AppError::bad_request(
                "Invalid role name length",
                json!({"min": 1, "max": MAX_ROLE_NAME_LEN}),
            ));
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        self.repository
            .create(NewRole {
                name: name.to_string(),
                description,
            })
            .await
    }
}
