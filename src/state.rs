//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{RoleService, UserService};
use crate::domain::repositories::{RoleRepository, UserRepository};

/// Services handed to handlers. Cloned per request; the services themselves
/// are shared.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub role_service: Arc<RoleService>,
}

impl AppState {
    /// Wires services on top of the given repositories.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        role_repository: Arc<dyn RoleRepository>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            role_service: Arc::new(RoleService::new(role_repository)),
        }
    }
}
