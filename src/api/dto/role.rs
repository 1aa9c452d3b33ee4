//! DTOs for role endpoints.

use serde::Serialize;

use crate::domain::entities::Role;

/// Wire shape of a role.
#[derive(Debug, Clone, Serialize)]
pub struct RoleItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<Role> for RoleItem {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
        }
    }
}
