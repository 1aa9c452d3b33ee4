//! Role entity.

/// A role users can be classified under.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Input data for creating a role (admin CLI only).
#[derive(Debug, Clone)]
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
}
