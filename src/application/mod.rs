//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::user_service::UserService`] - User CRUD
//! - [`services::role_service::RoleService`] - Role listing and creation

pub mod services;
