//! Business logic services for the application layer.

pub mod role_service;
pub mod user_service;

pub use role_service::RoleService;
pub use user_service::UserService;
