//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! - [`UserRepository`] - User CRUD
//! - [`RoleRepository`] - Role listing and creation

pub mod role_repository;
pub mod user_repository;

pub use role_repository::RoleRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use role_repository::MockRoleRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
