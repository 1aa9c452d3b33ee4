//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! runtime-checked queries mapped through `FromRow` row structs.
//!
//! - [`PgUserRepository`] - User storage and retrieval
//! - [`PgRoleRepository`] - Role storage and retrieval

pub mod pg_role_repository;
pub mod pg_user_repository;

pub use pg_role_repository::PgRoleRepository;
pub use pg_user_repository::PgUserRepository;
