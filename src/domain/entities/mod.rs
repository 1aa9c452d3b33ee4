//! Core domain entities.
//!
//! Entities are plain data structures; serialization shapes live in
//! [`crate::api::dto`].
//!
//! - [`User`] - A user record, with [`NewUser`] for creation and [`UserUpdate`]
//!   for partial updates
//! - [`Role`] - A role record, with [`NewRole`] for creation

pub mod role;
pub mod user;

pub use role::{NewRole, Role};
pub use user::{NewUser, User, UserUpdate};
