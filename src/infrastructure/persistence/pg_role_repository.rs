//! PostgreSQL implementation of the role repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRole, Role};
use crate::domain::repositories::RoleRepository;
use crate::error::AppError;

/// PostgreSQL repository for roles.
pub struct PgRoleRepository {
    pool: Arc<PgPool>,
}

impl PgRoleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RoleRow {
    id: i32,
    name: String,
    description: Option<String>,
}

impl From<RoleRow> for Role {
    fn from(r: RoleRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
        }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn list(&self) -> Result<Vec<Role>, AppError> {
        let rows =
            sqlx::query_as::<_, RoleRow>("SELECT id, name, description FROM roles ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn create(&self, new_role: NewRole) -> Result<Role, AppError> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            INSERT INTO roles (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(new_role.name)
        .bind(new_role.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
