//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for users.
///
/// `last_modified` is maintained by the queries themselves; deletes are hard
/// deletes.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
    user_type: Option<String>,
    last_modified: DateTime<Utc>,
    dob: Option<NaiveDate>,
    gender: Option<String>,
    is_deleted: bool,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        Self {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            user_type: r.user_type,
            last_modified: r.last_modified,
            dob: r.dob,
            gender: r.gender,
            is_deleted: r.is_deleted,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, user_type, last_modified, dob, gender, is_deleted
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, user_type, last_modified, dob, gender, is_deleted
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (first_name, last_name, email, user_type, dob, gender, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, user_type, last_modified, dob, gender, is_deleted
            "#,
        )
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .bind(new_user.email)
        .bind(new_user.user_type)
        .bind(new_user.dob)
        .bind(new_user.gender)
        .bind(new_user.is_deleted)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, update: UserUpdate) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                first_name    = COALESCE($2::TEXT, first_name),
                last_name     = COALESCE($3::TEXT, last_name),
                email         = COALESCE($4::TEXT, email),
                user_type     = COALESCE($5::TEXT, user_type),
                dob           = COALESCE($6::DATE, dob),
                gender        = COALESCE($7::TEXT, gender),
                is_deleted    = COALESCE($8::BOOLEAN, is_deleted),
                last_modified = NOW()
            WHERE id = $1
            RETURNING id, first_name, last_name, email, user_type, last_modified, dob, gender, is_deleted
            "#,
        )
        .bind(update.id)
        .bind(update.first_name)
        .bind(update.last_name)
        .bind(update.email)
        .bind(update.user_type)
        .bind(update.dob)
        .bind(update.gender)
        .bind(update.is_deleted)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
