//! User management service.

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for reading and mutating user records.
///
/// Normalizes names and emails before they reach the store; everything else
/// is delegated to the repository, whose errors are passed through untouched
/// so handlers can tell persistence failures apart.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn find_user(&self, id: i32) -> Result<Option<User>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors, including a
    /// duplicate email.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user.normalized()).await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Applies a partial update. Returns `None` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn update_user(&self, update: UserUpdate) -> Result<Option<User>, AppError> {
        let updated = self.repository.update(update.normalized()).await?;
        if let Some(user) = &updated {
            tracing::info!(user_id = user.id, "user updated");
        }
        Ok(updated)
    }

    /// Deletes a user. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn delete_user(&self, id: i32) -> Result<bool, AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            tracing::info!(user_id = id, "user deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;
    use serde_json::json;

    fn create_test_user(id: i32, email: &str) -> User {
        User {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            user_type: None,
            last_modified: Utc::now(),
            dob: None,
            gender: None,
            is_deleted: false,
        }
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            user_type: None,
            dob: None,
            gender: None,
            is_deleted: false,
        }
    }

    #[tokio::test]
    async fn test_create_user_normalizes_input() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|u| u.first_name == "Ada" && u.email == "ada@example.com")
            .times(1)
            .returning(|u| Ok(create_test_user(1, &u.email)));

        let service = UserService::new(Arc::new(mock_repo));

        let user = service
            .create_user(new_user("  ADA@example.com"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_create_user_persistence_error_passes_through() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::persistence("Unique constraint violation", json!({}))));

        let service = UserService::new(Arc::new(mock_repo));

        let err = service
            .create_user(new_user("dup@example.com"))
            .await
            .unwrap_err();

        assert!(err.is_persistence());
    }

    #[tokio::test]
    async fn test_find_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.find_user(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_user_missing_row() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_update()
            .withf(|u| u.id == 5 && u.email.as_deref() == Some("new@example.com"))
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .update_user(UserUpdate {
                id: 5,
                email: Some("NEW@example.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(true));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.delete_user(3).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut mock_repo = MockUserRepository::new();

        let users = vec![
            create_test_user(1, "a@example.com"),
            create_test_user(2, "b@example.com"),
        ];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(users.clone()));

        let service = UserService::new(Arc::new(mock_repo));

        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }
}
