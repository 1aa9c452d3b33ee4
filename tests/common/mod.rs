#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use chrono::{NaiveDate, Utc};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use user_directory::domain::entities::{NewRole, NewUser, Role, User, UserUpdate};
use user_directory::domain::repositories::{RoleRepository, UserRepository};
use user_directory::error::AppError;
use user_directory::routes::api_router;
use user_directory::state::AppState;

/// In-memory stand-in for the users table.
///
/// `fail_reads` / `fail_writes` make the corresponding calls return a
/// persistence error, as a broken database would. `miss_deletes` makes
/// `delete` affect no row, as if another request removed it first.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: Mutex<i32>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    miss_deletes: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn miss_deletes(&self) {
        self.miss_deletes.store(true, Ordering::SeqCst);
    }

    pub fn insert(&self, first_name: &str, last_name: &str, email: &str) -> User {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let user = User {
            id: *next_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            user_type: Some("user".to_string()),
            last_modified: Utc::now(),
            dob: NaiveDate::from_ymd_opt(1990, 5, 17),
            gender: Some("F".to_string()),
            is_deleted: false,
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn get(&self, id: i32) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    fn check(&self, flag: &AtomicBool) -> Result<(), AppError> {
        if flag.load(Ordering::SeqCst) {
            return Err(AppError::persistence(
                "Database error",
                json!({"reason": "connection refused"}),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.check(&self.fail_reads)?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        self.check(&self.fail_reads)?;
        Ok(self.get(id))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        self.check(&self.fail_writes)?;

        if self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == new_user.email)
        {
            return Err(AppError::persistence(
                "Unique constraint violation",
                json!({"constraint": "users_email_key"}),
            ));
        }

        let user = self.insert(&new_user.first_name, &new_user.last_name, &new_user.email);
        let mut users = self.users.lock().unwrap();
        let stored = users.iter_mut().find(|u| u.id == user.id).unwrap();
        stored.user_type = new_user.user_type;
        stored.dob = new_user.dob;
        stored.gender = new_user.gender;
        stored.is_deleted = new_user.is_deleted;
        Ok(stored.clone())
    }

    async fn update(&self, update: UserUpdate) -> Result<Option<User>, AppError> {
        self.check(&self.fail_writes)?;

        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == update.id) else {
            return Ok(None);
        };

        if let Some(v) = update.first_name {
            user.first_name = v;
        }
        if let Some(v) = update.last_name {
            user.last_name = v;
        }
        if let Some(v) = update.email {
            user.email = v;
        }
        if update.user_type.is_some() {
            user.user_type = update.user_type;
        }
        if update.dob.is_some() {
            user.dob = update.dob;
        }
        if update.gender.is_some() {
            user.gender = update.gender;
        }
        if let Some(v) = update.is_deleted {
            user.is_deleted = v;
        }
        user.last_modified = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.check(&self.fail_writes)?;
        if self.miss_deletes.load(Ordering::SeqCst) {
            return Ok(false);
        }

        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

/// In-memory stand-in for the roles table.
#[derive(Default)]
pub struct InMemoryRoleRepository {
    roles: Mutex<Vec<Role>>,
    fail_reads: AtomicBool,
}

impl InMemoryRoleRepository {
    pub fn seeded() -> Self {
        let repo = Self::default();
        repo.roles.lock().unwrap().extend([
            Role {
                id: 1,
                name: "admin".to_string(),
                description: Some("Full access to user management".to_string()),
            },
            Role {
                id: 2,
                name: "user".to_string(),
                description: None,
            },
        ]);
        repo
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn list(&self) -> Result<Vec<Role>, AppError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::persistence("Database error", json!({})));
        }
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn create(&self, new_role: NewRole) -> Result<Role, AppError> {
        let mut roles = self.roles.lock().unwrap();
        let role = Role {
            id: roles.len() as i32 + 1,
            name: new_role.name,
            description: new_role.description,
        };
        roles.push(role.clone());
        Ok(role)
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub users: Arc<InMemoryUserRepository>,
    pub roles: Arc<InMemoryRoleRepository>,
}

pub fn create_test_app() -> TestApp {
    let users = Arc::new(InMemoryUserRepository::default());
    let roles = Arc::new(InMemoryRoleRepository::seeded());

    let state = AppState::new(users.clone(), roles.clone());
    let server = TestServer::new(api_router(state)).unwrap();

    TestApp {
        server,
        users,
        roles,
    }
}

pub fn auth_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_static("Bearer any-token"),
    )
}

/// Asserts the transport-level contract and returns the decoded envelope.
pub fn envelope(response: &TestResponse) -> Value {
    response.assert_status_ok();
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/json"
    );

    let body = response.json::<Value>();
    let keys: Vec<&str> = body
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["responseCode", "responseData", "errorMessage"]);

    body
}

pub fn data_keys(value: &Value) -> Vec<String> {
    value.as_object().unwrap().keys().cloned().collect()
}
