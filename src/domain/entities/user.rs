//! User entity and its write-side companions.

use chrono::{DateTime, NaiveDate, Utc};

/// A user record as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: Option<String>,
    pub last_modified: DateTime<Utc>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub is_deleted: bool,
}

/// Input data for creating a new user.
///
/// `id` and `last_modified` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub is_deleted: bool,
}

/// Partial update of an existing user.
///
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub is_deleted: Option<bool>,
}

impl NewUser {
    /// Trims names and lowercases the email so lookups stay case-insensitive.
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = normalize_email(&self.email);
        self
    }
}

impl UserUpdate {
    /// Same normalization as [`NewUser::normalized`], applied to present fields only.
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.map(|v| v.trim().to_string());
        self.last_name = self.last_name.map(|v| v.trim().to_string());
        self.email = self.email.as_deref().map(normalize_email);
        self
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
