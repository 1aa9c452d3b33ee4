//! DTOs for user endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::error::AppError;

/// Message returned for any body that cannot be turned into a user.
pub const INSUFFICIENT_PARAMETERS: &str = "Insufficient Parameters...!";

/// Full wire shape of a user. Endpoints narrow it with a
/// [`crate::api::filter::FieldFilter`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    pub last_modified: DateTime<Utc>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub is_deleted: bool,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            user_type: u.user_type,
            last_modified: u.last_modified,
            dob: u.dob,
            gender: u.gender,
            is_deleted: u.is_deleted,
        }
    }
}

/// Request body of `createUser` and `updateUser`.
///
/// Every field is optional on the wire; [`UserPayload::into_new_user`] and
/// [`UserPayload::into_update`] decide what each operation requires.
/// Unknown fields (e.g. `lastModified`) are ignored.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 255, message = "Email address too long")
    )]
    pub email: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    pub user_type: Option<String>,

    pub dob: Option<NaiveDate>,

    #[validate(length(max = 20))]
    pub gender: Option<String>,

    pub is_deleted: Option<bool>,
}

impl UserPayload {
    /// Decodes and validates a raw request body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body is empty, is not a JSON
    /// object of the expected shape, or fails field validation.
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::bad_request(
                INSUFFICIENT_PARAMETERS,
                json!({"reason": "empty body"}),
            ));
        }

        let payload: Self = serde_json::from_slice(body).map_err(|e| {
            AppError::bad_request(INSUFFICIENT_PARAMETERS, json!({"reason": e.to_string()}))
        })?;

        payload
            .validate()
            .map_err(|e| AppError::bad_request(INSUFFICIENT_PARAMETERS, json!(e)))?;

        Ok(payload)
    }

    /// Builds the creation input. First name, last name and email are required.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the missing fields.
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        let first_name = present(self.first_name);
        let last_name = present(self.last_name);
        let email = present(self.email);

        match (first_name, last_name, email) {
            (Some(first_name), Some(last_name), Some(email)) => Ok(NewUser {
                first_name,
                last_name,
                email,
                user_type: self.user_type,
                dob: self.dob,
                gender: self.gender,
                is_deleted: self.is_deleted.unwrap_or(false),
            }),
            (first_name, last_name, email) => {
                let missing: Vec<&str> = [
                    ("firstName", first_name.is_none()),
                    ("lastName", last_name.is_none()),
                    ("email", email.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();

                Err(AppError::bad_request(
                    INSUFFICIENT_PARAMETERS,
                    json!({"missing": missing}),
                ))
            }
        }
    }

    /// Builds the partial update input. Only `id` is required.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is absent.
    pub fn into_update(self) -> Result<UserUpdate, AppError> {
        let id = self.id.ok_or_else(|| {
            AppError::bad_request(INSUFFICIENT_PARAMETERS, json!({"missing": ["id"]}))
        })?;

        Ok(UserUpdate {
            id,
            first_name: present(self.first_name),
            last_name: present(self.last_name),
            email: present(self.email),
            user_type: self.user_type,
            dob: self.dob,
            gender: self.gender,
            is_deleted: self.is_deleted,
        })
    }
}

/// Treats blank strings as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
