//! Handlers for user endpoints.
//!
//! Each handler starts from the failure outcome of its operation and only
//! reports `SUCCESS` once the service call went through. Store failures
//! during a mutation are reported as `EXCEPTION` with the operation's own
//! message; anything else propagates to [`AppError`]'s in-band rendering.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use serde_json::json;

use crate::api::dto::user::{INSUFFICIENT_PARAMETERS, UserItem, UserPayload};
use crate::api::envelope::{GenericApiResponse, ResponseCode};
use crate::api::extractors::AuthorizationHeader;
use crate::api::filter::{
    FieldFilter, USER_DETAIL_FILTER, USER_LIST_FILTER, USER_UPDATE_FILTER,
};
use crate::api::serializer::{EnvelopeResponse, render};
use crate::error::AppError;
use crate::state::AppState;

const USER_NOT_FOUND: &str = "User not found.";
const DELETE_TARGET_MISSING: &str = "User not found...!";
const CREATE_FAILED: &str = "User creation failed.";
const UPDATE_FAILED: &str = "User update failed.";
const DELETE_FAILED: &str = "User deletion failed.";

fn user_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::bad_request("Invalid user id.", json!({"reason": e.body_text()})))
}

/// Decodes a buffered user body; an unreadable or oversized body counts as
/// missing parameters.
fn user_payload(body: Result<Bytes, BytesRejection>) -> Result<UserPayload, AppError> {
    let body = body.map_err(|e| {
        AppError::bad_request(INSUFFICIENT_PARAMETERS, json!({"reason": e.body_text()}))
    })?;
    tracing::debug!(payload = %String::from_utf8_lossy(&body));

    UserPayload::parse(&body)
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /user/users`
///
/// Ids are not part of the listing projection.
pub async fn list_users_handler(
    State(state): State<AppState>,
    auth: AuthorizationHeader,
) -> Result<EnvelopeResponse, AppError> {
    tracing::info!("finding all users");
    tracing::debug!(authorization = auth.is_present());

    let users = state
        .user_service
        .list_users()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "find users failed"))?;

    let items: Vec<UserItem> = users.into_iter().map(UserItem::from).collect();

    Ok(render(
        GenericApiResponse::success(items),
        Some(&USER_LIST_FILTER),
    ))
}

/// Fetches one user.
///
/// # Endpoint
///
/// `GET /user/user/{user_id}`
///
/// # Outcomes
///
/// - `SUCCESS` with the user
/// - `USER_NOT_FOUND` / `"User not found."` with `responseData: ""`
pub async fn get_user_handler(
    State(state): State<AppState>,
    auth: AuthorizationHeader,
    path: Result<Path<i32>, PathRejection>,
) -> Result<EnvelopeResponse, AppError> {
    let user_id = user_id(path)?;
    tracing::info!(user_id, "finding user by id");
    tracing::debug!(authorization = auth.is_present());

    let user = state
        .user_service
        .find_user(user_id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, user_id, "find user by id failed"))?;

    let envelope = match user {
        Some(user) => GenericApiResponse::success(UserItem::from(user)),
        None => GenericApiResponse::not_found(ResponseCode::UserNotFound, USER_NOT_FOUND),
    };

    Ok(render(envelope, Some(&USER_DETAIL_FILTER)))
}

/// Creates a user from a JSON body.
///
/// # Endpoint
///
/// `POST /user/createUser`
///
/// # Outcomes
///
/// - `SUCCESS` with the stored user (including its new id)
/// - `ERROR` / `"Insufficient Parameters...!"` for an empty, malformed,
///   oversized or incomplete body
/// - `EXCEPTION` / `"User creation failed."` when the store rejects the insert
pub async fn create_user_handler(
    State(state): State<AppState>,
    auth: AuthorizationHeader,
    body: Result<Bytes, BytesRejection>,
) -> Result<EnvelopeResponse, AppError> {
    tracing::info!("creating user");
    tracing::debug!(authorization = auth.is_present());

    let new_user = match user_payload(body).and_then(UserPayload::into_new_user) {
        Ok(new_user) => new_user,
        Err(e) => return Ok(rejected(e, &USER_DETAIL_FILTER)),
    };

    let envelope = match state.user_service.create_user(new_user).await {
        Ok(user) => GenericApiResponse::applied(UserItem::from(user)),
        Err(e) if e.is_persistence() => {
            tracing::error!(error = %e, "user creation failed");
            GenericApiResponse::failure(ResponseCode::Exception, CREATE_FAILED)
        }
        Err(e) => return Err(e),
    };

    Ok(render(envelope, Some(&USER_DETAIL_FILTER)))
}

/// Partially updates a user identified by the body's `id`.
///
/// # Endpoint
///
/// `POST /user/updateUser`
///
/// # Outcomes
///
/// - `SUCCESS` with the updated user (without its id)
/// - `ERROR` / `"Insufficient Parameters...!"` for an empty, malformed,
///   oversized or id-less body
/// - `ERROR` / `"User update failed."` when no user has that id
/// - `EXCEPTION` / `"User update failed."` when the store rejects the update
pub async fn update_user_handler(
    State(state): State<AppState>,
    auth: AuthorizationHeader,
    body: Result<Bytes, BytesRejection>,
) -> Result<EnvelopeResponse, AppError> {
    tracing::info!("updating user");
    tracing::debug!(authorization = auth.is_present());

    let update = match user_payload(body).and_then(UserPayload::into_update) {
        Ok(update) => update,
        Err(e) => return Ok(rejected(e, &USER_UPDATE_FILTER)),
    };
    let user_id = update.id;

    let envelope = match state.user_service.update_user(update).await {
        Ok(Some(user)) => GenericApiResponse::applied(UserItem::from(user)),
        Ok(None) => {
            tracing::warn!(user_id, "user update matched no row");
            GenericApiResponse::failure(ResponseCode::Error, UPDATE_FAILED)
        }
        Err(e) if e.is_persistence() => {
            tracing::error!(error = %e, user_id, "user update failed");
            GenericApiResponse::failure(ResponseCode::Exception, UPDATE_FAILED)
        }
        Err(e) => return Err(e),
    };

    Ok(render(envelope, Some(&USER_UPDATE_FILTER)))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /user/deleteUser/{user_id}`
///
/// # Outcomes
///
/// - `SUCCESS` with `responseData: null`
/// - `ERROR` / `"User not found...!"` when no user has that id
/// - `ERROR` / `"User deletion failed."` when the row vanished before the delete
/// - `EXCEPTION` / `"User deletion failed."` when the store rejects the delete
pub async fn delete_user_handler(
    State(state): State<AppState>,
    auth: AuthorizationHeader,
    path: Result<Path<i32>, PathRejection>,
) -> Result<EnvelopeResponse, AppError> {
    let user_id = user_id(path)?;
    tracing::info!(user_id, "deleting user");
    tracing::debug!(authorization = auth.is_present());

    let envelope = match state.user_service.find_user(user_id).await? {
        None => GenericApiResponse::failure(ResponseCode::Error, DELETE_TARGET_MISSING),
        Some(user) => match state.user_service.delete_user(user.id).await {
            Ok(true) => GenericApiResponse::done(),
            Ok(false) => GenericApiResponse::failure(ResponseCode::Error, DELETE_FAILED),
            Err(e) if e.is_persistence() => {
                tracing::error!(error = %e, user_id, "user deletion failed");
                GenericApiResponse::failure(ResponseCode::Exception, DELETE_FAILED)
            }
            Err(e) => return Err(e),
        },
    };

    Ok(render::<UserItem>(envelope, None))
}

/// Envelope for a body that could not be turned into a user.
fn rejected(error: AppError, filter: &FieldFilter) -> EnvelopeResponse {
    tracing::warn!(error = %error, "user payload rejected");
    let (_, message) = error.outcome();
    render(
        GenericApiResponse::<UserItem>::failure(ResponseCode::Error, message),
        Some(filter),
    )
}
