//! Handlers for role endpoints.

use axum::extract::State;

use crate::api::dto::role::RoleItem;
use crate::api::envelope::GenericApiResponse;
use crate::api::extractors::AuthorizationHeader;
use crate::api::filter::USER_ROLE_FILTER;
use crate::api::serializer::{EnvelopeResponse, render};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all roles.
///
/// # Endpoint
///
/// `GET /role/roles`
///
/// `responseData` is the role list restricted to `id`, `name`, `description`.
/// An empty store yields `SUCCESS` with `[]`.
pub async fn list_roles_handler(
    State(state): State<AppState>,
    auth: AuthorizationHeader,
) -> Result<EnvelopeResponse, AppError> {
    tracing::info!("finding all user roles");
    tracing::debug!(authorization = auth.is_present());

    let roles = state
        .role_service
        .list_roles()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "find user roles failed"))?;

    let items: Vec<RoleItem> = roles.into_iter().map(RoleItem::from).collect();

    Ok(render(
        GenericApiResponse::success(items),
        Some(&USER_ROLE_FILTER),
    ))
}
