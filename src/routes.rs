//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/user/*` - User CRUD
//! - `/role/*` - Role listing
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and tracing, without path normalization.
///
/// Integration tests drive this router directly.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/user", api::routes::user_routes())
        .nest("/role", api::routes::role_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
