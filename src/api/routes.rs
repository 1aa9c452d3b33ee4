//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_roles_handler,
    list_users_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// User routes, nested under `/user`.
///
/// # Endpoints
///
/// - `GET    /users`                 - List users
/// - `GET    /user/{user_id}`        - Fetch one user
/// - `POST   /createUser`            - Create a user
/// - `POST   /updateUser`            - Partially update a user
/// - `DELETE /deleteUser/{user_id}`  - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/user/{user_id}", get(get_user_handler))
        .route("/createUser", post(create_user_handler))
        .route("/updateUser", post(update_user_handler))
        .route("/deleteUser/{user_id}", delete(delete_user_handler))
}

/// Role routes, nested under `/role`.
///
/// # Endpoints
///
/// - `GET /roles` - List roles
pub fn role_routes() -> Router<AppState> {
    Router::new().route("/roles", get(list_roles_handler))
}
