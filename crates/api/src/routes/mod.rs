pub mod auth;
pub mod category;
pub mod health;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                  login (public)
/// /auth/me                     current user (requires auth)
///
/// /projects                    list (public), create (requires auth)
/// /projects/{id}               detail (public), update, delete (requires auth)
///
/// /categories                  list (public), create (requires auth)
/// /categories/{id}             delete (requires auth)
///
/// /views                       view-invalidation stamps (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/categories", category::router())
        .route("/views", get(handlers::views::stamps))
}
