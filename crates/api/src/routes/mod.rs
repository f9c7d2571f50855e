pub mod ads;
pub mod auth;
pub mod comments;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/me                       current user (requires auth)
///
/// /ads                           list (public), create (requires auth)
/// /ads/{id}                      detail (public), update/delete (owner only)
/// /ads/{id}/image                stored picture bytes (public)
/// /ads/{id}/comments             create comment (requires auth)
///
/// /comments/{id}                 delete comment (owner only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/ads", ads::router())
        .nest("/comments", comments::router())
}
