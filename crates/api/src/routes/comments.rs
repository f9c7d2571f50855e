//! Route definitions for the comments resource.
//!
//! Mounted at `/comments` by `api_routes()`. Comment creation lives under
//! the parent ad's routes (`POST /ads/{id}/comments`).

use axum::routing::delete;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Comment routes.
///
/// ```text
/// DELETE /{id} -> delete_comment (auth + ownership)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(comments::delete_comment))
}
