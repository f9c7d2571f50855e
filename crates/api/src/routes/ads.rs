//! Route definitions for the ads resource.
//!
//! Mounted at `/ads` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{ads, comments};
use crate::state::AppState;

/// Ad routes.
///
/// ```text
/// GET    /              -> list_ads (?limit, offset)
/// POST   /              -> create_ad (multipart, auth)
/// GET    /{id}          -> get_ad
/// PUT    /{id}          -> update_ad (multipart, auth + ownership)
/// DELETE /{id}          -> delete_ad (auth + ownership)
/// GET    /{id}/image    -> stream_picture
/// POST   /{id}/comments -> create_comment (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ads::list_ads).post(ads::create_ad))
        .route(
            "/{id}",
            get(ads::get_ad).put(ads::update_ad).delete(ads::delete_ad),
        )
        .route("/{id}/image", get(ads::stream_picture))
        .route("/{id}/comments", post(comments::create_comment))
}
