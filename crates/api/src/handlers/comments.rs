//! Handlers for comments on ads.
//!
//! Creating a comment requires authentication but no ownership of the ad
//! (anyone may comment on anyone's ad). Deleting a comment is
//! owner-constrained. Both operations answer with 303 See Other pointing
//! at the parent ad's detail resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::Json;
use validator::Validate;

use adboard_core::error::CoreError;
use adboard_core::types::DbId;
use adboard_db::models::comment::CreateComment;
use adboard_db::repositories::{AdRepo, CommentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ads::ad_detail_path;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/ads/{id}/comments
///
/// Append a comment to an ad, owned by the requester. The parent ad is
/// resolved before the body is validated, so a missing ad yields 404 even
/// for an invalid comment. On success, 303 See Other back to the ad's
/// detail resource.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(ad_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1])> {
    let ad = AdRepo::find_by_id(&state.pool, ad_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ad",
            id: ad_id,
        }))?;

    input.validate()?;

    let comment = CommentRepo::create(&state.pool, ad.id, auth.user_id, &input.text).await?;
    tracing::info!(
        comment_id = comment.id,
        ad_id = ad.id,
        owner_id = auth.user_id,
        "Comment created"
    );

    Ok((
        StatusCode::SEE_OTHER,
        [(header::LOCATION, ad_detail_path(ad.id))],
    ))
}

/// DELETE /api/v1/comments/{id}
///
/// Delete a comment owned by the requester. The parent ad id is captured
/// by the deleting statement itself, since the row is gone afterwards; the
/// response is a 303 See Other to that ad's detail resource. 404 for
/// non-owners and missing comments alike.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1])> {
    let ad_id = CommentRepo::delete_owned(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    tracing::info!(comment_id = id, ad_id, owner_id = auth.user_id, "Comment deleted");

    Ok((
        StatusCode::SEE_OTHER,
        [(header::LOCATION, ad_detail_path(ad_id))],
    ))
}
