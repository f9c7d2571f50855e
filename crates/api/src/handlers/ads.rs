//! Handlers for the `/ads` resource.
//!
//! Listing and detail are public; create/update/delete require
//! authentication via [`AuthUser`]. Update and delete are additionally
//! owner-constrained: the repository filters on the requesting user's id,
//! so a non-owner receives the same 404 as for a missing ad.

use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use adboard_core::error::CoreError;
use adboard_core::media::{normalize_content_type, DEFAULT_CONTENT_TYPE, MAX_PICTURE_BYTES};
use adboard_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use adboard_core::types::DbId;
use adboard_db::models::ad::{Ad, AdInput, AdListParams};
use adboard_db::models::comment::Comment;
use adboard_db::repositories::{AdRepo, CommentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Detail payload: the ad plus its comments, most recently updated first.
#[derive(Debug, Serialize)]
pub struct AdDetail {
    pub ad: Ad,
    pub comments: Vec<Comment>,
}

/// Path of an ad's detail resource, used for `Location` headers.
pub fn ad_detail_path(id: DbId) -> String {
    format!("/api/v1/ads/{id}")
}

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

/// Parse the ad submission form (`title`, `price`, `text`, optional
/// `picture` file part) into a validated [`AdInput`].
///
/// A `picture` part with no filename and no bytes is what browsers send for
/// an untouched file input; it is treated as "no picture submitted".
async fn parse_ad_form(mut multipart: Multipart) -> Result<AdInput, AppError> {
    let mut title: Option<String> = None;
    let mut price: Option<i64> = None;
    let mut text: Option<String> = None;
    let mut picture: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name().unwrap_or("") {
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "price" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                price = Some(raw.trim().parse::<i64>().map_err(|_| {
                    AppError::Core(CoreError::Validation(
                        "price: must be a whole number".to_string(),
                    ))
                })?);
            }
            "text" => {
                text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "picture" => {
                let has_filename = field.file_name().is_some_and(|f| !f.is_empty());
                let declared = field.content_type().map(|ct| ct.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;

                if bytes.is_empty() && !has_filename {
                    continue;
                }
                if bytes.len() > MAX_PICTURE_BYTES {
                    return Err(AppError::Core(CoreError::Validation(format!(
                        "picture: exceeds maximum size of {MAX_PICTURE_BYTES} bytes"
                    ))));
                }
                picture = Some(bytes.to_vec());
                content_type = Some(normalize_content_type(declared.as_deref()));
            }
            _ => {} // Unknown fields are ignored.
        }
    }

    let price = price.ok_or_else(|| {
        AppError::Core(CoreError::Validation("price: required".to_string()))
    })?;

    let input = AdInput {
        title: title.unwrap_or_default(),
        price,
        text: text.unwrap_or_default(),
        picture,
        content_type,
    };
    input.validate()?;
    Ok(input)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/ads
///
/// List all ads, newest first. Public.
pub async fn list_ads(
    State(state): State<AppState>,
    Query(params): Query<AdListParams>,
) -> AppResult<Json<DataResponse<Vec<Ad>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let ads = AdRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: ads }))
}

/// GET /api/v1/ads/{id}
///
/// Fetch one ad and its comments (ordered by last update, newest first).
/// Public. 404 when the ad does not exist.
pub async fn get_ad(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AdDetail>>> {
    let ad = AdRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad", id }))?;
    let comments = CommentRepo::list_for_ad(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: AdDetail { ad, comments },
    }))
}

/// POST /api/v1/ads
///
/// Create an ad from a multipart form. The authenticated requester becomes
/// the owner. Returns 201 with the created ad and a `Location` header for
/// its detail resource.
pub async fn create_ad(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<DataResponse<Ad>>)> {
    let input = parse_ad_form(multipart).await?;

    let ad = AdRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(ad_id = ad.id, owner_id = auth.user_id, "Ad created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, ad_detail_path(ad.id))],
        Json(DataResponse { data: ad }),
    ))
}

/// PUT /api/v1/ads/{id}
///
/// Update an ad's fields from the same multipart form as creation. The
/// ownership check runs before the form is even parsed, so non-owners get
/// 404 whether or not the ad exists and regardless of what they submitted.
/// The owner is never reassigned; omitting the picture part leaves the
/// stored blob untouched.
pub async fn update_ad(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Ad>>> {
    if !AdRepo::owned_exists(&state.pool, id, auth.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Ad", id }));
    }

    let input = parse_ad_form(multipart).await?;

    let ad = AdRepo::update_owned(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad", id }))?;

    Ok(Json(DataResponse { data: ad }))
}

/// DELETE /api/v1/ads/{id}
///
/// Delete an ad owned by the requester. 204 on success, 404 for
/// non-owners and missing ads alike.
pub async fn delete_ad(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AdRepo::delete_owned(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Ad", id }));
    }

    tracing::info!(ad_id = id, owner_id = auth.user_id, "Ad deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/ads/{id}/image
///
/// Stream the stored picture bytes with the content type recorded at
/// upload time and an exact `Content-Length`. No auth, no JSON envelope.
/// 404 when the ad does not exist or carries no picture.
pub async fn stream_picture(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let stored = AdRepo::picture(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad", id }))?;

    let bytes = stored
        .picture
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad picture", id }))?;
    let content_type = stored
        .content_type
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, bytes.len().to_string())
        .body(Body::from(bytes))
        .map_err(|e| AppError::InternalError(format!("Failed to build image response: {e}")))
}
