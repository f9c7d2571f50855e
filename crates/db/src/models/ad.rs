//! Ad entity model and DTOs.

use adboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An ad row without its picture bytes.
///
/// Listings and detail pages never ship the blob; clients fetch it from the
/// image endpoint. `has_picture` tells them whether that endpoint will 404.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ad {
    pub id: DbId,
    pub title: String,
    pub price: i64,
    pub text: String,
    pub content_type: Option<String>,
    pub has_picture: bool,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The stored picture for an ad: raw bytes plus the content type recorded
/// at upload time.
#[derive(Debug, FromRow)]
pub struct AdPicture {
    pub picture: Option<Vec<u8>>,
    pub content_type: Option<String>,
}

/// Validated fields for creating or updating an ad.
///
/// Both operations accept the same multipart form, so one DTO covers both.
/// `picture`/`content_type` are `None` when no file part was submitted, in
/// which case an update leaves the stored blob untouched.
#[derive(Debug, Validate)]
pub struct AdInput {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: String,
    #[validate(range(min = 0, message = "price must be non-negative"))]
    pub price: i64,
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
    pub picture: Option<Vec<u8>>,
    pub content_type: Option<String>,
}

/// Query parameters for the ad listing.
#[derive(Debug, Deserialize)]
pub struct AdListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
