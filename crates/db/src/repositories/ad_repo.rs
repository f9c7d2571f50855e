//! Repository for the `ads` table.
//!
//! Mutating operations come in owner-constrained form only: the `WHERE`
//! clause filters on both the ad id and the requesting user's id, so a
//! non-owner sees the same "no row" result as a missing ad.

use sqlx::PgPool;

use adboard_core::types::DbId;

use crate::models::ad::{Ad, AdInput, AdPicture};

/// Column list for ad queries. The picture blob is never selected here;
/// only its presence is projected.
const COLUMNS: &str = "id, title, price, text, content_type, \
    (picture IS NOT NULL) AS has_picture, owner_id, created_at, updated_at";

/// Provides CRUD operations for ads.
pub struct AdRepo;

impl AdRepo {
    /// Insert a new ad owned by `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &AdInput,
    ) -> Result<Ad, sqlx::Error> {
        let query = format!(
            "INSERT INTO ads (title, price, text, picture, content_type, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ad>(&query)
            .bind(&input.title)
            .bind(input.price)
            .bind(&input.text)
            .bind(&input.picture)
            .bind(&input.content_type)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// List ads newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Ad>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ads
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Ad>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find an ad by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ads WHERE id = $1");
        sqlx::query_as::<_, Ad>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether an ad exists and is owned by `owner_id`.
    pub async fn owned_exists(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i32,)> =
            sqlx::query_as("SELECT 1 FROM ads WHERE id = $1 AND owner_id = $2")
                .bind(id)
                .bind(owner_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }

    /// Update an ad's fields, constrained to rows owned by `owner_id`.
    ///
    /// The owner column is deliberately absent from the SET list: ownership
    /// is assigned once at creation and never reassigned. When the input
    /// carries no picture the stored blob and content type are left as-is.
    /// Returns `None` when the ad does not exist or is owned by someone else.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &AdInput,
    ) -> Result<Option<Ad>, sqlx::Error> {
        if input.picture.is_some() {
            let query = format!(
                "UPDATE ads SET
                    title = $3, price = $4, text = $5,
                    picture = $6, content_type = $7,
                    updated_at = NOW()
                 WHERE id = $1 AND owner_id = $2
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Ad>(&query)
                .bind(id)
                .bind(owner_id)
                .bind(&input.title)
                .bind(input.price)
                .bind(&input.text)
                .bind(&input.picture)
                .bind(&input.content_type)
                .fetch_optional(pool)
                .await
        } else {
            let query = format!(
                "UPDATE ads SET
                    title = $3, price = $4, text = $5,
                    updated_at = NOW()
                 WHERE id = $1 AND owner_id = $2
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Ad>(&query)
                .bind(id)
                .bind(owner_id)
                .bind(&input.title)
                .bind(input.price)
                .bind(&input.text)
                .fetch_optional(pool)
                .await
        }
    }

    /// Delete an ad, constrained to rows owned by `owner_id`.
    /// Returns `true` if a row was deleted.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the stored picture bytes and content type for an ad.
    /// Returns `None` when the ad itself does not exist.
    pub async fn picture(pool: &PgPool, id: DbId) -> Result<Option<AdPicture>, sqlx::Error> {
        sqlx::query_as::<_, AdPicture>(
            "SELECT picture, content_type FROM ads WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
