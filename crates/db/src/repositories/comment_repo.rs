//! Repository for the `comments` table.

use sqlx::PgPool;

use adboard_core::types::DbId;

use crate::models::comment::Comment;

/// Column list for comment queries.
const COLUMNS: &str = "id, text, owner_id, ad_id, created_at, updated_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment on an ad, owned by `owner_id`.
    pub async fn create(
        pool: &PgPool,
        ad_id: DbId,
        owner_id: DbId,
        text: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (text, owner_id, ad_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(text)
            .bind(owner_id)
            .bind(ad_id)
            .fetch_one(pool)
            .await
    }

    /// List the comments on an ad, most recently updated first.
    pub async fn list_for_ad(pool: &PgPool, ad_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE ad_id = $1
             ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(ad_id)
            .fetch_all(pool)
            .await
    }

    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment, constrained to rows owned by `owner_id`.
    ///
    /// Returns the parent ad id captured by the deleting statement itself;
    /// after the row is gone it could not be recomputed. `None` means the
    /// comment did not exist or belongs to someone else.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "DELETE FROM comments WHERE id = $1 AND owner_id = $2 RETURNING ad_id",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(ad_id,)| ad_id))
    }
}
