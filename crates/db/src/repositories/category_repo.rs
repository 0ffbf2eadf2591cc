//! Repository for the `categories` table.

use pastel_core::settings::DEFAULT_CATEGORY_HEX;
use pastel_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::models::outcome::DeleteOutcome;
use crate::{DbPool, NOW_SQL};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color_hex, icon_key, sort_order, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row. The name is stored
    /// trimmed.
    pub async fn create(pool: &DbPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, color_hex, icon_key, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(input.name.trim())
            .bind(input.color_hex.as_deref().unwrap_or(DEFAULT_CATEGORY_HEX))
            .bind(&input.icon_key)
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its unique name.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name.trim())
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by sort order, then name.
    pub async fn list(pool: &DbPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY sort_order, name");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Update a category. Only supplied fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                color_hex = COALESCE($3, color_hex),
                icon_key = CASE WHEN $4 THEN $5 ELSE icon_key END,
                sort_order = COALESCE($6, sort_order),
                updated_at = {NOW_SQL}
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.color_hex)
            .bind(input.icon_key.is_some())
            .bind(input.icon_key.clone().flatten())
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category unless activities or entries still reference it.
    ///
    /// The dependent counts and the delete run in one transaction, so a
    /// dependent inserted concurrently either commits first (and is counted)
    /// or fails its own write.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<(DbId,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        let (activities,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM activities WHERE category_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        let (entries,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM entries WHERE category_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if activities > 0 || entries > 0 {
            return Ok(DeleteOutcome::InUse {
                activities,
                entries,
            });
        }

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Number of categories.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
