//! Repository for the `activities` table.

use pastel_core::error::CoreError;
use pastel_core::types::DbId;

use crate::error::DbError;
use crate::models::activity::{Activity, CreateActivity, UpdateActivity};
use crate::models::outcome::DeleteOutcome;
use crate::{DbPool, NOW_SQL};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, name, sort_order, created_at, updated_at";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row. The name is stored
    /// trimmed.
    pub async fn create(pool: &DbPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (category_id, name, sort_order)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(input.category_id)
            .bind(input.name.trim())
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Find an activity by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List activities, optionally restricted to one category.
    ///
    /// Ordered by category, then sort order, then name.
    pub async fn list(
        pool: &DbPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities
             WHERE ($1 IS NULL OR category_id = $1)
             ORDER BY category_id, sort_order, name"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Update an activity. Only supplied fields in `input` are applied.
    ///
    /// Moving an activity to another category is refused while entries
    /// reference it, since those entries would no longer match their
    /// activity's category. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateActivity,
    ) -> Result<Option<Activity>, DbError> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        let Some(current) = sqlx::query_as::<_, Activity>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(category_id) = input.category_id {
            if category_id != current.category_id {
                let (entries,): (i64,) =
                    sqlx::query_as("SELECT COUNT(*) FROM entries WHERE activity_id = $1")
                        .bind(id)
                        .fetch_one(&mut *tx)
                        .await?;
                if entries > 0 {
                    return Err(CoreError::Conflict(format!(
                        "Activity {id} has {entries} entries and cannot move to another category"
                    ))
                    .into());
                }
            }
        }

        let query = format!(
            "UPDATE activities SET
                name = COALESCE($2, name),
                category_id = COALESCE($3, category_id),
                sort_order = COALESCE($4, sort_order),
                updated_at = {NOW_SQL}
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.category_id)
            .bind(input.sort_order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete an activity unless entries still reference it.
    ///
    /// Count and delete share one transaction.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<(DbId,)> = sqlx::query_as("SELECT id FROM activities WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        let (entries,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM entries WHERE activity_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if entries > 0 {
            return Ok(DeleteOutcome::InUse {
                activities: 0,
                entries,
            });
        }

        sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Number of activities.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activities")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
