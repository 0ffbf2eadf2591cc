//! Repository for the `entries` table.
//!
//! Creating or updating an entry enforces the category consistency rule: when
//! an entry references an activity, that activity must belong to the entry's
//! category. On update the rule is checked against the merged result, so
//! changing only the category (or only the activity) is still validated.

use pastel_core::error::CoreError;
use pastel_core::types::DbId;
use sqlx::SqliteConnection;

use crate::error::DbError;
use crate::models::entry::{CreateEntry, Entry, EntryDetail, EntryFilter, UpdateEntry};
use crate::{DbPool, NOW_SQL};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, activity_id, category_id, date, duration_minutes, notes, created_at, updated_at";

/// Shared `WHERE` clause for filtered listings. Parameters: `$1` from, `$2` to,
/// `$3` category, `$4` activity; a NULL parameter disables its filter.
const FILTER_SQL: &str = "($1 IS NULL OR e.date >= $1)
     AND ($2 IS NULL OR e.date <= $2)
     AND ($3 IS NULL OR e.category_id = $3)
     AND ($4 IS NULL OR e.activity_id = $4)";

/// Provides CRUD operations for time entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry after validating it, returning the created row.
    ///
    /// Fails with [`CoreError::Validation`] if the duration is out of range,
    /// the category or activity does not exist, or the activity belongs to a
    /// different category. Nothing is written in that case.
    pub async fn create(pool: &DbPool, input: &CreateEntry) -> Result<Entry, DbError> {
        input.validate()?;

        let mut tx = pool.begin().await?;
        ensure_references(&mut *tx, input.category_id, input.activity_id).await?;

        let query = format!(
            "INSERT INTO entries (activity_id, category_id, date, duration_minutes, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, Entry>(&query)
            .bind(input.activity_id)
            .bind(input.category_id)
            .bind(input.date)
            .bind(input.duration_minutes)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(entry)
    }

    /// Find an entry by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entries matching `filter`, most recent first.
    ///
    /// Ordered by date descending, then id descending.
    pub async fn list(pool: &DbPool, filter: &EntryFilter) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entries e
             WHERE {FILTER_SQL}
             ORDER BY e.date DESC, e.id DESC"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.category_id)
            .bind(filter.activity_id)
            .fetch_all(pool)
            .await
    }

    /// Same as [`EntryRepo::list`] but with category and activity names joined in.
    pub async fn list_detailed(
        pool: &DbPool,
        filter: &EntryFilter,
    ) -> Result<Vec<EntryDetail>, sqlx::Error> {
        let query = format!(
            "SELECT e.id, e.activity_id, e.category_id, e.date, e.duration_minutes, e.notes,
                    c.name AS category_name, c.color_hex AS category_color,
                    a.name AS activity_name
             FROM entries e
             JOIN categories c ON c.id = e.category_id
             LEFT JOIN activities a ON a.id = e.activity_id
             WHERE {FILTER_SQL}
             ORDER BY e.date DESC, e.id DESC"
        );
        sqlx::query_as::<_, EntryDetail>(&query)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.category_id)
            .bind(filter.activity_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update.
    ///
    /// Returns `None` if no row with the given `id` exists. Validation failures
    /// leave the stored row untouched.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateEntry,
    ) -> Result<Option<Entry>, DbError> {
        input.validate()?;

        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        let Some(current) = sqlx::query_as::<_, Entry>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let category_id = input.category_id.unwrap_or(current.category_id);
        let activity_id = input.activity_id.unwrap_or(current.activity_id);
        let date = input.date.unwrap_or(current.date);
        let duration_minutes = input.duration_minutes.unwrap_or(current.duration_minutes);
        let notes = input.notes.clone().unwrap_or(current.notes);

        if input.category_id.is_some() || input.activity_id.is_some() {
            ensure_references(&mut *tx, category_id, activity_id).await?;
        }

        let query = format!(
            "UPDATE entries SET
                activity_id = $2,
                category_id = $3,
                date = $4,
                duration_minutes = $5,
                notes = $6,
                updated_at = {NOW_SQL}
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(activity_id)
            .bind(category_id)
            .bind(date)
            .bind(duration_minutes)
            .bind(notes)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Check that `category_id` exists and, if given, that `activity_id` exists
/// and belongs to it.
async fn ensure_references(
    conn: &mut SqliteConnection,
    category_id: DbId,
    activity_id: Option<DbId>,
) -> Result<(), DbError> {
    let category: Option<(DbId,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
        .bind(category_id)
        .fetch_optional(&mut *conn)
        .await?;
    if category.is_none() {
        return Err(CoreError::Validation(format!("Category {category_id} not found")).into());
    }

    let Some(activity_id) = activity_id else {
        return Ok(());
    };

    let owner: Option<(DbId,)> =
        sqlx::query_as("SELECT category_id FROM activities WHERE id = $1")
            .bind(activity_id)
            .fetch_optional(&mut *conn)
            .await?;
    match owner {
        None => Err(CoreError::Validation(format!("Activity {activity_id} not found")).into()),
        Some((owner,)) if owner != category_id => Err(CoreError::Validation(format!(
            "Activity {activity_id} does not belong to category {category_id}"
        ))
        .into()),
        Some(_) => Ok(()),
    }
}
