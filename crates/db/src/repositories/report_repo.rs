//! Aggregations over `entries` for the weekly, monthly and chart views.
//!
//! All ranges are inclusive on both ends.

use chrono::NaiveDate;

use crate::models::report::{
    ActivityTotal, BreakdownItem, CategoryTotal, RangeTotals, UNASSIGNED_LABEL,
};
use crate::DbPool;

/// Read-only reporting queries.
pub struct ReportRepo;

impl ReportRepo {
    /// Total minutes per category for entries dated within `[from, to]`.
    ///
    /// Every category is returned, with zero when it has no entries in range.
    /// Ordered by sort order, then name.
    pub async fn category_totals(
        pool: &DbPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CategoryTotal>, sqlx::Error> {
        sqlx::query_as::<_, CategoryTotal>(
            "SELECT c.id AS category_id,
                    c.name AS category_name,
                    c.color_hex AS category_color,
                    COALESCE(SUM(e.duration_minutes), 0) AS total_minutes
             FROM categories c
             LEFT JOIN entries e
                    ON e.category_id = c.id AND e.date BETWEEN $1 AND $2
             GROUP BY c.id
             ORDER BY c.sort_order, c.name",
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }

    /// Total minutes per activity for entries dated within `[from, to]`.
    ///
    /// Every activity is returned, with zero when it has no entries in range.
    /// Ordered by category, then sort order, then name.
    pub async fn activity_totals(
        pool: &DbPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ActivityTotal>, sqlx::Error> {
        sqlx::query_as::<_, ActivityTotal>(
            "SELECT a.id AS activity_id,
                    a.name AS activity_name,
                    a.category_id,
                    c.name AS category_name,
                    COALESCE(SUM(e.duration_minutes), 0) AS total_minutes
             FROM activities a
             JOIN categories c ON c.id = a.category_id
             LEFT JOIN entries e
                    ON e.activity_id = a.id AND e.date BETWEEN $1 AND $2
             GROUP BY a.id
             ORDER BY a.category_id, a.sort_order, a.name",
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }

    /// Category and activity totals for one range.
    pub async fn range_totals(
        pool: &DbPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<RangeTotals, sqlx::Error> {
        let categories = Self::category_totals(pool, from, to).await?;
        let activities = Self::activity_totals(pool, from, to).await?;
        Ok(RangeTotals {
            categories,
            activities,
        })
    }

    /// Activities with a positive total in range, largest first, followed by
    /// an "Unassigned" bucket for entries without an activity when that
    /// bucket is non-empty.
    pub async fn activity_breakdown(
        pool: &DbPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<BreakdownItem>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut items = sqlx::query_as::<_, BreakdownItem>(
            "SELECT a.id AS activity_id,
                    a.name AS label,
                    SUM(e.duration_minutes) AS total_minutes
             FROM entries e
             JOIN activities a ON a.id = e.activity_id
             WHERE e.date BETWEEN $1 AND $2
             GROUP BY a.id
             HAVING SUM(e.duration_minutes) > 0
             ORDER BY total_minutes DESC, a.name",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&mut *tx)
        .await?;

        let (unassigned,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(duration_minutes), 0) FROM entries
             WHERE activity_id IS NULL AND date BETWEEN $1 AND $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        if unassigned > 0 {
            items.push(BreakdownItem {
                activity_id: None,
                label: UNASSIGNED_LABEL.to_string(),
                total_minutes: unassigned,
            });
        }
        Ok(items)
    }
}
