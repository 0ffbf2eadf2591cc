//! Aggregation result rows.

use pastel_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Label used for entries without an activity in the ranked breakdown.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Total minutes logged against one category in a date range.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryTotal {
    pub category_id: DbId,
    pub category_name: String,
    pub category_color: String,
    pub total_minutes: i64,
}

/// Total minutes logged against one activity in a date range.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityTotal {
    pub activity_id: DbId,
    pub activity_name: String,
    pub category_id: DbId,
    pub category_name: String,
    pub total_minutes: i64,
}

/// One slice of the ranked activity breakdown.
///
/// `activity_id` is `None` for the synthetic unassigned bucket.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct BreakdownItem {
    pub activity_id: Option<DbId>,
    pub label: String,
    pub total_minutes: i64,
}

/// Category and activity totals for the same range.
#[derive(Debug, Clone, Serialize)]
pub struct RangeTotals {
    pub categories: Vec<CategoryTotal>,
    pub activities: Vec<ActivityTotal>,
}

impl RangeTotals {
    pub fn grand_total(&self) -> i64 {
        self.categories.iter().map(|c| c.total_minutes).sum()
    }
}
