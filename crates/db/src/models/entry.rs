//! Time entry model and DTOs.

use chrono::NaiveDate;
use pastel_core::error::CoreError;
use pastel_core::types::{DbId, Timestamp};
use pastel_core::validation::validate_duration;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub activity_id: Option<DbId>,
    pub category_id: DbId,
    pub date: NaiveDate,
    pub duration_minutes: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An entry joined with the names needed to display or export it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntryDetail {
    pub id: DbId,
    pub activity_id: Option<DbId>,
    pub category_id: DbId,
    pub date: NaiveDate,
    pub duration_minutes: i32,
    pub notes: Option<String>,
    pub category_name: String,
    pub category_color: String,
    pub activity_name: Option<String>,
}

/// DTO for creating a new entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntry {
    pub date: NaiveDate,
    pub duration_minutes: i32,
    pub category_id: DbId,
    pub activity_id: Option<DbId>,
    pub notes: Option<String>,
}

impl CreateEntry {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_duration(self.duration_minutes)
    }
}

/// DTO for a partial entry update.
///
/// Omitted fields keep their stored value. `activity_id` and `notes` accept an
/// explicit `null` to clear them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEntry {
    pub date: Option<NaiveDate>,
    pub duration_minutes: Option<i32>,
    pub category_id: Option<DbId>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub activity_id: Option<Option<DbId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notes: Option<Option<String>>,
}

impl UpdateEntry {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(minutes) = self.duration_minutes {
            validate_duration(minutes)?;
        }
        Ok(())
    }
}

/// Filters for listing entries. All filters combine with AND; date bounds are
/// inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category_id: Option<DbId>,
    pub activity_id: Option<DbId>,
}

impl EntryFilter {
    /// Filter for a single inclusive date range.
    pub fn range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from,
            to,
            ..Self::default()
        }
    }
}
