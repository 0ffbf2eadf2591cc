//! Activity entity model and DTOs.

use pastel_core::error::CoreError;
use pastel_core::types::{DbId, Timestamp};
use pastel_core::validation::validate_activity_name;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new activity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateActivity {
    pub name: String,
    pub category_id: DbId,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

impl CreateActivity {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_activity_name(&self.name)
    }
}

/// DTO for updating an existing activity. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActivity {
    pub name: Option<String>,
    pub category_id: Option<DbId>,
    pub sort_order: Option<i32>,
}

impl UpdateActivity {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_activity_name(name)?;
        }
        Ok(())
    }
}

/// Query parameters for listing activities.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityListParams {
    pub category_id: Option<DbId>,
}
