//! Category entity model and DTOs.

use pastel_core::error::CoreError;
use pastel_core::types::{DbId, Timestamp};
use pastel_core::validation::{validate_category_name, validate_color_hex, validate_icon_key};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color_hex: String,
    pub icon_key: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    /// Defaults to `#E6E0FF` if omitted.
    pub color_hex: Option<String>,
    pub icon_key: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

impl CreateCategory {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_category_name(&self.name)?;
        if let Some(hex) = &self.color_hex {
            validate_color_hex("color_hex", hex)?;
        }
        if let Some(icon) = &self.icon_key {
            validate_icon_key(icon)?;
        }
        Ok(())
    }
}

/// DTO for updating an existing category. Omitted fields are left unchanged;
/// `icon_key: null` clears the icon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub color_hex: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub icon_key: Option<Option<String>>,
    pub sort_order: Option<i32>,
}

impl UpdateCategory {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_category_name(name)?;
        }
        if let Some(hex) = &self.color_hex {
            validate_color_hex("color_hex", hex)?;
        }
        if let Some(Some(icon)) = &self.icon_key {
            validate_icon_key(icon)?;
        }
        Ok(())
    }
}
