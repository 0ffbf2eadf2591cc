//! The singleton settings record.

use pastel_core::calendar::WeekStart;
use pastel_core::error::CoreError;
use pastel_core::rounding::RoundingMode;
use pastel_core::settings::{
    DEFAULT_ACCENT_HEX, DEFAULT_GLASS_ALPHA, DEFAULT_GLASS_BLUR_PX, DEFAULT_PRIMARY_HEX,
    DEFAULT_ROUNDING_INCREMENT, DEFAULT_ROUNDING_MODE, DEFAULT_WEEK_START,
};
use pastel_core::types::{DbId, Timestamp};
use pastel_core::validation::{
    validate_color_hex, validate_glass_alpha, validate_glass_blur, validate_rounding_increment,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Settings {
    pub id: DbId,
    #[sqlx(try_from = "String")]
    pub rounding_mode: RoundingMode,
    pub rounding_increment: i32,
    #[sqlx(try_from = "String")]
    pub week_start: WeekStart,
    pub primary_hex: String,
    pub accent_hex: String,
    pub glass_alpha: i32,
    pub glass_blur_px: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full replacement of every settings field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UpdateSettings {
    pub rounding_mode: RoundingMode,
    pub rounding_increment: i32,
    pub week_start: WeekStart,
    pub primary_hex: String,
    pub accent_hex: String,
    pub glass_alpha: i32,
    pub glass_blur_px: i32,
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self {
            rounding_mode: DEFAULT_ROUNDING_MODE,
            rounding_increment: DEFAULT_ROUNDING_INCREMENT,
            week_start: DEFAULT_WEEK_START,
            primary_hex: DEFAULT_PRIMARY_HEX.to_string(),
            accent_hex: DEFAULT_ACCENT_HEX.to_string(),
            glass_alpha: DEFAULT_GLASS_ALPHA,
            glass_blur_px: DEFAULT_GLASS_BLUR_PX,
        }
    }
}

impl UpdateSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_rounding_increment(self.rounding_increment)?;
        validate_color_hex("primary_hex", &self.primary_hex)?;
        validate_color_hex("accent_hex", &self.accent_hex)?;
        validate_glass_alpha(self.glass_alpha)?;
        validate_glass_blur(self.glass_blur_px)?;
        Ok(())
    }
}
