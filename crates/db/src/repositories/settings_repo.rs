//! Repository for the singleton `settings` row.

use pastel_core::settings::SETTINGS_ID;

use crate::models::settings::{Settings, UpdateSettings};
use crate::{DbPool, NOW_SQL};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, rounding_mode, rounding_increment, week_start, primary_hex, \
     accent_hex, glass_alpha, glass_blur_px, created_at, updated_at";

/// Reads and replaces the settings record.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Return the settings row, creating it with defaults on first access.
    pub async fn get(pool: &DbPool) -> Result<Settings, sqlx::Error> {
        let defaults = UpdateSettings::default();
        sqlx::query(
            "INSERT INTO settings (id, rounding_mode, rounding_increment, week_start,
                                   primary_hex, accent_hex, glass_alpha, glass_blur_px)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(SETTINGS_ID)
        .bind(defaults.rounding_mode.as_str())
        .bind(defaults.rounding_increment)
        .bind(defaults.week_start.as_str())
        .bind(&defaults.primary_hex)
        .bind(&defaults.accent_hex)
        .bind(defaults.glass_alpha)
        .bind(defaults.glass_blur_px)
        .execute(pool)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = $1");
        sqlx::query_as::<_, Settings>(&query)
            .bind(SETTINGS_ID)
            .fetch_one(pool)
            .await
    }

    /// Replace every settings field in one statement, creating the row if
    /// needed.
    pub async fn replace(pool: &DbPool, input: &UpdateSettings) -> Result<Settings, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (id, rounding_mode, rounding_increment, week_start,
                                   primary_hex, accent_hex, glass_alpha, glass_blur_px)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (id) DO UPDATE SET
                rounding_mode = excluded.rounding_mode,
                rounding_increment = excluded.rounding_increment,
                week_start = excluded.week_start,
                primary_hex = excluded.primary_hex,
                accent_hex = excluded.accent_hex,
                glass_alpha = excluded.glass_alpha,
                glass_blur_px = excluded.glass_blur_px,
                updated_at = {NOW_SQL}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Settings>(&query)
            .bind(SETTINGS_ID)
            .bind(input.rounding_mode.as_str())
            .bind(input.rounding_increment)
            .bind(input.week_start.as_str())
            .bind(&input.primary_hex)
            .bind(&input.accent_hex)
            .bind(input.glass_alpha)
            .bind(input.glass_blur_px)
            .fetch_one(pool)
            .await
    }
}
