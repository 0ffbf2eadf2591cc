//! Defaults for the singleton settings record.

use crate::calendar::WeekStart;
use crate::rounding::RoundingMode;
use crate::types::DbId;

/// Well-known primary key of the one settings row.
pub const SETTINGS_ID: DbId = 1;

pub const DEFAULT_ROUNDING_MODE: RoundingMode = RoundingMode::None;
pub const DEFAULT_ROUNDING_INCREMENT: i32 = 15;
pub const DEFAULT_WEEK_START: WeekStart = WeekStart::Monday;
pub const DEFAULT_PRIMARY_HEX: &str = "#7c83fd";
pub const DEFAULT_ACCENT_HEX: &str = "#E6E0FF";
/// Glass panel opacity, percent.
pub const DEFAULT_GLASS_ALPHA: i32 = 85;
pub const DEFAULT_GLASS_BLUR_PX: i32 = 12;

/// Fallback color for new categories.
pub const DEFAULT_CATEGORY_HEX: &str = "#E6E0FF";

/// Categories created on first start, with their colors.
pub const SEED_CATEGORIES: &[(&str, &str)] = &[
    ("Exercise", "#DFF5E1"),
    ("Reading", "#E0F2FF"),
    ("Work", "#E6E0FF"),
    ("Play", "#FFF4D6"),
];

/// Activities created on first start, keyed by category name.
pub const SEED_ACTIVITIES: &[(&str, &[&str])] = &[
    ("Work", &["Coding", "Writing", "Meetings"]),
    ("Exercise", &["Cardio", "Strength", "Yoga"]),
    ("Reading", &["Fiction", "Non-fiction"]),
    ("Play", &["Games", "Music", "Outdoors"]),
];
