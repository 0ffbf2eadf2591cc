//! Field-level validation shared by the repositories and handlers.
//!
//! Cross-entity rules (an entry's activity must belong to its category) live
//! in the entry repository because they need the store.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

pub const MAX_CATEGORY_NAME_LEN: usize = 100;
pub const MAX_ACTIVITY_NAME_LEN: usize = 120;
pub const MAX_ICON_KEY_LEN: usize = 50;

/// A day has 1440 minutes; a single entry cannot exceed it.
pub const MIN_DURATION_MINUTES: i32 = 1;
pub const MAX_DURATION_MINUTES: i32 = 24 * 60;

pub const MAX_GLASS_ALPHA: i32 = 100;

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

/// Names are checked (and stored) without surrounding whitespace.
fn validate_name(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    validate_name("category name", name, MAX_CATEGORY_NAME_LEN)
}

pub fn validate_activity_name(name: &str) -> Result<(), CoreError> {
    validate_name("activity name", name, MAX_ACTIVITY_NAME_LEN)
}

pub fn validate_icon_key(icon_key: &str) -> Result<(), CoreError> {
    let len = icon_key.chars().count();
    if len > MAX_ICON_KEY_LEN {
        return Err(CoreError::Validation(format!(
            "icon_key must be at most {MAX_ICON_KEY_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Colors are stored as `#RRGGBB`.
pub fn validate_color_hex(field: &str, value: &str) -> Result<(), CoreError> {
    if HEX_COLOR_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a #RRGGBB color, got '{value}'"
        )))
    }
}

pub fn validate_duration(minutes: i32) -> Result<(), CoreError> {
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
        return Err(CoreError::Validation(format!(
            "duration_minutes must be between {MIN_DURATION_MINUTES} and \
             {MAX_DURATION_MINUTES}, got {minutes}"
        )));
    }
    Ok(())
}

pub fn validate_rounding_increment(increment: i32) -> Result<(), CoreError> {
    if increment < 1 {
        return Err(CoreError::Validation(format!(
            "rounding_increment must be a positive number of minutes, got {increment}"
        )));
    }
    Ok(())
}

pub fn validate_glass_alpha(alpha: i32) -> Result<(), CoreError> {
    if !(0..=MAX_GLASS_ALPHA).contains(&alpha) {
        return Err(CoreError::Validation(format!(
            "glass_alpha must be between 0 and {MAX_GLASS_ALPHA}, got {alpha}"
        )));
    }
    Ok(())
}

pub fn validate_glass_blur(px: i32) -> Result<(), CoreError> {
    if px < 0 {
        return Err(CoreError::Validation(format!(
            "glass_blur_px must be >= 0, got {px}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn names_must_be_non_blank() {
        assert_matches!(validate_category_name(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_activity_name("   "), Err(CoreError::Validation(_)));
        assert!(validate_category_name("Work").is_ok());
    }

    #[test]
    fn name_length_limits_count_characters() {
        assert!(validate_category_name(&"a".repeat(100)).is_ok());
        assert!(validate_category_name(&"a".repeat(101)).is_err());
        assert!(validate_activity_name(&"é".repeat(120)).is_ok());
        assert!(validate_activity_name(&"é".repeat(121)).is_err());
    }

    #[test]
    fn name_length_ignores_surrounding_whitespace() {
        let padded = format!("  {}  ", "a".repeat(100));
        assert!(validate_category_name(&padded).is_ok());
        let padded = format!("\t{}\n", "b".repeat(120));
        assert!(validate_activity_name(&padded).is_ok());
    }

    #[test]
    fn color_hex_format() {
        assert!(validate_color_hex("c", "#7c83fd").is_ok());
        assert!(validate_color_hex("c", "#E6E0FF").is_ok());
        assert!(validate_color_hex("c", "E6E0FF").is_err());
        assert!(validate_color_hex("c", "#E6E0F").is_err());
        assert!(validate_color_hex("c", "#GGGGGG").is_err());
    }

    #[test]
    fn duration_bounds_are_inclusive() {
        assert!(validate_duration(1).is_ok());
        assert!(validate_duration(1440).is_ok());
        assert!(validate_duration(0).is_err());
        assert!(validate_duration(1441).is_err());
        assert!(validate_duration(-5).is_err());
    }

    #[test]
    fn settings_ranges() {
        assert!(validate_rounding_increment(1).is_ok());
        assert!(validate_rounding_increment(0).is_err());
        assert!(validate_glass_alpha(0).is_ok());
        assert!(validate_glass_alpha(100).is_ok());
        assert!(validate_glass_alpha(101).is_err());
        assert!(validate_glass_blur(0).is_ok());
        assert!(validate_glass_blur(-1).is_err());
    }

    #[test]
    fn icon_key_limit() {
        assert!(validate_icon_key("dumbbell").is_ok());
        assert!(validate_icon_key(&"x".repeat(51)).is_err());
    }
}
