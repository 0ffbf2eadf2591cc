//! Duration rounding policies.
//!
//! A logged duration can be snapped to a configured increment before it is
//! stored. The policy comes from the settings record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How a raw duration is snapped to the rounding increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Keep the value as entered.
    #[default]
    None,
    /// Round up to the next multiple of the increment.
    Up,
    /// Round down to the previous multiple (never below 1).
    Down,
    /// Round to the closest multiple; ties go up.
    Nearest,
}

/// All valid rounding mode strings, in display order.
pub const VALID_ROUNDING_MODES: &[&str] = &["none", "up", "down", "nearest"];

impl RoundingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Up => "up",
            Self::Down => "down",
            Self::Nearest => "nearest",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "nearest" => Ok(Self::Nearest),
            other => Err(CoreError::Validation(format!(
                "Unknown rounding mode: '{other}'. Valid modes: {}",
                VALID_ROUNDING_MODES.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for RoundingMode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Snap `value` minutes to `increment` according to `mode`.
///
/// - `mode == None` or `increment <= 0`: returns `max(1, value)`.
/// - Exact multiples are returned unchanged.
/// - `Down` never returns less than 1.
/// - `Nearest` rounds up when the remainder is at least half the increment.
///
/// The minimum-of-one clamp only applies to the pass-through and `Down`
/// branches. `Up` never goes below the increment for positive input, while
/// `Nearest` returns 0 for values under half an increment.
///
/// ```
/// use pastel_core::rounding::{round_minutes, RoundingMode};
///
/// assert_eq!(round_minutes(7, RoundingMode::Up, 15), 15);
/// assert_eq!(round_minutes(22, RoundingMode::Down, 15), 15);
/// assert_eq!(round_minutes(23, RoundingMode::Nearest, 15), 30);
/// assert_eq!(round_minutes(0, RoundingMode::None, 15), 1);
/// ```
pub fn round_minutes(value: i32, mode: RoundingMode, increment: i32) -> i32 {
    if increment <= 0 || mode == RoundingMode::None {
        return value.max(1);
    }

    let value = i64::from(value);
    let inc = i64::from(increment);
    let q = value.div_euclid(inc);
    let r = value.rem_euclid(inc);

    if r == 0 {
        return saturate(value);
    }

    let rounded = match mode {
        RoundingMode::Down => (q * inc).max(1),
        RoundingMode::Up => (q + 1) * inc,
        RoundingMode::Nearest if 2 * r >= inc => (q + 1) * inc,
        RoundingMode::Nearest => q * inc,
        RoundingMode::None => value,
    };
    saturate(rounded)
}

fn saturate(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}
