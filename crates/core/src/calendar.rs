//! Reporting date ranges: week start conventions, week and month bounds.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of days after the first day that a reporting week spans.
pub const WEEK_SPAN_DAYS: i64 = 6;

/// Which weekday a reporting week begins on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

/// All valid week start strings.
pub const VALID_WEEK_STARTS: &[&str] = &["monday", "sunday"];

impl WeekStart {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekStart {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monday" => Ok(Self::Monday),
            "sunday" => Ok(Self::Sunday),
            other => Err(CoreError::Validation(format!(
                "Unknown week start: '{other}'. Valid values: {}",
                VALID_WEEK_STARTS.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for WeekStart {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// First day of the week containing `day`.
pub fn week_start_for(day: NaiveDate, start: WeekStart) -> NaiveDate {
    let offset = match start {
        WeekStart::Monday => day.weekday().num_days_from_monday(),
        WeekStart::Sunday => day.weekday().num_days_from_sunday(),
    };
    day - Duration::days(i64::from(offset))
}

/// Inclusive `(start, start + 6 days)` range.
///
/// Fails when the end of the week falls outside the representable dates.
pub fn week_range(start: NaiveDate) -> Result<(NaiveDate, NaiveDate), CoreError> {
    let end = shift_days(start, WEEK_SPAN_DAYS)?;
    Ok((start, end))
}

/// `day` moved by `days` (negative goes back), or a validation error when the
/// result is out of range.
pub fn shift_days(day: NaiveDate, days: i64) -> Result<NaiveDate, CoreError> {
    day.checked_add_signed(Duration::days(days))
        .ok_or_else(|| CoreError::Validation(format!("Date out of range: {day} {days:+} days")))
}

/// Inclusive first-to-last day range of a calendar month.
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::Validation(format!("Invalid month: {year}-{month:02}")))?;
    let next = if month == 12 {
        year.checked_add(1).and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| CoreError::Validation(format!("Month out of range: {year}-{month:02}")))?;
    Ok((first, next - Duration::days(1)))
}

/// Month range for the month containing `day`.
pub fn month_range_for(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_day(1).unwrap_or(day);
    let last = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(day);
    (first, last)
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::Validation(format!("Invalid date '{s}': {e}")))
}

/// Parse a `YYYY-MM` month into `(year, month)`.
pub fn parse_month(s: &str) -> Result<(i32, u32), CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid month '{s}', expected YYYY-MM"));
    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}
