//! Shared query parameter types for API and page handlers.
//!
//! Dates arrive as plain strings so that a malformed value produces the same
//! JSON validation error as every other bad input, and so that an empty form
//! field (`?from=`) reads as "not supplied".

use chrono::NaiveDate;
use pastel_core::calendar::parse_date;
use pastel_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Inclusive date range parameters (`?from=&to=`).
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRangeParams {
    /// Both bounds, which must be present and ordered.
    pub fn required(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        let from = parse_optional_date(self.from.as_deref())?
            .ok_or_else(|| AppError::BadRequest("'from' date is required".into()))?;
        let to = parse_optional_date(self.to.as_deref())?
            .ok_or_else(|| AppError::BadRequest("'to' date is required".into()))?;
        ensure_ordered(from, to)?;
        Ok((from, to))
    }
}

/// Parse an optional `YYYY-MM-DD` value; empty strings count as absent.
pub fn parse_optional_date(value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(parse_date(s)?)),
    }
}

/// Parse an optional numeric id; empty strings count as absent.
pub fn parse_optional_id(field: &str, value: Option<&str>) -> AppResult<Option<DbId>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("'{field}' must be an integer id"))),
    }
}

/// Reject a range whose start lies after its end.
pub fn ensure_ordered(from: NaiveDate, to: NaiveDate) -> AppResult<()> {
    if from > to {
        return Err(AppError::BadRequest(format!(
            "Range start {from} is after range end {to}"
        )));
    }
    Ok(())
}
