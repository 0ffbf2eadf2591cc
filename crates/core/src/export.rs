//! CSV export of time entries.
//!
//! The format is deliberately minimal: no quoting. Free-text fields are made
//! safe by replacing line breaks and commas with spaces.

use chrono::NaiveDate;

use crate::types::DbId;

/// Header line of the export, without the trailing newline.
pub const CSV_HEADER: &str = "id,date,category,activity,duration_minutes,notes";

/// Suggested download filename.
pub const CSV_FILENAME: &str = "time_entries.csv";

/// One exported entry with names already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub id: DbId,
    pub date: NaiveDate,
    pub category: String,
    pub activity: Option<String>,
    pub duration_minutes: i32,
    pub notes: Option<String>,
}

/// Replace newlines, carriage returns and commas with spaces.
///
/// ```
/// use pastel_core::export::sanitize_field;
///
/// assert_eq!(sanitize_field("a,b\nc"), "a b c");
/// ```
pub fn sanitize_field(value: &str) -> String {
    value.replace(['\n', '\r', ','], " ")
}

/// Render a single data line (with trailing newline).
pub fn csv_line(row: &CsvRow) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        row.id,
        row.date.format("%Y-%m-%d"),
        sanitize_field(&row.category),
        sanitize_field(row.activity.as_deref().unwrap_or("")),
        row.duration_minutes,
        sanitize_field(row.notes.as_deref().unwrap_or("")),
    )
}

/// Render the whole document: header line, then one line per row.
pub fn build_csv(rows: &[CsvRow]) -> String {
    let mut out = String::with_capacity(64 * (rows.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&csv_line(row));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(notes: Option<&str>, activity: Option<&str>) -> CsvRow {
        CsvRow {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            category: "Work".into(),
            activity: activity.map(Into::into),
            duration_minutes: 45,
            notes: notes.map(Into::into),
        }
    }

    #[test]
    fn notes_with_comma_and_newline_are_flattened() {
        let line = csv_line(&row(Some("a,b\nc"), Some("Coding")));
        assert_eq!(line, "7,2024-05-01,Work,Coding,45,a b c\n");
    }

    #[test]
    fn missing_activity_and_notes_render_empty() {
        assert_eq!(csv_line(&row(None, None)), "7,2024-05-01,Work,,45,\n");
    }

    #[test]
    fn header_comes_first() {
        let csv = build_csv(&[row(None, Some("Coding")), row(Some("x"), None)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
    }

    #[test]
    fn empty_export_is_just_the_header() {
        assert_eq!(build_csv(&[]), format!("{CSV_HEADER}\n"));
    }
}
