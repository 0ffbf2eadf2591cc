//! CSV export of time entries.

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use pastel_core::export::{build_csv, CsvRow, CSV_FILENAME};
use pastel_db::models::entry::{EntryDetail, EntryFilter};
use pastel_db::repositories::EntryRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::query::{ensure_ordered, parse_optional_date};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

fn to_csv_row(entry: EntryDetail) -> CsvRow {
    CsvRow {
        id: entry.id,
        date: entry.date,
        category: entry.category_name,
        activity: entry.activity_name,
        duration_minutes: entry.duration_minutes,
        notes: entry.notes,
    }
}

/// GET /entries/export.csv?from_date=&to_date=
///
/// Both bounds are optional and inclusive. Rows come newest first.
pub async fn export_csv(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let from = parse_optional_date(params.from_date.as_deref())?;
    let to = parse_optional_date(params.to_date.as_deref())?;
    if let (Some(from), Some(to)) = (from, to) {
        ensure_ordered(from, to)?;
    }

    let entries = EntryRepo::list_detailed(&state.pool, &EntryFilter::range(from, to)).await?;
    let rows: Vec<CsvRow> = entries.into_iter().map(to_csv_row).collect();
    let body = build_csv(&rows);

    tracing::debug!(rows = rows.len(), ?from, ?to, "CSV export");

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename={CSV_FILENAME}"),
            ),
        ],
        body,
    ))
}
