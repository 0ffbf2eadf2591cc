//! Handlers for the `/reports` aggregations.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use pastel_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::query::DateRangeParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reports/totals?from=&to=
///
/// Per-category and per-activity totals; zero rows are included.
pub async fn range_totals(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    let (from, to) = params.required()?;
    let totals = ReportRepo::range_totals(&state.pool, from, to).await?;
    Ok(Json(DataResponse { data: totals }))
}

/// GET /api/v1/reports/breakdown?from=&to=
///
/// Activities ranked by total time, followed by an `Unassigned` bucket when
/// entries without an activity exist in the range.
pub async fn activity_breakdown(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    let (from, to) = params.required()?;
    let items = ReportRepo::activity_breakdown(&state.pool, from, to).await?;
    Ok(Json(DataResponse { data: items }))
}
