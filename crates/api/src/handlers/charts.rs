//! Activity breakdown chart pages for the current day, week and month.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use chrono::NaiveDate;
use pastel_core::calendar::{month_range_for, week_range, week_start_for};
use pastel_db::models::settings::Settings;
use pastel_db::repositories::{ReportRepo, SettingsRepo};

use crate::error::AppResult;
use crate::handlers::today;
use crate::state::AppState;
use crate::views;

async fn render(
    state: &AppState,
    settings: &Settings,
    title: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Html<String>> {
    let items = ReportRepo::activity_breakdown(&state.pool, from, to).await?;
    Ok(views::charts::render_breakdown(
        settings, title, from, to, &items,
    ))
}

/// GET /charts/daily
pub async fn daily(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get(&state.pool).await?;
    let day = today();
    render(&state, &settings, "Daily Activity Breakdown", day, day).await
}

/// GET /charts/weekly
///
/// The current week, starting on the configured week start.
pub async fn weekly(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get(&state.pool).await?;
    let (from, to) = week_range(week_start_for(today(), settings.week_start))?;
    render(&state, &settings, "Weekly Activity Breakdown", from, to).await
}

/// GET /charts/monthly
pub async fn monthly(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get(&state.pool).await?;
    let (from, to) = month_range_for(today());
    render(&state, &settings, "Monthly Activity Breakdown", from, to).await
}
