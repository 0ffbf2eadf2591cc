//! Server-rendered pages: home, quick add/delete, weekly and monthly totals,
//! and the settings form.
//!
//! Form posts answer with a 303 redirect back to the page they came from.
//! Form fields are taken as strings and parsed here so that any malformed
//! input is a 400 with the usual JSON error body.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect};
use axum::Form;
use chrono::{Datelike, Months};
use pastel_core::calendar::{
    month_range, parse_date, parse_month, shift_days, week_range, week_start_for, WeekStart,
};
use pastel_core::error::CoreError;
use pastel_core::rounding::{round_minutes, RoundingMode};
use pastel_core::types::DbId;
use pastel_db::models::entry::{CreateEntry, EntryFilter};
use pastel_db::models::settings::UpdateSettings;
use pastel_db::repositories::{ActivityRepo, CategoryRepo, EntryRepo, ReportRepo, SettingsRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::today;
use crate::query::parse_optional_date;
use crate::state::AppState;
use crate::views;
use crate::views::reports::TotalsPage;

// ---------------------------------------------------------------------------
// Form field parsing
// ---------------------------------------------------------------------------

/// Parse a required form field.
pub(crate) fn required_field<T: std::str::FromStr>(field: &str, value: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid value for '{field}': '{value}'")))
}

/// Parse an optional form field, falling back to `default` when absent or empty.
pub(crate) fn field_or<T: std::str::FromStr>(
    field: &str,
    value: Option<&str>,
    default: T,
) -> AppResult<T> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => required_field(field, v),
    }
}

/// Trimmed text, or `None` when blank.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Home page and quick add
// ---------------------------------------------------------------------------

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let today = today();
    let settings = SettingsRepo::get(&state.pool).await?;
    let filter = EntryFilter::range(Some(today), Some(today));
    let entries = EntryRepo::list_detailed(&state.pool, &filter).await?;
    let categories = CategoryRepo::list(&state.pool).await?;
    let activities = ActivityRepo::list(&state.pool, None).await?;

    Ok(views::entries::render_index(
        &settings,
        today,
        &entries,
        &categories,
        &activities,
    ))
}

/// Quick-add form fields.
#[derive(Debug, Deserialize)]
pub struct AddEntryForm {
    pub date_value: String,
    pub activity_id: String,
    pub duration_minutes: String,
    pub notes: Option<String>,
}

/// POST /add-entry
///
/// Rounds the duration with the current settings and takes the category from
/// the chosen activity.
pub async fn add_entry(
    State(state): State<AppState>,
    Form(form): Form<AddEntryForm>,
) -> AppResult<impl IntoResponse> {
    let date = parse_date(&form.date_value)?;
    let activity_id: DbId = required_field("activity_id", &form.activity_id)?;
    let raw_minutes: i32 = required_field("duration_minutes", &form.duration_minutes)?;

    let settings = SettingsRepo::get(&state.pool).await?;
    let duration_minutes = round_minutes(
        raw_minutes,
        settings.rounding_mode,
        settings.rounding_increment,
    );

    let activity = ActivityRepo::find_by_id(&state.pool, activity_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Activity {activity_id} not found")))?;

    let input = CreateEntry {
        date,
        duration_minutes,
        category_id: activity.category_id,
        activity_id: Some(activity.id),
        notes: non_empty(form.notes),
    };
    let entry = EntryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        entry_id = entry.id,
        activity_id,
        raw_minutes,
        minutes = duration_minutes,
        "Entry added",
    );

    Ok(Redirect::to("/"))
}

#[derive(Debug, Deserialize)]
pub struct DeleteEntryForm {
    pub entry_id: String,
}

/// POST /delete-entry
pub async fn delete_entry(
    State(state): State<AppState>,
    Form(form): Form<DeleteEntryForm>,
) -> AppResult<impl IntoResponse> {
    let id: DbId = required_field("entry_id", &form.entry_id)?;
    if !EntryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Entry", id }));
    }

    tracing::info!(entry_id = id, "Entry deleted");

    Ok(Redirect::to("/"))
}

// ---------------------------------------------------------------------------
// Weekly / monthly totals
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct WeeklyParams {
    pub week_of: Option<String>,
}

/// GET /weekly?week_of=YYYY-MM-DD
///
/// Seven days starting at `week_of`; defaults to the current week using the
/// configured week start.
pub async fn weekly(
    State(state): State<AppState>,
    Query(params): Query<WeeklyParams>,
) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get(&state.pool).await?;
    let start = match parse_optional_date(params.week_of.as_deref())? {
        Some(start) => start,
        None => week_start_for(today(), settings.week_start),
    };
    let (from, to) = week_range(start)?;
    let totals = ReportRepo::range_totals(&state.pool, from, to).await?;

    let week_href = |days: i64| match shift_days(from, days) {
        Ok(d) => format!("/weekly?week_of={d}"),
        Err(_) => "/weekly".to_string(),
    };
    let view = TotalsPage {
        title: "Weekly",
        from,
        to,
        prev_href: week_href(-7),
        next_href: week_href(7),
        totals: &totals,
    };
    Ok(views::reports::render_totals(&settings, &view))
}

#[derive(Debug, Default, Deserialize)]
pub struct MonthlyParams {
    pub month: Option<String>,
}

/// GET /monthly?month=YYYY-MM
///
/// Defaults to the current month.
pub async fn monthly(
    State(state): State<AppState>,
    Query(params): Query<MonthlyParams>,
) -> AppResult<impl IntoResponse> {
    let (year, month) = match params.month.as_deref().map(str::trim) {
        None | Some("") => {
            let now = today();
            (now.year(), now.month())
        }
        Some(s) => parse_month(s)?,
    };
    let (from, to) = month_range(year, month)?;

    let settings = SettingsRepo::get(&state.pool).await?;
    let totals = ReportRepo::range_totals(&state.pool, from, to).await?;

    let month_href = |d: Option<chrono::NaiveDate>| match d {
        Some(d) => format!("/monthly?month={}", d.format("%Y-%m")),
        None => "/monthly".to_string(),
    };
    let view = TotalsPage {
        title: "Monthly",
        from,
        to,
        prev_href: month_href(from.checked_sub_months(Months::new(1))),
        next_href: month_href(from.checked_add_months(Months::new(1))),
        totals: &totals,
    };
    Ok(views::reports::render_totals(&settings, &view))
}

// ---------------------------------------------------------------------------
// Settings form
// ---------------------------------------------------------------------------

/// GET /settings
pub async fn settings_page(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get(&state.pool).await?;
    Ok(views::settings::render_settings(&settings))
}

/// Settings form fields. Missing or blank fields take the documented defaults.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsForm {
    pub rounding_mode: Option<String>,
    pub rounding_increment: Option<String>,
    pub week_start: Option<String>,
    pub primary_hex: Option<String>,
    pub accent_hex: Option<String>,
    pub glass_alpha: Option<String>,
    pub glass_blur_px: Option<String>,
}

impl SettingsForm {
    pub fn into_update(self) -> AppResult<UpdateSettings> {
        let defaults = UpdateSettings::default();
        let rounding_mode = match non_empty(self.rounding_mode) {
            Some(s) => s.parse::<RoundingMode>()?,
            None => defaults.rounding_mode,
        };
        let week_start = match non_empty(self.week_start) {
            Some(s) => s.parse::<WeekStart>()?,
            None => defaults.week_start,
        };
        Ok(UpdateSettings {
            rounding_mode,
            rounding_increment: field_or(
                "rounding_increment",
                self.rounding_increment.as_deref(),
                defaults.rounding_increment,
            )?,
            week_start,
            primary_hex: non_empty(self.primary_hex).unwrap_or(defaults.primary_hex),
            accent_hex: non_empty(self.accent_hex).unwrap_or(defaults.accent_hex),
            glass_alpha: field_or("glass_alpha", self.glass_alpha.as_deref(), defaults.glass_alpha)?,
            glass_blur_px: field_or(
                "glass_blur_px",
                self.glass_blur_px.as_deref(),
                defaults.glass_blur_px,
            )?,
        })
    }
}

/// POST /settings
pub async fn save_settings(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> AppResult<impl IntoResponse> {
    let input = form.into_update()?;
    input.validate()?;
    let settings = SettingsRepo::replace(&state.pool, &input).await?;

    tracing::info!(
        rounding_mode = %settings.rounding_mode,
        rounding_increment = settings.rounding_increment,
        week_start = %settings.week_start,
        "Settings saved",
    );

    Ok(Redirect::to("/settings"))
}
