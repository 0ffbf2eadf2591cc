//! Handlers for the `/entries` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pastel_core::error::CoreError;
use pastel_core::types::DbId;
use pastel_db::models::entry::{CreateEntry, EntryFilter, UpdateEntry};
use pastel_db::repositories::EntryRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::query::{ensure_ordered, parse_optional_date, parse_optional_id};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /entries`.
#[derive(Debug, Default, Deserialize)]
pub struct EntryListParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub category_id: Option<String>,
    pub activity_id: Option<String>,
}

impl EntryListParams {
    fn to_filter(&self) -> AppResult<EntryFilter> {
        let filter = EntryFilter {
            from: parse_optional_date(self.from.as_deref())?,
            to: parse_optional_date(self.to.as_deref())?,
            category_id: parse_optional_id("category_id", self.category_id.as_deref())?,
            activity_id: parse_optional_id("activity_id", self.activity_id.as_deref())?,
        };
        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            ensure_ordered(from, to)?;
        }
        Ok(filter)
    }
}

/// GET /api/v1/entries?from=&to=&category_id=&activity_id=
///
/// Newest first.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<EntryListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.to_filter()?;
    let entries = EntryRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/entries
///
/// The duration is stored as given; rounding only applies to the quick-add
/// form on the home page.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(input): Json<CreateEntry>,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        entry_id = entry.id,
        category_id = entry.category_id,
        activity_id = ?entry.activity_id,
        minutes = entry.duration_minutes,
        "Entry created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /api/v1/entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Entry", id }))?;
    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/entries/{id}
///
/// Partial update; `activity_id: null` and `notes: null` clear those fields.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEntry>,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Entry", id }))?;

    tracing::info!(entry_id = id, "Entry updated");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !EntryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Entry", id }));
    }

    tracing::info!(entry_id = id, "Entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
