//! Handlers for the singleton `/settings` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use pastel_db::models::settings::UpdateSettings;
use pastel_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
///
/// Creates the record with defaults on first access.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/settings
///
/// Full replacement: every field must be supplied.
pub async fn replace_settings(
    State(state): State<AppState>,
    Json(input): Json<UpdateSettings>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let settings = SettingsRepo::replace(&state.pool, &input).await?;

    tracing::info!(
        rounding_mode = %settings.rounding_mode,
        rounding_increment = settings.rounding_increment,
        week_start = %settings.week_start,
        "Settings replaced",
    );

    Ok(Json(DataResponse { data: settings }))
}
