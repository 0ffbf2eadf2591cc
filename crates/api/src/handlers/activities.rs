//! Handlers for the `/activities` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pastel_core::error::CoreError;
use pastel_core::types::DbId;
use pastel_db::models::activity::{ActivityListParams, CreateActivity, UpdateActivity};
use pastel_db::models::outcome::DeleteOutcome;
use pastel_db::repositories::ActivityRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/activities?category_id=
pub async fn list_activities(
    State(state): State<AppState>,
    Query(params): Query<ActivityListParams>,
) -> AppResult<impl IntoResponse> {
    let activities = ActivityRepo::list(&state.pool, params.category_id).await?;
    Ok(Json(DataResponse { data: activities }))
}

/// POST /api/v1/activities
///
/// An unknown `category_id` is a 400; a duplicate name within the category
/// is a 409.
pub async fn create_activity(
    State(state): State<AppState>,
    Json(input): Json<CreateActivity>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let activity = ActivityRepo::create(&state.pool, &input).await?;

    tracing::info!(
        activity_id = activity.id,
        category_id = activity.category_id,
        "Activity created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: activity })))
}

/// GET /api/v1/activities/{id}
pub async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let activity = ActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    Ok(Json(DataResponse { data: activity }))
}

/// PUT /api/v1/activities/{id}
pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActivity>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let activity = ActivityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;

    tracing::info!(activity_id = id, "Activity updated");

    Ok(Json(DataResponse { data: activity }))
}

/// DELETE /api/v1/activities/{id}
///
/// Refused with 409 while entries reference the activity.
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match ActivityRepo::delete(&state.pool, id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(activity_id = id, "Activity deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        })),
        DeleteOutcome::InUse { entries, .. } => {
            tracing::warn!(activity_id = id, entries, "Activity delete refused");
            Err(AppError::Core(CoreError::Conflict(format!(
                "Activity {id} is in use by {entries} entries"
            ))))
        }
    }
}
