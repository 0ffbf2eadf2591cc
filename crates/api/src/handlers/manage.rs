//! Category and activity management pages and their form posts.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect};
use axum::Form;
use pastel_core::error::CoreError;
use pastel_core::types::DbId;
use pastel_db::models::activity::CreateActivity;
use pastel_db::models::category::CreateCategory;
use pastel_db::models::outcome::DeleteOutcome;
use pastel_db::repositories::{ActivityRepo, CategoryRepo, SettingsRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::pages::{non_empty, required_field};
use crate::query::parse_optional_id;
use crate::state::AppState;
use crate::views;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /manage/categories
pub async fn categories_page(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get(&state.pool).await?;
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(views::manage::render_categories(&settings, &categories))
}

#[derive(Debug, Deserialize)]
pub struct AddCategoryForm {
    pub name: String,
    pub color_hex: Option<String>,
    pub icon_key: Option<String>,
}

/// POST /manage/categories/add
pub async fn add_category(
    State(state): State<AppState>,
    Form(form): Form<AddCategoryForm>,
) -> AppResult<impl IntoResponse> {
    let input = CreateCategory {
        name: form.name.trim().to_string(),
        color_hex: non_empty(form.color_hex),
        icon_key: non_empty(form.icon_key),
        sort_order: None,
    };
    input.validate()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category added");

    Ok(Redirect::to("/manage/categories"))
}

#[derive(Debug, Deserialize)]
pub struct DeleteCategoryForm {
    pub category_id: String,
}

/// POST /manage/categories/delete
///
/// A category still referenced by activities or entries is a 400.
pub async fn delete_category(
    State(state): State<AppState>,
    Form(form): Form<DeleteCategoryForm>,
) -> AppResult<impl IntoResponse> {
    let id: DbId = required_field("category_id", &form.category_id)?;
    match CategoryRepo::delete(&state.pool, id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(category_id = id, "Category deleted");
            Ok(Redirect::to("/manage/categories"))
        }
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        })),
        DeleteOutcome::InUse {
            activities,
            entries,
        } => {
            tracing::warn!(category_id = id, activities, entries, "Category delete refused");
            Err(AppError::BadRequest("Cannot delete category in use".into()))
        }
    }
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ActivitiesPageParams {
    pub category_id: Option<String>,
}

/// GET /manage/activities?category_id=
pub async fn activities_page(
    State(state): State<AppState>,
    Query(params): Query<ActivitiesPageParams>,
) -> AppResult<impl IntoResponse> {
    let selected = parse_optional_id("category_id", params.category_id.as_deref())?;
    let settings = SettingsRepo::get(&state.pool).await?;
    let categories = CategoryRepo::list(&state.pool).await?;
    let activities = ActivityRepo::list(&state.pool, selected).await?;
    Ok(views::manage::render_activities(
        &settings,
        &categories,
        &activities,
        selected,
    ))
}

#[derive(Debug, Deserialize)]
pub struct AddActivityForm {
    pub name: String,
    pub category_id: String,
}

/// POST /manage/activities/add
pub async fn add_activity(
    State(state): State<AppState>,
    Form(form): Form<AddActivityForm>,
) -> AppResult<impl IntoResponse> {
    let category_id: DbId = required_field("category_id", &form.category_id)?;
    let input = CreateActivity {
        name: form.name.trim().to_string(),
        category_id,
        sort_order: None,
    };
    input.validate()?;
    let activity = ActivityRepo::create(&state.pool, &input).await?;

    tracing::info!(activity_id = activity.id, category_id, "Activity added");

    Ok(Redirect::to(&format!(
        "/manage/activities?category_id={category_id}"
    )))
}

#[derive(Debug, Deserialize)]
pub struct DeleteActivityForm {
    pub activity_id: String,
    pub category_id: String,
}

/// POST /manage/activities/delete
///
/// An activity still referenced by entries is a 400.
pub async fn delete_activity(
    State(state): State<AppState>,
    Form(form): Form<DeleteActivityForm>,
) -> AppResult<impl IntoResponse> {
    let id: DbId = required_field("activity_id", &form.activity_id)?;
    let category_id: DbId = required_field("category_id", &form.category_id)?;
    match ActivityRepo::delete(&state.pool, id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(activity_id = id, "Activity deleted");
            Ok(Redirect::to(&format!(
                "/manage/activities?category_id={category_id}"
            )))
        }
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        })),
        DeleteOutcome::InUse { entries, .. } => {
            tracing::warn!(activity_id = id, entries, "Activity delete refused");
            Err(AppError::BadRequest("Cannot delete activity in use".into()))
        }
    }
}
