//! Server-rendered page routes, mounted at the root.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{charts, export, manage, pages};
use crate::state::AppState;

/// HTML pages, form posts and the CSV export.
///
/// ```text
/// GET  /                            -> pages::index
/// POST /add-entry                   -> pages::add_entry
/// POST /delete-entry                -> pages::delete_entry
/// GET  /weekly                      -> pages::weekly (?week_of)
/// GET  /monthly                     -> pages::monthly (?month)
/// GET  /settings                    -> pages::settings_page
/// POST /settings                    -> pages::save_settings
///
/// GET  /manage/categories           -> manage::categories_page
/// POST /manage/categories/add       -> manage::add_category
/// POST /manage/categories/delete    -> manage::delete_category
/// GET  /manage/activities           -> manage::activities_page (?category_id)
/// POST /manage/activities/add       -> manage::add_activity
/// POST /manage/activities/delete    -> manage::delete_activity
///
/// GET  /entries/export.csv          -> export::export_csv (?from_date, ?to_date)
///
/// GET  /charts/daily                -> charts::daily
/// GET  /charts/weekly               -> charts::weekly
/// GET  /charts/monthly              -> charts::monthly
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/add-entry", post(pages::add_entry))
        .route("/delete-entry", post(pages::delete_entry))
        .route("/weekly", get(pages::weekly))
        .route("/monthly", get(pages::monthly))
        .route(
            "/settings",
            get(pages::settings_page).post(pages::save_settings),
        )
        .route("/manage/categories", get(manage::categories_page))
        .route("/manage/categories/add", post(manage::add_category))
        .route("/manage/categories/delete", post(manage::delete_category))
        .route("/manage/activities", get(manage::activities_page))
        .route("/manage/activities/add", post(manage::add_activity))
        .route("/manage/activities/delete", post(manage::delete_activity))
        .route("/entries/export.csv", get(export::export_csv))
        .route("/charts/daily", get(charts::daily))
        .route("/charts/weekly", get(charts::weekly))
        .route("/charts/monthly", get(charts::monthly))
}
