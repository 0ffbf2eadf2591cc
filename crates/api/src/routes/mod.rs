pub mod activities;
pub mod categories;
pub mod entries;
pub mod health;
pub mod pages;
pub mod reports;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                    list, create
/// /categories/{id}               get, update, delete (409 while in use)
///
/// /activities                    list (?category_id), create
/// /activities/{id}               get, update, delete (409 while in use)
///
/// /entries                       list (?from, ?to, ?category_id, ?activity_id), create
/// /entries/{id}                  get, update, delete
///
/// /reports/totals                per-category and per-activity totals (?from, ?to)
/// /reports/breakdown             ranked activity breakdown (?from, ?to)
///
/// /settings                      get, replace
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/activities", activities::router())
        .nest("/entries", entries::router())
        .nest("/reports", reports::router())
        .nest("/settings", settings::router())
}
