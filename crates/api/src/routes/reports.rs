use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes mounted at `/reports`.
///
/// ```text
/// GET /totals      -> range_totals (?from, ?to)
/// GET /breakdown   -> activity_breakdown (?from, ?to)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/totals", get(reports::range_totals))
        .route("/breakdown", get(reports::activity_breakdown))
}
