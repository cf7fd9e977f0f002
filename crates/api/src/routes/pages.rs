//! Root-level HTML page routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET    /           -> index
/// GET    /reports    -> reports
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/reports", get(pages::reports))
}
