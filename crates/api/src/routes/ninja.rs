//! Route definitions for the `/ninjas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ninja;
use crate::state::AppState;

/// Routes mounted at `/ninjas`.
///
/// ```text
/// GET    /    -> list
/// POST   /    -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(ninja::list).post(ninja::create))
}
