//! Route definitions for assignments.
//!
//! These are flat action paths rather than a nested resource, so the router is
//! merged into `/api` instead of nested.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assignment;
use crate::state::AppState;

/// ```text
/// POST   /assign          -> assign
/// POST   /complete        -> complete
/// GET    /assignments     -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assign", post(assignment::assign))
        .route("/complete", post(assignment::complete))
        .route("/assignments", get(assignment::list))
}
