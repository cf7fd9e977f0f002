//! Route definitions for `/export`.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Routes mounted at `/export`.
///
/// ```text
/// GET    /{format}    -> export_all
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{format}", get(export::export_all))
}
