pub mod assignment;
pub mod export;
pub mod health;
pub mod mission;
pub mod ninja;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ninjas                    list, create
/// /missions                  list, create
/// /assign                    assign a mission to a ninja (POST)
/// /complete                  complete an assignment (POST)
/// /assignments               list assignments
/// /export/{format}           export all records as csv or json
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ninjas", ninja::router())
        .nest("/missions", mission::router())
        .nest("/export", export::router())
        .merge(assignment::router())
}
