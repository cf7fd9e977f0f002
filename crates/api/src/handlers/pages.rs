//! Handlers for the HTML pages.

use axum::extract::State;
use axum::response::Html;
use shinobi_db::repositories::{AssignmentRepo, MissionRepo, NinjaRepo};

use crate::error::AppResult;
use crate::pages::{render_index, render_reports};
use crate::state::AppState;

/// GET /
pub async fn index() -> Html<String> {
    Html(render_index())
}

/// GET /reports
pub async fn reports(State(state): State<AppState>) -> AppResult<Html<String>> {
    let ninjas = NinjaRepo::list_with_village(&state.pool).await?;
    let missions = MissionRepo::list(&state.pool).await?;
    let assignments = AssignmentRepo::list_details(&state.pool).await?;
    Ok(Html(render_reports(&ninjas, &missions, &assignments)))
}
