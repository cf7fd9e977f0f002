//! Handlers for the `/missions` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shinobi_core::validation::{require, require_text};
use shinobi_db::models::mission::{CreateMission, Mission, NewMission};
use shinobi_db::repositories::MissionRepo;

use crate::error::AppResult;
use crate::response::IdResponse;
use crate::state::AppState;

/// POST /api/missions
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateMission>, JsonRejection>,
) -> AppResult<(StatusCode, Json<IdResponse>)> {
    let Json(input) = payload?;
    let new_mission = NewMission {
        name: require_text(input.name, "name")?,
        rank: require_text(input.rank, "rank")?,
        reward: require(input.reward, "reward")?,
    };

    let mission = MissionRepo::create(&state.pool, &new_mission).await?;
    tracing::info!(
        mission_id = mission.id,
        rank = %mission.rank,
        minimum_rank = %mission.minimum_rank,
        "Mission created"
    );
    Ok((StatusCode::CREATED, Json(IdResponse { id: mission.id })))
}

/// GET /api/missions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Mission>>> {
    let missions = MissionRepo::list(&state.pool).await?;
    Ok(Json(missions))
}
