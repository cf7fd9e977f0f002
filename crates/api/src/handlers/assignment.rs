//! Handlers for assigning missions to ninjas and completing assignments.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shinobi_core::error::CoreError;
use shinobi_core::rank::check_eligibility;
use shinobi_core::validation::require;
use shinobi_db::models::assignment::{AssignmentDetail, CompleteAssignment, CreateAssignment};
use shinobi_db::repositories::{AssignmentRepo, MissionRepo, NinjaRepo};

use crate::error::{AppError, AppResult};
use crate::response::{AssignResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/assign
///
/// Both ids must exist, and the ninja's rank must meet the mission's minimum
/// rank. Ranks are fixed at creation, so the check cannot go stale before the
/// insert.
pub async fn assign(
    State(state): State<AppState>,
    payload: Result<Json<CreateAssignment>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AssignResponse>)> {
    let Json(input) = payload?;
    let ninja_id = require(input.ninja_id, "ninja_id")?;
    let mission_id = require(input.mission_id, "mission_id")?;

    let ninja = NinjaRepo::find_by_id(&state.pool, ninja_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ninja",
            id: ninja_id,
        }))?;
    let mission = MissionRepo::find_by_id(&state.pool, mission_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mission",
            id: mission_id,
        }))?;

    if let Err(err) = check_eligibility(&ninja.rank, &mission.minimum_rank) {
        tracing::info!(
            ninja_id,
            mission_id,
            ninja_rank = %ninja.rank,
            required_rank = %mission.minimum_rank,
            "Assignment rejected: rank insufficient"
        );
        return Err(err.into());
    }

    let assignment = AssignmentRepo::create(&state.pool, ninja.id, mission.id).await?;
    tracing::info!(
        assignment_id = assignment.id,
        ninja_id,
        mission_id,
        "Mission assigned"
    );
    Ok((
        StatusCode::CREATED,
        Json(AssignResponse {
            message: "Mission assigned",
            assignment_id: assignment.id,
        }),
    ))
}

/// POST /api/complete
///
/// Completing an already-completed assignment succeeds without change.
pub async fn complete(
    State(state): State<AppState>,
    payload: Result<Json<CompleteAssignment>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(input) = payload?;
    let assignment_id = require(input.assignment_id, "assignment_id")?;

    let assignment = AssignmentRepo::complete(&state.pool, assignment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Assignment",
            id: assignment_id,
        }))?;
    tracing::info!(assignment_id = assignment.id, "Assignment completed");

    Ok(Json(MessageResponse {
        message: "Mission completed",
    }))
}

/// GET /api/assignments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AssignmentDetail>>> {
    let assignments = AssignmentRepo::list_details(&state.pool).await?;
    Ok(Json(assignments))
}
