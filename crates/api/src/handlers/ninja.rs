//! Handlers for the `/ninjas` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shinobi_core::validation::{normalize_jutsu_names, require_text};
use shinobi_db::models::ninja::{CreateNinja, NewNinja, NinjaDetail};
use shinobi_db::repositories::NinjaRepo;

use crate::error::AppResult;
use crate::response::IdResponse;
use crate::state::AppState;

/// POST /api/ninjas
///
/// `name`, `rank`, and `village` are required. Stats default to 0. The village
/// and every listed jutsu are created on first reference.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateNinja>, JsonRejection>,
) -> AppResult<(StatusCode, Json<IdResponse>)> {
    let Json(input) = payload?;
    let new_ninja = NewNinja {
        name: require_text(input.name, "name")?,
        rank: require_text(input.rank, "rank")?,
        village: require_text(input.village, "village")?,
        attack: input.attack.unwrap_or(0),
        defense: input.defense.unwrap_or(0),
        chakra: input.chakra.unwrap_or(0),
        jutsus: normalize_jutsu_names(input.jutsus.unwrap_or_default())?,
    };

    let ninja = NinjaRepo::create(&state.pool, &new_ninja).await?;
    tracing::info!(
        ninja_id = ninja.id,
        village_id = ninja.village_id,
        jutsu_count = new_ninja.jutsus.len(),
        "Ninja created"
    );
    Ok((StatusCode::CREATED, Json(IdResponse { id: ninja.id })))
}

/// GET /api/ninjas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NinjaDetail>>> {
    let ninjas = NinjaRepo::list_details(&state.pool).await?;
    Ok(Json(ninjas))
}
