//! Handler for full-registry export.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use shinobi_core::export::{export, ExportFormat, MissionRecord, NinjaRecord};
use shinobi_db::repositories::{MissionRepo, NinjaRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/export/{format}
///
/// Renders every ninja, then every mission, as `csv` or `json`. Any other
/// format is rejected before touching the database.
pub async fn export_all(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> AppResult<Response> {
    let format: ExportFormat = format.parse()?;

    let ninjas: Vec<NinjaRecord> = NinjaRepo::list_with_village(&state.pool)
        .await?
        .into_iter()
        .map(NinjaRecord::from)
        .collect();
    let missions: Vec<MissionRecord> = MissionRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(MissionRecord::from)
        .collect();

    let body = export(format, &ninjas, &missions)?;
    tracing::info!(
        format = format.file_extension(),
        ninjas = ninjas.len(),
        missions = missions.len(),
        "Registry exported"
    );

    let disposition = format!(
        "attachment; filename=\"shinobi-export.{}\"",
        format.file_extension()
    );
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
