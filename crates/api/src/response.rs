//! Shared response body types for API handlers.

use serde::Serialize;
use shinobi_core::types::DbId;

/// `{ "id": ... }` body returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: DbId,
}

/// `{ "message": ... }` body returned by action endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body returned by `POST /api/assign`: the confirmation message plus the new
/// assignment's id, which the caller needs to complete it later.
#[derive(Debug, Serialize)]
pub struct AssignResponse {
    pub message: &'static str,
    pub assignment_id: DbId,
}
