//! Assignment entity model and DTOs.

use serde::{Deserialize, Serialize};
use shinobi_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub ninja_id: DbId,
    pub mission_id: DbId,
    pub completed: bool,
    /// Set the first time the assignment is completed.
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Request body for `POST /api/assign`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAssignment {
    pub ninja_id: Option<DbId>,
    pub mission_id: Option<DbId>,
}

/// Request body for `POST /api/complete`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteAssignment {
    pub assignment_id: Option<DbId>,
}

/// An assignment with ninja and mission names resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentDetail {
    pub id: DbId,
    pub ninja_id: DbId,
    pub ninja: String,
    pub mission_id: DbId,
    pub mission: String,
    pub completed: bool,
}
