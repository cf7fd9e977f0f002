//! Repository for the `assignments` table.

use shinobi_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::{Assignment, AssignmentDetail};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, ninja_id, mission_id, completed, completed_at, created_at";

/// Provides create, complete, and read operations for assignments.
///
/// Eligibility is checked by the caller before [`AssignmentRepo::create`];
/// this layer only persists.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new, not-yet-completed assignment.
    pub async fn create(
        pool: &PgPool,
        ninja_id: DbId,
        mission_id: DbId,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (ninja_id, mission_id, completed)
             VALUES ($1, $2, FALSE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(ninja_id)
            .bind(mission_id)
            .fetch_one(pool)
            .await
    }

    /// Mark an assignment completed.
    ///
    /// Completing an already-completed assignment succeeds and keeps the
    /// original `completed_at`. Returns `None` if no row with `id` exists.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!(
            "UPDATE assignments SET
                completed = TRUE,
                completed_at = COALESCE(completed_at, NOW())
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assignments with ninja and mission names, in insertion order.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<AssignmentDetail>, sqlx::Error> {
        sqlx::query_as::<_, AssignmentDetail>(
            "SELECT a.id, a.ninja_id, n.name AS ninja, a.mission_id, m.name AS mission, a.completed \
             FROM assignments a \
             JOIN ninjas n ON n.id = a.ninja_id \
             JOIN missions m ON m.id = a.mission_id \
             ORDER BY a.id",
        )
        .fetch_all(pool)
        .await
    }
}
