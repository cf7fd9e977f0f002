//! Repository for the `missions` table.

use shinobi_core::rank::minimum_rank_for;
use shinobi_core::types::DbId;
use sqlx::PgPool;

use crate::models::mission::{Mission, NewMission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rank, reward, minimum_rank, created_at";

/// Provides create and read operations for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a mission, returning the created row.
    ///
    /// `minimum_rank` is derived from `rank` here and nowhere else.
    pub async fn create(pool: &PgPool, input: &NewMission) -> Result<Mission, sqlx::Error> {
        let minimum_rank = minimum_rank_for(&input.rank);
        let query = format!(
            "INSERT INTO missions (name, rank, reward, minimum_rank)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(&input.name)
            .bind(&input.rank)
            .bind(input.reward)
            .bind(minimum_rank.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all missions in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY id");
        sqlx::query_as::<_, Mission>(&query).fetch_all(pool).await
    }
}
