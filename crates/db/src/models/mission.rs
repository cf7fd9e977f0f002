//! Mission entity model and DTOs.

use serde::{Deserialize, Serialize};
use shinobi_core::export::MissionRecord;
use shinobi_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `missions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub name: String,
    pub rank: String,
    pub reward: f64,
    pub minimum_rank: String,
    #[serde(skip)]
    pub created_at: Timestamp,
}

impl From<Mission> for MissionRecord {
    fn from(row: Mission) -> Self {
        MissionRecord {
            id: row.id,
            name: row.name,
            rank: row.rank,
            reward: row.reward,
        }
    }
}

/// Request body for creating a mission. Has no `minimum_rank` field; that is
/// derived from `rank` on insert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMission {
    pub name: Option<String>,
    pub rank: Option<String>,
    pub reward: Option<f64>,
}

/// Validated insert input.
#[derive(Debug, Clone)]
pub struct NewMission {
    pub name: String,
    pub rank: String,
    pub reward: f64,
}
