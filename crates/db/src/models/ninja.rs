//! Ninja entity model and DTOs.

use serde::{Deserialize, Serialize};
use shinobi_core::export::NinjaRecord;
use shinobi_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `ninjas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ninja {
    pub id: DbId,
    pub name: String,
    pub rank: String,
    pub attack: i32,
    pub defense: i32,
    pub chakra: i32,
    pub village_id: DbId,
    pub created_at: Timestamp,
}

/// Request body for creating a ninja.
///
/// `name`, `rank`, and `village` are required; the handler reports their
/// absence as invalid input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNinja {
    pub name: Option<String>,
    pub rank: Option<String>,
    pub village: Option<String>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub chakra: Option<i32>,
    pub jutsus: Option<Vec<String>>,
}

/// Validated insert input. The village and jutsus are referenced by name and
/// created on first use.
#[derive(Debug, Clone)]
pub struct NewNinja {
    pub name: String,
    pub rank: String,
    pub village: String,
    pub attack: i32,
    pub defense: i32,
    pub chakra: i32,
    pub jutsus: Vec<String>,
}

/// A ninja joined with its village name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NinjaWithVillage {
    pub id: DbId,
    pub name: String,
    pub rank: String,
    pub attack: i32,
    pub defense: i32,
    pub chakra: i32,
    pub village: String,
}

impl From<NinjaWithVillage> for NinjaRecord {
    fn from(row: NinjaWithVillage) -> Self {
        NinjaRecord {
            id: row.id,
            name: row.name,
            rank: row.rank,
            village: row.village,
            attack: row.attack,
            defense: row.defense,
            chakra: row.chakra,
        }
    }
}

/// Listing view: village name and jutsu names resolved.
#[derive(Debug, Clone, Serialize)]
pub struct NinjaDetail {
    pub id: DbId,
    pub name: String,
    pub rank: String,
    pub attack: i32,
    pub defense: i32,
    pub chakra: i32,
    pub village: String,
    pub jutsus: Vec<String>,
}
