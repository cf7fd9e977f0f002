//! Jutsu entity model.

use serde::Serialize;
use shinobi_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Type given to a jutsu created implicitly by name.
pub const DEFAULT_JUTSU_TYPE: &str = "unknown";

/// A row from the `jutsus` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Jutsu {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub jutsu_type: String,
    pub created_at: Timestamp,
}
