//! Village entity model.

use serde::Serialize;
use shinobi_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `villages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Village {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
