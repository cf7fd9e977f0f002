//! Repository for the `villages` table.

use sqlx::{Postgres, Transaction};

use crate::models::village::Village;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides lookup-or-create for villages.
pub struct VillageRepo;

impl VillageRepo {
    /// Return the village with `name`, inserting it first if it does not
    /// exist, inside an existing transaction.
    ///
    /// A single `ON CONFLICT` upsert, so concurrent callers with the same name
    /// always converge on one row. The no-op `DO UPDATE` makes `RETURNING`
    /// yield the existing row on conflict.
    pub async fn find_or_create_tx(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Village, sqlx::Error> {
        let query = format!(
            "INSERT INTO villages (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Village>(&query)
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }
}
