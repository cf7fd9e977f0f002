//! Repository for the `jutsus` and `ninja_jutsus` tables.

use std::collections::HashMap;

use shinobi_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::jutsu::{Jutsu, DEFAULT_JUTSU_TYPE};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, type, created_at";

/// Provides lookup-or-create for jutsus and ninja-jutsu associations.
pub struct JutsuRepo;

impl JutsuRepo {
    /// Return the jutsus named in `names`, inserting any that do not exist
    /// with [`DEFAULT_JUTSU_TYPE`]. Existing jutsus keep their type.
    ///
    /// Missing names are inserted in one statement, in name order, with
    /// `ON CONFLICT DO NOTHING`. Existing rows are never locked, and
    /// concurrent inserts of the same new names always wait on each other in
    /// the same order, so two transactions cannot deadlock here.
    pub async fn find_or_create_all_tx(
        tx: &mut Transaction<'_, Postgres>,
        names: &[String],
    ) -> Result<Vec<Jutsu>, sqlx::Error> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query(
            "INSERT INTO jutsus (name, type) \
             SELECT DISTINCT t.name, $2::text FROM unnest($1::text[]) AS t(name) \
             ORDER BY t.name \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(names)
        .bind(DEFAULT_JUTSU_TYPE)
        .execute(&mut **tx)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM jutsus WHERE name = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Jutsu>(&query)
            .bind(names)
            .fetch_all(&mut **tx)
            .await
    }

    /// Link jutsus to a ninja. Linking the same pair twice is a no-op.
    pub async fn attach_all_tx(
        tx: &mut Transaction<'_, Postgres>,
        ninja_id: DbId,
        jutsu_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO ninja_jutsus (ninja_id, jutsu_id) \
             SELECT $1, unnest($2::bigint[]) \
             ON CONFLICT DO NOTHING",
        )
        .bind(ninja_id)
        .bind(jutsu_ids)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Jutsu names for every ninja, keyed by ninja id. One query for the whole
    /// table so listings avoid a per-ninja round trip.
    pub async fn names_by_ninja(pool: &PgPool) -> Result<HashMap<DbId, Vec<String>>, sqlx::Error> {
        let rows: Vec<(DbId, String)> = sqlx::query_as(
            "SELECT nj.ninja_id, j.name \
             FROM ninja_jutsus nj \
             JOIN jutsus j ON j.id = nj.jutsu_id \
             ORDER BY nj.ninja_id, j.id",
        )
        .fetch_all(pool)
        .await?;

        let mut names: HashMap<DbId, Vec<String>> = HashMap::new();
        for (ninja_id, name) in rows {
            names.entry(ninja_id).or_default().push(name);
        }
        Ok(names)
    }
}
