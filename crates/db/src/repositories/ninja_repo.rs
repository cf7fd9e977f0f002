//! Repository for the `ninjas` table.

use shinobi_core::types::DbId;
use sqlx::PgPool;

use crate::models::ninja::{NewNinja, Ninja, NinjaDetail, NinjaWithVillage};
use crate::repositories::{JutsuRepo, VillageRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rank, attack, defense, chakra, village_id, created_at";

/// Column list for queries joined with `villages` (aliased `v`).
const WITH_VILLAGE_COLUMNS: &str =
    "n.id, n.name, n.rank, n.attack, n.defense, n.chakra, v.name AS village";

/// Provides create and read operations for ninjas.
pub struct NinjaRepo;

impl NinjaRepo {
    /// Insert a ninja along with its village and jutsu links, returning the
    /// created row.
    ///
    /// The village and each jutsu are looked up by name or created. Everything
    /// happens in one transaction, so a failure leaves no partial ninja behind.
    pub async fn create(pool: &PgPool, input: &NewNinja) -> Result<Ninja, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let village = VillageRepo::find_or_create_tx(&mut tx, &input.village).await?;

        let query = format!(
            "INSERT INTO ninjas (name, rank, attack, defense, chakra, village_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let ninja = sqlx::query_as::<_, Ninja>(&query)
            .bind(&input.name)
            .bind(&input.rank)
            .bind(input.attack)
            .bind(input.defense)
            .bind(input.chakra)
            .bind(village.id)
            .fetch_one(&mut *tx)
            .await?;

        let jutsu_ids: Vec<DbId> = JutsuRepo::find_or_create_all_tx(&mut tx, &input.jutsus)
            .await?
            .into_iter()
            .map(|j| j.id)
            .collect();
        if !jutsu_ids.is_empty() {
            JutsuRepo::attach_all_tx(&mut tx, ninja.id, &jutsu_ids).await?;
        }

        tx.commit().await?;
        Ok(ninja)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ninja>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ninjas WHERE id = $1");
        sqlx::query_as::<_, Ninja>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all ninjas with their village name, in insertion order.
    pub async fn list_with_village(pool: &PgPool) -> Result<Vec<NinjaWithVillage>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_VILLAGE_COLUMNS} \
             FROM ninjas n \
             JOIN villages v ON v.id = n.village_id \
             ORDER BY n.id"
        );
        sqlx::query_as::<_, NinjaWithVillage>(&query)
            .fetch_all(pool)
            .await
    }

    /// List all ninjas with village and jutsu names resolved.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<NinjaDetail>, sqlx::Error> {
        let ninjas = Self::list_with_village(pool).await?;
        let mut jutsus = JutsuRepo::names_by_ninja(pool).await?;

        Ok(ninjas
            .into_iter()
            .map(|n| NinjaDetail {
                jutsus: jutsus.remove(&n.id).unwrap_or_default(),
                id: n.id,
                name: n.name,
                rank: n.rank,
                attack: n.attack,
                defense: n.defense,
                chakra: n.chakra,
                village: n.village,
            })
            .collect())
    }
}
