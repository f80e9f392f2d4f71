//! `PostgreSQL`-backed record store for the engine.
//!
//! [`PgZooStore`] implements the engine's [`ZooStore`] trait on top of the
//! `zoo-db` table stores. Every call is its own statement; there is no
//! surrounding transaction, so a failed run keeps the assignments it had
//! already written.

use zoo_core::store::ZooStore;
use zoo_db::{DbError, PostgresPool};
use zoo_types::{Animal, AnimalId, Enclosure, EnclosureId, NewEnclosure};

/// A [`ZooStore`] reading and writing the `animals` and `enclosures`
/// tables.
#[derive(Clone)]
pub struct PgZooStore {
    pool: PostgresPool,
}

impl PgZooStore {
    /// Wrap a connected pool.
    pub const fn new(pool: PostgresPool) -> Self {
        Self { pool }
    }
}

impl ZooStore for PgZooStore {
    type Error = DbError;

    async fn list_animals(&self) -> Result<Vec<Animal>, DbError> {
        self.pool
            .animals()
            .list_all()
            .await?
            .into_iter()
            .map(Animal::try_from)
            .collect()
    }

    async fn list_unassigned_animals(&self) -> Result<Vec<Animal>, DbError> {
        self.pool
            .animals()
            .list_unassigned()
            .await?
            .into_iter()
            .map(Animal::try_from)
            .collect()
    }

    async fn list_enclosures_with_animals(&self) -> Result<Vec<Enclosure>, DbError> {
        self.pool.enclosures_with_animals().await
    }

    async fn persist_animal_enclosure(
        &mut self,
        animal_id: AnimalId,
        enclosure_id: Option<EnclosureId>,
    ) -> Result<(), DbError> {
        self.pool.animals().set_enclosure(animal_id, enclosure_id).await
    }

    async fn create_enclosure(&mut self, enclosure: &NewEnclosure) -> Result<EnclosureId, DbError> {
        self.pool.enclosures().insert(enclosure).await
    }
}
