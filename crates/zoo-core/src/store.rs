//! The record store the engine reads from and writes to.
//!
//! The engine never talks to a database directly. It consumes the
//! [`ZooStore`] trait, which covers exactly what placement and the reports
//! need: list animals, list enclosures with their occupants, persist one
//! animal's enclosure, and create an enclosure. Errors from the store are
//! passed through to the caller untouched.
//!
//! [`InMemoryStore`] is a complete implementation backed by ordered maps,
//! used by tests and by callers that keep their records in memory.

use std::collections::BTreeMap;

use zoo_types::{Animal, AnimalId, Enclosure, EnclosureId, NewEnclosure};

/// Read/write access to animal and enclosure records.
///
/// Every call stands alone; the engine makes no assumption about
/// transactions. Writes already made stay made when a later call fails.
pub trait ZooStore: Send + Sync {
    /// Error type of the backing store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// All animals, assigned or not.
    fn list_animals(&self) -> impl Future<Output = Result<Vec<Animal>, Self::Error>> + Send;

    /// Animals with no enclosure.
    fn list_unassigned_animals(
        &self,
    ) -> impl Future<Output = Result<Vec<Animal>, Self::Error>> + Send;

    /// All enclosures in storage order, each with its occupants.
    fn list_enclosures_with_animals(
        &self,
    ) -> impl Future<Output = Result<Vec<Enclosure>, Self::Error>> + Send;

    /// Set or clear an animal's enclosure.
    fn persist_animal_enclosure(
        &mut self,
        animal_id: AnimalId,
        enclosure_id: Option<EnclosureId>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Create an enclosure and return its new identifier.
    fn create_enclosure(
        &mut self,
        enclosure: &NewEnclosure,
    ) -> impl Future<Output = Result<EnclosureId, Self::Error>> + Send;
}

/// Errors from [`InMemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No animal with this id.
    #[error("animal not found: {0}")]
    AnimalNotFound(AnimalId),

    /// No enclosure with this id.
    #[error("enclosure not found: {0}")]
    EnclosureNotFound(EnclosureId),
}

/// A [`ZooStore`] that keeps everything in memory.
///
/// Enclosures are listed in creation order and get ids counting up from 1.
/// Animals keep the id they were inserted with and are listed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    animals: BTreeMap<AnimalId, Animal>,
    enclosures: Vec<Enclosure>,
    next_enclosure_id: i64,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an animal, keyed by its id.
    pub fn insert_animal(&mut self, animal: Animal) {
        self.animals.insert(animal.id, animal);
    }

    /// Add an enclosure without occupants and return its id.
    pub fn insert_enclosure(&mut self, enclosure: NewEnclosure) -> EnclosureId {
        self.next_enclosure_id = self.next_enclosure_id.saturating_add(1);
        let id = EnclosureId::new(self.next_enclosure_id);
        self.enclosures.push(Enclosure::from_new(id, enclosure));
        id
    }

    /// Look up an animal.
    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.get(&id)
    }

    /// Number of enclosures stored.
    pub fn enclosure_count(&self) -> usize {
        self.enclosures.len()
    }

    /// Enclosures with their occupants attached.
    pub fn enclosures(&self) -> Vec<Enclosure> {
        self.enclosures
            .iter()
            .map(|e| {
                let mut enclosure = e.clone();
                enclosure.animals = self
                    .animals
                    .values()
                    .filter(|a| a.enclosure_id == Some(e.id))
                    .cloned()
                    .collect();
                enclosure
            })
            .collect()
    }
}

impl ZooStore for InMemoryStore {
    type Error = StoreError;

    async fn list_animals(&self) -> Result<Vec<Animal>, StoreError> {
        Ok(self.animals.values().cloned().collect())
    }

    async fn list_unassigned_animals(&self) -> Result<Vec<Animal>, StoreError> {
        Ok(self
            .animals
            .values()
            .filter(|a| a.enclosure_id.is_none())
            .cloned()
            .collect())
    }

    async fn list_enclosures_with_animals(&self) -> Result<Vec<Enclosure>, StoreError> {
        Ok(self.enclosures())
    }

    async fn persist_animal_enclosure(
        &mut self,
        animal_id: AnimalId,
        enclosure_id: Option<EnclosureId>,
    ) -> Result<(), StoreError> {
        if let Some(id) = enclosure_id {
            if !self.enclosures.iter().any(|e| e.id == id) {
                return Err(StoreError::EnclosureNotFound(id));
            }
        }
        let animal = self
            .animals
            .get_mut(&animal_id)
            .ok_or(StoreError::AnimalNotFound(animal_id))?;
        animal.enclosure_id = enclosure_id;
        Ok(())
    }

    async fn create_enclosure(&mut self, enclosure: &NewEnclosure) -> Result<EnclosureId, StoreError> {
        Ok(self.insert_enclosure(enclosure.clone()))
    }
}
