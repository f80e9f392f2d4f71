//! Automatic enclosure assignment.
//!
//! A greedy first-fit run over the animals that have no enclosure:
//!
//! 1. **Reset** (optional) -- unassign every animal in the store.
//! 2. **Order** -- sort the unassigned animals by space requirement, then
//!    security requirement, both descending. The sort is stable, so ties
//!    keep the order the store returned them in. Large, dangerous animals
//!    go first because they are the hardest to fit.
//! 3. **Place** -- for each animal, take the first enclosure (in store
//!    order) that passes [`can_place`]. If none does, create an enclosure
//!    sized for the animal and put it there.
//!
//! The run works on one snapshot of enclosures fetched after the reset.
//! That list is owned by the run and updated as animals are placed and
//! enclosures created, so each placement sees the ones before it. Every
//! assignment is persisted immediately; if the store fails midway, the
//! error is returned and earlier writes stay in place.

use core::cmp::Reverse;
use core::fmt;

use rust_decimal::Decimal;
use tracing::{debug, info};
use zoo_types::{Animal, Enclosure, NewEnclosure};

use crate::compatibility::{can_place, placement_rejection};
use crate::config::PlannerConfig;
use crate::store::ZooStore;

/// Counts from one auto-assign run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoAssignSummary {
    /// Animals that received an enclosure.
    pub assigned: usize,
    /// Enclosures created because nothing existing fit.
    pub enclosures_created: usize,
}

impl fmt::Display for AutoAssignSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Auto-assign complete: {} animals assigned, {} new enclosures created",
            self.assigned, self.enclosures_created
        )
    }
}

/// Sort animals into placement order: space requirement descending, then
/// security requirement descending, ties in input order.
pub fn sort_for_placement(animals: &mut [Animal]) {
    animals.sort_by_key(|a| (Reverse(a.space_requirement), Reverse(a.security_requirement)));
}

/// Index of the first enclosure that can take `animal`.
pub fn find_suitable_enclosure(animal: &Animal, enclosures: &[Enclosure]) -> Option<usize> {
    enclosures.iter().position(|e| can_place(animal, e))
}

/// Places unassigned animals into enclosures.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner with the given settings.
    pub const fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The enclosure created for an animal nothing else can hold.
    ///
    /// Named after the species, sized at `capacity_multiplier` times the
    /// animal's space requirement (saturating), secured exactly at the
    /// animal's requirement.
    pub fn enclosure_for(&self, animal: &Animal) -> NewEnclosure {
        let size = animal
            .space_requirement
            .checked_mul(Decimal::from(self.config.capacity_multiplier))
            .unwrap_or(Decimal::MAX);
        NewEnclosure {
            name: format!("Enclosure {}", animal.species),
            climate: self.config.default_climate,
            habitat_type: self.config.default_habitat,
            security_level: animal.security_requirement,
            size,
        }
    }

    /// Run one auto-assign pass against `store`.
    ///
    /// With `clear_existing`, every animal is unassigned first. Running
    /// twice without clearing places nothing the second time.
    ///
    /// # Errors
    ///
    /// Returns the store's error unchanged. Assignments persisted before
    /// the failure are not rolled back.
    pub async fn auto_assign<S: ZooStore>(
        &self,
        store: &mut S,
        clear_existing: bool,
    ) -> Result<AutoAssignSummary, S::Error> {
        if clear_existing {
            let cleared = clear_assignments(store).await?;
            info!(cleared, "Cleared existing enclosure assignments");
        }

        let mut animals = store.list_unassigned_animals().await?;
        sort_for_placement(&mut animals);
        let mut enclosures = store.list_enclosures_with_animals().await?;

        debug!(
            unassigned = animals.len(),
            enclosures = enclosures.len(),
            "Starting auto-assign"
        );

        let mut summary = AutoAssignSummary::default();

        for animal in animals {
            let suitable = find_suitable_enclosure(&animal, &enclosures);
            match suitable.and_then(|i| enclosures.get_mut(i)) {
                Some(enclosure) => {
                    place(store, animal, enclosure).await?;
                }
                None => {
                    log_rejections(&animal, &enclosures);
                    let new = self.enclosure_for(&animal);
                    let id = store.create_enclosure(&new).await?;
                    info!(
                        enclosure_id = %id,
                        name = new.name,
                        size = %new.size,
                        security = %new.security_level,
                        "Created enclosure"
                    );
                    let mut enclosure = Enclosure::from_new(id, new);
                    place(store, animal, &mut enclosure).await?;
                    enclosures.push(enclosure);
                    summary.enclosures_created = summary.enclosures_created.saturating_add(1);
                }
            }
            summary.assigned = summary.assigned.saturating_add(1);
        }

        info!(
            assigned = summary.assigned,
            enclosures_created = summary.enclosures_created,
            "Auto-assign complete"
        );
        Ok(summary)
    }
}

/// Unassign every animal that has an enclosure. Returns how many changed.
async fn clear_assignments<S: ZooStore>(store: &mut S) -> Result<usize, S::Error> {
    let mut cleared: usize = 0;
    for animal in store.list_animals().await? {
        if animal.enclosure_id.is_some() {
            store.persist_animal_enclosure(animal.id, None).await?;
            cleared = cleared.saturating_add(1);
        }
    }
    Ok(cleared)
}

/// Persist the assignment, then mirror it in the run's enclosure list.
async fn place<S: ZooStore>(
    store: &mut S,
    mut animal: Animal,
    enclosure: &mut Enclosure,
) -> Result<(), S::Error> {
    store
        .persist_animal_enclosure(animal.id, Some(enclosure.id))
        .await?;
    debug!(
        animal_id = %animal.id,
        animal = animal.name,
        enclosure_id = %enclosure.id,
        enclosure = enclosure.name,
        "Assigned animal"
    );
    animal.enclosure_id = Some(enclosure.id);
    enclosure.animals.push(animal);
    Ok(())
}

fn log_rejections(animal: &Animal, enclosures: &[Enclosure]) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    for enclosure in enclosures {
        if let Some(reason) = placement_rejection(animal, enclosure) {
            debug!(
                animal = animal.name,
                enclosure = enclosure.name,
                ?reason,
                "Enclosure rejected"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use zoo_types::{
        AnimalId, Climate, DietaryClass, EnclosureId, HabitatType, SecurityLevel,
    };

    use super::*;
    use crate::store::{InMemoryStore, StoreError};

    fn pen(name: &str, security: SecurityLevel, size: Decimal) -> NewEnclosure {
        NewEnclosure {
            name: name.to_owned(),
            climate: Climate::Tropical,
            habitat_type: HabitatType::Grassland,
            security_level: security,
            size,
        }
    }

    fn animal(id: i64, name: &str, species: &str, space: Decimal, security: SecurityLevel) -> Animal {
        Animal::new(AnimalId::new(id), name, species)
            .with_space(space)
            .with_security(security)
    }

    #[test]
    fn placement_order_is_space_then_security_descending() {
        let mut animals = vec![
            animal(1, "a", "Ant", dec!(10), SecurityLevel::High),
            animal(2, "b", "Bear", dec!(50), SecurityLevel::Low),
            animal(3, "c", "Cat", dec!(10), SecurityLevel::Low),
            animal(4, "d", "Dog", dec!(50), SecurityLevel::High),
            animal(5, "e", "Eel", dec!(10), SecurityLevel::High),
        ];
        sort_for_placement(&mut animals);
        let order: Vec<_> = animals.iter().map(|a| a.id.into_inner()).collect();
        assert_eq!(order, vec![4, 2, 1, 5, 3]);
    }

    #[test]
    fn created_enclosure_is_twice_the_animal() {
        let planner = Planner::default();
        let tiger = animal(1, "Shere Khan", "Bengal tiger", dec!(75.5), SecurityLevel::High);
        let new = planner.enclosure_for(&tiger);
        assert_eq!(new.name, "Enclosure Bengal tiger");
        assert_eq!(new.size, dec!(151.0));
        assert_eq!(new.security_level, SecurityLevel::High);
        assert_eq!(new.climate, Climate::Temperate);
        assert_eq!(new.habitat_type, HabitatType::Grassland);
    }

    #[test]
    fn created_enclosure_size_saturates() {
        let planner = Planner::default();
        let huge = animal(1, "Godzilla", "Kaiju", Decimal::MAX, SecurityLevel::High);
        assert_eq!(planner.enclosure_for(&huge).size, Decimal::MAX);
    }

    #[test]
    fn suitable_enclosure_is_the_first_that_fits() {
        let zebra = animal(1, "Marty", "Zebra", dec!(100), SecurityLevel::Medium);
        let enclosures = vec![
            Enclosure::from_new(EnclosureId::new(1), pen("Klein", SecurityLevel::High, dec!(50))),
            Enclosure::from_new(EnclosureId::new(2), pen("Open", SecurityLevel::Low, dec!(500))),
            Enclosure::from_new(EnclosureId::new(3), pen("Savanne", SecurityLevel::Medium, dec!(500))),
            Enclosure::from_new(EnclosureId::new(4), pen("Groot", SecurityLevel::High, dec!(900))),
        ];
        assert_eq!(find_suitable_enclosure(&zebra, &enclosures), Some(2));
        assert_eq!(find_suitable_enclosure(&zebra, enclosures.get(..2).unwrap_or_default()), None);
        assert_eq!(find_suitable_enclosure(&zebra, &[]), None);
    }

    #[tokio::test]
    async fn largest_animal_claims_the_enclosure_first() {
        let mut store = InMemoryStore::new();
        let existing = store.insert_enclosure(pen("Neushoornverblijf", SecurityLevel::High, dec!(500)));
        // Stored order puts the smaller animal first; placement order must not.
        store.insert_animal(animal(1, "B", "Zebra", dec!(300), SecurityLevel::Medium));
        store.insert_animal(animal(2, "A", "Rhino", dec!(500), SecurityLevel::High));

        let summary = Planner::default().auto_assign(&mut store, false).await;
        assert_eq!(
            summary,
            Ok(AutoAssignSummary {
                assigned: 2,
                enclosures_created: 1,
            })
        );
        assert_eq!(store.animal(AnimalId::new(2)).and_then(|a| a.enclosure_id), Some(existing));
        assert_eq!(
            store.animal(AnimalId::new(1)).and_then(|a| a.enclosure_id),
            Some(EnclosureId::new(2))
        );
        assert_eq!(
            store.enclosures().get(1).map(|e| (e.name.clone(), e.size)),
            Some(("Enclosure Zebra".to_owned(), dec!(600)))
        );
    }

    #[tokio::test]
    async fn fills_existing_enclosure_without_creating() {
        let mut store = InMemoryStore::new();
        let existing = store.insert_enclosure(pen("Savanne", SecurityLevel::High, dec!(1000)));
        store.insert_animal(animal(1, "B", "Zebra", dec!(300), SecurityLevel::Medium));
        store.insert_animal(animal(2, "A", "Rhino", dec!(500), SecurityLevel::High));

        let summary = Planner::default().auto_assign(&mut store, false).await;
        assert_eq!(
            summary,
            Ok(AutoAssignSummary {
                assigned: 2,
                enclosures_created: 0,
            })
        );
        assert_eq!(
            summary.map(|s| s.to_string()).unwrap_or_default(),
            "Auto-assign complete: 2 animals assigned, 0 new enclosures created"
        );
        assert_eq!(store.enclosure_count(), 1);

        let enclosures = store.enclosures();
        let names: Vec<_> = enclosures
            .first()
            .map(|e| e.animals.iter().map(|a| a.name.clone()).collect())
            .unwrap_or_default();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(store.animal(AnimalId::new(1)).and_then(|a| a.enclosure_id), Some(existing));
        assert_eq!(store.animal(AnimalId::new(2)).and_then(|a| a.enclosure_id), Some(existing));
    }

    #[tokio::test]
    async fn creates_enclosure_when_none_exist() {
        let mut store = InMemoryStore::new();
        store.insert_animal(animal(1, "C", "Snow leopard", dec!(50), SecurityLevel::High));

        let summary = Planner::default().auto_assign(&mut store, false).await;
        assert_eq!(
            summary.map(|s| s.to_string()).unwrap_or_default(),
            "Auto-assign complete: 1 animals assigned, 1 new enclosures created"
        );

        let enclosures = store.enclosures();
        assert_eq!(enclosures.len(), 1);
        let created = enclosures.first();
        assert_eq!(created.map(|e| e.size), Some(dec!(100)));
        assert_eq!(created.map(|e| e.security_level), Some(SecurityLevel::High));
        assert_eq!(created.map(|e| e.animals.len()), Some(1));
    }

    #[tokio::test]
    async fn second_run_is_a_no_op() {
        let mut store = InMemoryStore::new();
        store.insert_enclosure(pen("Savanne", SecurityLevel::Medium, dec!(100)));
        store.insert_animal(animal(1, "Marty", "Zebra", dec!(60), SecurityLevel::Low));
        store.insert_animal(animal(2, "Melman", "Giraffe", dec!(60), SecurityLevel::Low));
        store.insert_animal(animal(3, "Alex", "Lion", dec!(30), SecurityLevel::High));

        let planner = Planner::default();
        let first = planner.auto_assign(&mut store, false).await;
        assert_eq!(first.map(|s| s.assigned), Ok(3));

        let second = planner.auto_assign(&mut store, false).await;
        assert_eq!(second, Ok(AutoAssignSummary::default()));
    }

    #[tokio::test]
    async fn created_enclosure_is_reused_within_the_run() {
        let mut store = InMemoryStore::new();
        store.insert_animal(animal(1, "Dumbo", "Elephant", dec!(100), SecurityLevel::Low));
        store.insert_animal(animal(2, "Jumbo", "Elephant", dec!(80), SecurityLevel::Low));

        let summary = Planner::default().auto_assign(&mut store, false).await;
        assert_eq!(
            summary,
            Ok(AutoAssignSummary {
                assigned: 2,
                enclosures_created: 1,
            })
        );
        assert_eq!(store.enclosures().first().map(|e| e.animals.len()), Some(2));
    }

    #[tokio::test]
    async fn predator_and_prey_are_separated() {
        let mut store = InMemoryStore::new();
        store.insert_enclosure(pen("Savanne", SecurityLevel::High, dec!(1000)));
        store.insert_animal(
            animal(1, "Alex", "Lion", dec!(200), SecurityLevel::High)
                .with_diet(DietaryClass::Carnivore)
                .with_prey("zebra"),
        );
        store.insert_animal(animal(2, "Marty", "Zebra", dec!(100), SecurityLevel::Low));

        let summary = Planner::default().auto_assign(&mut store, false).await;
        assert_eq!(summary.map(|s| s.enclosures_created), Ok(1));

        let lion = store.animal(AnimalId::new(1)).and_then(|a| a.enclosure_id);
        let zebra = store.animal(AnimalId::new(2)).and_then(|a| a.enclosure_id);
        assert_eq!(lion, Some(EnclosureId::new(1)));
        assert_eq!(zebra, Some(EnclosureId::new(2)));
    }

    #[tokio::test]
    async fn security_too_low_forces_new_enclosure() {
        let mut store = InMemoryStore::new();
        store.insert_enclosure(pen("Kinderboerderij", SecurityLevel::Low, dec!(1000)));
        store.insert_animal(animal(1, "Shere Khan", "Tiger", dec!(50), SecurityLevel::High));

        let summary = Planner::default().auto_assign(&mut store, false).await;
        assert_eq!(summary.map(|s| s.enclosures_created), Ok(1));
        assert_eq!(
            store.animal(AnimalId::new(1)).and_then(|a| a.enclosure_id),
            Some(EnclosureId::new(2))
        );
    }

    #[tokio::test]
    async fn clear_existing_reassigns_everything() {
        let mut store = InMemoryStore::new();
        let small = store.insert_enclosure(pen("Klein", SecurityLevel::Low, dec!(10)));
        store.insert_enclosure(pen("Groot", SecurityLevel::Low, dec!(1000)));
        // Over capacity on purpose: the store accepts it.
        store.insert_animal(animal(1, "Dumbo", "Elephant", dec!(400), SecurityLevel::Low).in_enclosure(small));
        store.insert_animal(animal(2, "Marty", "Zebra", dec!(5), SecurityLevel::Low));

        let summary = Planner::default().auto_assign(&mut store, true).await;
        assert_eq!(
            summary,
            Ok(AutoAssignSummary {
                assigned: 2,
                enclosures_created: 0,
            })
        );
        // Dumbo (larger) goes first; it only fits in Groot. Marty then fits in Klein.
        assert_eq!(
            store.animal(AnimalId::new(1)).and_then(|a| a.enclosure_id),
            Some(EnclosureId::new(2))
        );
        assert_eq!(store.animal(AnimalId::new(2)).and_then(|a| a.enclosure_id), Some(small));
    }

    #[tokio::test]
    async fn existing_occupants_count_against_capacity() {
        let mut store = InMemoryStore::new();
        let full = store.insert_enclosure(pen("Vol", SecurityLevel::Low, dec!(100)));
        store.insert_animal(animal(1, "Dumbo", "Elephant", dec!(90), SecurityLevel::Low).in_enclosure(full));
        store.insert_animal(animal(2, "Marty", "Zebra", dec!(20), SecurityLevel::Low));

        let summary = Planner::default().auto_assign(&mut store, false).await;
        assert_eq!(
            summary,
            Ok(AutoAssignSummary {
                assigned: 1,
                enclosures_created: 1,
            })
        );
    }

    /// Store that fails every write after the first `allowed_writes`.
    struct FlakyStore {
        inner: InMemoryStore,
        allowed_writes: usize,
    }

    impl FlakyStore {
        fn spend_write(&mut self) -> Result<(), StoreError> {
            if self.allowed_writes == 0 {
                return Err(StoreError::AnimalNotFound(AnimalId::new(-1)));
            }
            self.allowed_writes = self.allowed_writes.saturating_sub(1);
            Ok(())
        }
    }

    impl ZooStore for FlakyStore {
        type Error = StoreError;

        async fn list_animals(&self) -> Result<Vec<Animal>, StoreError> {
            self.inner.list_animals().await
        }

        async fn list_unassigned_animals(&self) -> Result<Vec<Animal>, StoreError> {
            self.inner.list_unassigned_animals().await
        }

        async fn list_enclosures_with_animals(&self) -> Result<Vec<Enclosure>, StoreError> {
            self.inner.list_enclosures_with_animals().await
        }

        async fn persist_animal_enclosure(
            &mut self,
            animal_id: AnimalId,
            enclosure_id: Option<EnclosureId>,
        ) -> Result<(), StoreError> {
            self.spend_write()?;
            self.inner.persist_animal_enclosure(animal_id, enclosure_id).await
        }

        async fn create_enclosure(&mut self, enclosure: &NewEnclosure) -> Result<EnclosureId, StoreError> {
            self.spend_write()?;
            self.inner.create_enclosure(enclosure).await
        }
    }

    #[tokio::test]
    async fn store_failure_propagates_without_rollback() {
        let mut inner = InMemoryStore::new();
        inner.insert_enclosure(pen("Savanne", SecurityLevel::Low, dec!(1000)));
        inner.insert_animal(animal(1, "Dumbo", "Elephant", dec!(500), SecurityLevel::Low));
        inner.insert_animal(animal(2, "Marty", "Zebra", dec!(100), SecurityLevel::Low));
        let mut store = FlakyStore {
            inner,
            allowed_writes: 1,
        };

        let result = Planner::default().auto_assign(&mut store, false).await;
        assert_eq!(result, Err(StoreError::AnimalNotFound(AnimalId::new(-1))));
        assert_eq!(
            store.inner.animal(AnimalId::new(1)).and_then(|a| a.enclosure_id),
            Some(EnclosureId::new(1))
        );
        assert_eq!(store.inner.animal(AnimalId::new(2)).and_then(|a| a.enclosure_id), None);
    }
}
