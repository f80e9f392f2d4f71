//! Joining `animals` rows onto the `enclosures` they occupy.

use std::collections::BTreeMap;

use zoo_types::{Animal, Enclosure, EnclosureId};

use crate::animal_store::AnimalRow;
use crate::enclosure_store::EnclosureRow;
use crate::error::DbError;

/// Convert `enclosures` and give each one the `animals` that point at it.
///
/// Enclosure order is kept, and so is the order of occupants within an
/// enclosure. An enclosure nobody points at gets an empty list. Animals
/// without an enclosure, or pointing at one not in `enclosures`, are
/// dropped.
///
/// # Errors
///
/// Returns [`DbError::InvalidValue`] if any row holds unknown enum text.
pub fn attach_occupants(
    enclosures: Vec<EnclosureRow>,
    animals: Vec<AnimalRow>,
) -> Result<Vec<Enclosure>, DbError> {
    let mut occupants: BTreeMap<EnclosureId, Vec<Animal>> = BTreeMap::new();
    for row in animals {
        let animal = Animal::try_from(row)?;
        if let Some(enclosure_id) = animal.enclosure_id {
            occupants.entry(enclosure_id).or_default().push(animal);
        }
    }

    enclosures
        .into_iter()
        .map(|row| -> Result<Enclosure, DbError> {
            let mut enclosure = Enclosure::try_from(row)?;
            enclosure.animals = occupants.remove(&enclosure.id).unwrap_or_default();
            Ok(enclosure)
        })
        .collect()
}
