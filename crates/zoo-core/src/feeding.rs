//! Feeding-time descriptions.
//!
//! A predator sharing an enclosure with its prey gets a warning naming the
//! animals at risk instead of the plain "hunts" note.

use zoo_types::{Animal, DietaryClass, Enclosure};

use crate::conflict::{is_predator, joined_names, prey_in};

/// Marker text placed in front of a prey warning.
pub const WARNING_MARKER: &str = "WARNING:";

/// What an animal of the given diet eats.
pub const fn diet_description(diet: DietaryClass) -> &'static str {
    match diet {
        DietaryClass::Carnivore => "meat",
        DietaryClass::Herbivore => "plants",
        DietaryClass::Omnivore => "everything",
        DietaryClass::Insectivore => "insects",
        DietaryClass::Piscivore => "fish",
    }
}

/// Describe what `animal` eats.
///
/// `population` is the animal's enclosure mates (the animal itself may be
/// included). When given, and the animal is a predator with prey among
/// them, the description warns about those animals.
pub fn feeding_info(animal: &Animal, population: Option<&[Animal]>) -> String {
    let diet = diet_description(animal.dietary_class);

    if is_predator(animal) {
        if let Some(population) = population {
            let victims = prey_in(animal, population);
            if !victims.is_empty() {
                return format!(
                    "{} eats {diet} - {WARNING_MARKER} can eat {}!",
                    animal.name,
                    joined_names(&victims)
                );
            }
        }
        if let Some(prey) = animal.prey_text() {
            return format!("{} eats {diet} (hunts: {prey})", animal.name);
        }
    }

    format!("{} eats {diet}", animal.name)
}

/// Feeding info for every occupant against the enclosure's population.
pub fn enclosure_feeding_time(enclosure: &Enclosure) -> Vec<String> {
    enclosure
        .animals
        .iter()
        .map(|a| feeding_info(a, Some(enclosure.animals.as_slice())))
        .collect()
}
