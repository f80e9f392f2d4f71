//! Predator/prey conflict detection.
//!
//! The prey relation is fuzzy text, not a typed graph. An animal's `prey`
//! field is a comma-separated list of species fragments; another animal is
//! prey when any trimmed, lower-cased fragment is a substring of its
//! lower-cased species. "Zebra, gazelle" therefore catches "Grant's
//! Gazelle" and "Plains zebra" alike.
//!
//! An empty fragment (e.g. from `", Zebra"`) is a substring of every
//! species and matches everything.

use zoo_types::Animal;

/// Split prey text into normalized fragments.
pub fn prey_fragments(prey: &str) -> Vec<String> {
    prey.split(',').map(|p| p.trim().to_lowercase()).collect()
}

/// Whether any fragment occurs in the candidate's species.
pub fn matches_species(fragments: &[String], candidate: &Animal) -> bool {
    let species = candidate.species.to_lowercase();
    fragments.iter().any(|f| species.contains(f.as_str()))
}

/// Whether `hunter`'s prey text matches `candidate`, ignoring diet class.
///
/// This is the raw textual relation. The placement check uses it in both
/// directions; the reports go through [`prey_in`], which also requires the
/// hunter to be a meat eater.
pub fn preys_on(hunter: &Animal, candidate: &Animal) -> bool {
    hunter
        .prey_text()
        .is_some_and(|prey| matches_species(&prey_fragments(prey), candidate))
}

/// Whether the animal counts as a predator: a carnivore or omnivore with
/// non-empty prey text.
pub fn is_predator(animal: &Animal) -> bool {
    animal.dietary_class.hunts() && animal.prey_text().is_some()
}

/// The members of `population` that `predator` would eat.
///
/// Returns an empty list when `predator` is not a predator. The predator
/// itself is never reported, even when its species matches its own prey
/// text. Victims are reported whatever their own diet.
pub fn prey_in<'a>(predator: &Animal, population: &'a [Animal]) -> Vec<&'a Animal> {
    if !is_predator(predator) {
        return Vec::new();
    }
    let Some(prey) = predator.prey_text() else {
        return Vec::new();
    };
    let fragments = prey_fragments(prey);
    population
        .iter()
        .filter(|candidate| candidate.id != predator.id && matches_species(&fragments, candidate))
        .collect()
}

/// Join the names of matched animals for messages: "Marty, Gloria".
pub fn joined_names(animals: &[&Animal]) -> String {
    animals
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
