//! Constraint reports for single animals and whole enclosures.
//!
//! Reports are lists of human-readable issue strings. An empty list means
//! nothing is wrong; [`check_enclosure`] is the only place a success line
//! is synthesized. Violations are reported here, never rejected: the record
//! store accepts any assignment.

use std::collections::BTreeMap;

use zoo_types::{Animal, Enclosure};

use crate::conflict::{is_predator, joined_names, prey_in};

/// Issue emitted for an animal without an enclosure.
pub const NO_ENCLOSURE_ISSUE: &str = "No enclosure assigned";

/// Report key for issues concerning the enclosure as a whole.
pub const ENCLOSURE_KEY: &str = "Enclosure";

/// Report key used when an enclosure has no issues at all.
pub const STATUS_KEY: &str = "Status";

/// Success line under [`STATUS_KEY`].
pub const ALL_SATISFIED: &str = "All constraints satisfied ✓";

/// Check one animal against the enclosure it lives in.
///
/// `enclosure` is the animal's current enclosure, `None` if unassigned.
/// An unassigned animal yields exactly one issue and no further checks.
pub fn check_animal(animal: &Animal, enclosure: Option<&Enclosure>) -> Vec<String> {
    let Some(enclosure) = enclosure else {
        return vec![NO_ENCLOSURE_ISSUE.to_owned()];
    };

    let mut issues = Vec::new();
    if animal.security_requirement > enclosure.security_level {
        issues.push(format!(
            "Security level too low (required: {}, enclosure: {})",
            animal.security_requirement, enclosure.security_level
        ));
    }
    issues
}

/// Check every constraint of an enclosure and its occupants.
///
/// Enclosure-wide problems (space, predators next to prey) are listed under
/// [`ENCLOSURE_KEY`]; per-animal problems under the animal's name. Animals
/// sharing a name share one entry, the later one winning. When nothing is
/// wrong the result is exactly `{"Status": ["All constraints satisfied ✓"]}`.
pub fn check_enclosure(enclosure: &Enclosure) -> BTreeMap<String, Vec<String>> {
    let mut report = BTreeMap::new();
    let mut enclosure_issues = Vec::new();

    let needed = enclosure.occupied_space();
    if needed > enclosure.size {
        enclosure_issues.push(format!(
            "Not enough space (required: {needed}m², available: {}m²)",
            enclosure.size
        ));
    }

    for predator in enclosure.animals.iter().filter(|a| is_predator(a)) {
        let victims = prey_in(predator, &enclosure.animals);
        if !victims.is_empty() {
            enclosure_issues.push(format!(
                "DANGER: {} can eat {}!",
                predator.name,
                joined_names(&victims)
            ));
        }
    }

    if !enclosure_issues.is_empty() {
        report.insert(ENCLOSURE_KEY.to_owned(), enclosure_issues);
    }

    for animal in &enclosure.animals {
        let issues = check_animal(animal, Some(enclosure));
        if !issues.is_empty() {
            report.insert(animal.name.clone(), issues);
        }
    }

    if report.is_empty() {
        report.insert(STATUS_KEY.to_owned(), vec![ALL_SATISFIED.to_owned()]);
    }
    report
}
