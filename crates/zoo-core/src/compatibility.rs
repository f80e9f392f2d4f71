//! The placement predicate: may an animal join an enclosure?
//!
//! Three gates, evaluated in order:
//!
//! 1. **Security** -- the enclosure's level must be at least the animal's
//!    requirement.
//! 2. **Space** -- occupied space plus the animal's requirement must fit
//!    in the enclosure's size.
//! 3. **Prey** -- the newcomer may not prey on an occupant, and no occupant
//!    may prey on the newcomer. Prey text is free-form and asymmetric, so
//!    both directions are checked separately.
//!
//! The prey gate works on the raw text relation ([`preys_on`]); any animal
//! with matching prey text blocks the placement, whatever its diet.
//!
//! If the animal is already listed among the occupants it is left out of
//! the comparison.

use rust_decimal::Decimal;
use zoo_types::{Animal, Enclosure, SecurityLevel};

use crate::conflict::preys_on;

/// Why an enclosure was turned down for an animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The enclosure's security level is below the animal's requirement.
    SecurityTooLow {
        /// Level the animal needs.
        required: SecurityLevel,
        /// Level the enclosure provides.
        provided: SecurityLevel,
    },
    /// The animal does not fit in the remaining space.
    InsufficientSpace {
        /// Occupied space plus the animal's requirement.
        needed: Decimal,
        /// Enclosure size.
        available: Decimal,
    },
    /// A predator/prey pair would share the enclosure.
    PreyConflict {
        /// Name of the occupant involved.
        occupant: String,
    },
}

/// Return the first reason `animal` cannot be placed in `enclosure`, or
/// `None` when it can.
pub fn placement_rejection(animal: &Animal, enclosure: &Enclosure) -> Option<Rejection> {
    if enclosure.security_level < animal.security_requirement {
        return Some(Rejection::SecurityTooLow {
            required: animal.security_requirement,
            provided: enclosure.security_level,
        });
    }

    let mut occupants = enclosure.animals.iter().filter(|o| o.id != animal.id);

    let occupied = occupants
        .clone()
        .fold(Decimal::ZERO, |acc, o| acc.saturating_add(o.space_requirement));
    let needed = occupied.saturating_add(animal.space_requirement);
    if needed > enclosure.size {
        return Some(Rejection::InsufficientSpace {
            needed,
            available: enclosure.size,
        });
    }

    occupants
        .find(|o| preys_on(animal, o) || preys_on(o, animal))
        .map(|o| Rejection::PreyConflict {
            occupant: o.name.clone(),
        })
}

/// Whether `animal` may be placed in `enclosure`. Pure; no side effects.
pub fn can_place(animal: &Animal, enclosure: &Enclosure) -> bool {
    placement_rejection(animal, enclosure).is_none()
}
