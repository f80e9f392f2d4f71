//! Core records: animals and the enclosures that house them.
//!
//! An enclosure refers to its occupants by value for the duration of one
//! engine call; it does not own them in storage. The animal side of the
//! relation is the `enclosure_id` field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{ActivityPattern, AnimalSize, Climate, DietaryClass, HabitatType, SecurityLevel};
use crate::ids::{AnimalId, EnclosureId};

/// A housed animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Storage key.
    pub id: AnimalId,
    /// Display name, e.g. "Simba".
    pub name: String,
    /// Free-text species, matched against other animals' prey text.
    pub species: String,
    /// Body size class.
    pub size: AnimalSize,
    /// What the animal eats.
    pub dietary_class: DietaryClass,
    /// When the animal is awake.
    pub activity_pattern: ActivityPattern,
    /// Comma-separated species fragments this animal hunts.
    pub prey: Option<String>,
    /// Enclosure the animal is assigned to, if any.
    pub enclosure_id: Option<EnclosureId>,
    /// Floor area needed, in m². Always positive.
    pub space_requirement: Decimal,
    /// Minimum enclosure security level.
    pub security_requirement: SecurityLevel,
}

impl Animal {
    /// Create an unassigned herbivore with default attributes.
    ///
    /// Use the `with_*` methods to fill in the rest.
    pub fn new(id: AnimalId, name: &str, species: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            species: species.to_owned(),
            size: AnimalSize::Medium,
            dietary_class: DietaryClass::Herbivore,
            activity_pattern: ActivityPattern::Diurnal,
            prey: None,
            enclosure_id: None,
            space_requirement: Decimal::ONE,
            security_requirement: SecurityLevel::Low,
        }
    }

    /// Set the size class.
    #[must_use]
    pub const fn with_size(mut self, size: AnimalSize) -> Self {
        self.size = size;
        self
    }

    /// Set the dietary class.
    #[must_use]
    pub const fn with_diet(mut self, dietary_class: DietaryClass) -> Self {
        self.dietary_class = dietary_class;
        self
    }

    /// Set the activity pattern.
    #[must_use]
    pub const fn with_activity(mut self, activity_pattern: ActivityPattern) -> Self {
        self.activity_pattern = activity_pattern;
        self
    }

    /// Set the prey text.
    #[must_use]
    pub fn with_prey(mut self, prey: &str) -> Self {
        self.prey = Some(prey.to_owned());
        self
    }

    /// Set the required floor area.
    #[must_use]
    pub const fn with_space(mut self, space_requirement: Decimal) -> Self {
        self.space_requirement = space_requirement;
        self
    }

    /// Set the required security level.
    #[must_use]
    pub const fn with_security(mut self, security_requirement: SecurityLevel) -> Self {
        self.security_requirement = security_requirement;
        self
    }

    /// Assign to an enclosure.
    #[must_use]
    pub const fn in_enclosure(mut self, enclosure_id: EnclosureId) -> Self {
        self.enclosure_id = Some(enclosure_id);
        self
    }

    /// The prey text, if present and non-empty.
    pub fn prey_text(&self) -> Option<&str> {
        self.prey.as_deref().filter(|p| !p.is_empty())
    }
}

/// An enclosure together with its current occupants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    /// Storage key.
    pub id: EnclosureId,
    /// Display name.
    pub name: String,
    /// Climate setting. Not used by the placement rules.
    pub climate: Climate,
    /// Habitat setting. Not used by the placement rules.
    pub habitat_type: HabitatType,
    /// Security level provided.
    pub security_level: SecurityLevel,
    /// Floor area, in m².
    pub size: Decimal,
    /// Animals currently assigned here.
    pub animals: Vec<Animal>,
}

impl Enclosure {
    /// Materialize a freshly created enclosure with no occupants.
    pub fn from_new(id: EnclosureId, new: NewEnclosure) -> Self {
        Self {
            id,
            name: new.name,
            climate: new.climate,
            habitat_type: new.habitat_type,
            security_level: new.security_level,
            size: new.size,
            animals: Vec::new(),
        }
    }

    /// Sum of the occupants' space requirements.
    pub fn occupied_space(&self) -> Decimal {
        self.animals
            .iter()
            .fold(Decimal::ZERO, |acc, a| acc.saturating_add(a.space_requirement))
    }
}

/// Fields for an enclosure that does not exist in storage yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnclosure {
    /// Display name.
    pub name: String,
    /// Climate setting.
    pub climate: Climate,
    /// Habitat setting.
    pub habitat_type: HabitatType,
    /// Security level provided.
    pub security_level: SecurityLevel,
    /// Floor area, in m².
    pub size: Decimal,
}
