//! Enumeration types for animals and enclosures.
//!
//! Declaration order is load-bearing: the derived `Ord` on [`SecurityLevel`]
//! and [`AnimalSize`] follows the order the variants are written in, and the
//! engine compares security levels with `<`/`>=` directly. Never reorder
//! variants.
//!
//! Every enum also has a stable `snake_case` text form (`as_str` /
//! [`FromStr`]) used by the storage layer, and a `Display` that renders the
//! variant name for human-readable reports.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a stored text value does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct ParseEnumError {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Implements `as_str`, `Display`, and `FromStr` for a fieldless enum.
macro_rules! text_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal / $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable `snake_case` form used for persistence.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let label = match self {
                    $(Self::$variant => $label),+
                };
                f.write_str(label)
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

/// Body size class of an animal, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalSize {
    /// Barely visible without magnification.
    Microscopic,
    /// Insects, small amphibians.
    VerySmall,
    /// Rodents, small birds.
    Small,
    /// Foxes, penguins.
    Medium,
    /// Big cats, bears.
    Large,
    /// Elephants, giraffes.
    VeryLarge,
}

text_enum!(AnimalSize, "animal size", {
    Microscopic => "microscopic" / "Microscopic",
    VerySmall => "very_small" / "VerySmall",
    Small => "small" / "Small",
    Medium => "medium" / "Medium",
    Large => "large" / "Large",
    VeryLarge => "very_large" / "VeryLarge",
});

/// What an animal eats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryClass {
    /// Meat eater.
    Carnivore,
    /// Plant eater.
    Herbivore,
    /// Eats both plants and meat.
    Omnivore,
    /// Insect eater.
    Insectivore,
    /// Fish eater.
    Piscivore,
}

text_enum!(DietaryClass, "dietary class", {
    Carnivore => "carnivore" / "Carnivore",
    Herbivore => "herbivore" / "Herbivore",
    Omnivore => "omnivore" / "Omnivore",
    Insectivore => "insectivore" / "Insectivore",
    Piscivore => "piscivore" / "Piscivore",
});

impl DietaryClass {
    /// Whether animals of this diet are treated as hunters of other
    /// animals by the reports and feeding views.
    pub const fn hunts(self) -> bool {
        matches!(self, Self::Carnivore | Self::Omnivore)
    }
}

/// When during the day an animal is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityPattern {
    /// Active during the day.
    Diurnal,
    /// Active during the night.
    Nocturnal,
    /// Active around the clock.
    Cathemeral,
}

text_enum!(ActivityPattern, "activity pattern", {
    Diurnal => "diurnal" / "Diurnal",
    Nocturnal => "nocturnal" / "Nocturnal",
    Cathemeral => "cathemeral" / "Cathemeral",
});

/// Security rating, required by an animal and provided by an enclosure.
///
/// `Low < Medium < High`. An enclosure can house an animal when its level
/// is greater than or equal to the animal's requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityLevel {
    /// Petting-zoo grade.
    Low,
    /// Standard fencing.
    Medium,
    /// Reinforced, for dangerous animals.
    High,
}

text_enum!(SecurityLevel, "security level", {
    Low => "low" / "Low",
    Medium => "medium" / "Medium",
    High => "high" / "High",
});

/// Climate an enclosure is kept at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    /// Hot and humid.
    Tropical,
    /// Mild.
    Temperate,
    /// Cold.
    Arctic,
}

text_enum!(Climate, "climate", {
    Tropical => "tropical" / "Tropical",
    Temperate => "temperate" / "Temperate",
    Arctic => "arctic" / "Arctic",
});

/// Landscape an enclosure recreates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitatType {
    /// Wooded.
    Forest,
    /// Water-based.
    Aquatic,
    /// Arid.
    Desert,
    /// Open plains.
    Grassland,
}

text_enum!(HabitatType, "habitat type", {
    Forest => "forest" / "Forest",
    Aquatic => "aquatic" / "Aquatic",
    Desert => "desert" / "Desert",
    Grassland => "grassland" / "Grassland",
});
