//! Shared type definitions for the Dierentuin zoo placement engine.
//!
//! This crate is the single source of truth for the records the engine
//! reasons about. Storage adapters and the engine both speak these types.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe integer wrappers for record identifiers
//! - [`enums`] -- Ordered enumerations (size, diet, activity, security, climate, habitat)
//! - [`structs`] -- The `Animal` and `Enclosure` records

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    ActivityPattern, AnimalSize, Climate, DietaryClass, HabitatType, ParseEnumError,
    SecurityLevel,
};
pub use ids::{AnimalId, EnclosureId};
pub use structs::{Animal, Enclosure, NewEnclosure};
