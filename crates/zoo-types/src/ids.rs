//! Type-safe identifier wrappers around the integer keys handed out by
//! the record store.
//!
//! Animals and enclosures are both keyed by plain integers in storage.
//! Wrapping them keeps an enclosure id from being passed where an animal
//! id is expected.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `i64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wrap a raw storage key.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Return the inner key.
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for an animal.
    AnimalId
}

define_id! {
    /// Unique identifier for an enclosure.
    EnclosureId
}
