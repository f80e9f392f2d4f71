//! `PostgreSQL` record store for the Dierentuin zoo placement engine.
//!
//! Holds the `animals` and `enclosures` tables. The engine only ever
//! changes an animal's `enclosure_id` and inserts enclosures; everything
//! else about the records is owned by whoever manages the catalog.
//!
//! # Modules
//!
//! - [`postgres`] -- Connection pool, configuration, and migrations
//! - [`animal_store`] -- Queries and assignment updates on `animals`
//! - [`enclosure_store`] -- Queries and inserts on `enclosures`
//! - [`occupancy`] -- Enclosures joined with their occupants
//! - [`error`] -- Shared error types

pub mod animal_store;
pub mod enclosure_store;
pub mod error;
pub mod occupancy;
pub mod postgres;

// Re-export primary types for convenience.
pub use animal_store::{AnimalRow, AnimalStore};
pub use enclosure_store::{EnclosureRow, EnclosureStore};
pub use error::DbError;
pub use occupancy::attach_occupants;
pub use postgres::{PostgresConfig, PostgresPool};
