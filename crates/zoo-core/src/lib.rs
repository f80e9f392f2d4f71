//! Constraint checking and automatic enclosure assignment for the
//! Dierentuin zoo.
//!
//! The engine works on snapshots of animals and enclosures fetched from a
//! [`ZooStore`]. Everything except the planner and the zoo-wide reports is
//! a pure function of its arguments.
//!
//! # Modules
//!
//! - [`conflict`] -- Predator/prey matching on free-text species names.
//! - [`compatibility`] -- Whether an animal may join an enclosure.
//! - [`constraints`] -- Issue reports for animals and enclosures.
//! - [`planner`] -- Greedy first-fit auto-assignment.
//! - [`daily`] -- Sunrise and sunset status lines.
//! - [`feeding`] -- Feeding-time descriptions.
//! - [`zoo`] -- Zoo-wide reports keyed by enclosure.
//! - [`store`] -- [`ZooStore`] trait and [`InMemoryStore`].
//! - [`config`] -- Configuration loading from `zoo-config.yaml`.
//!
//! [`ZooStore`]: store::ZooStore
//! [`InMemoryStore`]: store::InMemoryStore

pub mod compatibility;
pub mod config;
pub mod conflict;
pub mod constraints;
pub mod daily;
pub mod feeding;
pub mod planner;
pub mod store;
pub mod zoo;

pub use compatibility::{Rejection, can_place};
pub use constraints::{check_animal, check_enclosure};
pub use daily::{sunrise_status, sunset_status};
pub use feeding::feeding_info;
pub use planner::{AutoAssignSummary, Planner};
pub use store::{InMemoryStore, StoreError, ZooStore};
