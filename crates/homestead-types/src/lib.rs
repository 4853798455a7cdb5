//! Shared type definitions for the Homestead settlement simulation.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers used as handles by events
//! - [`enums`] -- Building and animal archetype tags

pub mod enums;
pub mod ids;

pub use enums::{AnimalKind, BuildingKind, ParseArchetypeError};
pub use ids::{AnimalId, BuildingId};
