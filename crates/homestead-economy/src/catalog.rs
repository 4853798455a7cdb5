//! Immutable reference data for animal and building archetypes.
//!
//! Events read these tables at construction time to decide how many workers
//! to reserve, how long to run, and what to yield on completion. Nothing in
//! the engine mutates them.
//!
//! All values are integers -- no floating point.

use homestead_types::{AnimalKind, BuildingKind};

/// Fixed stats for a huntable animal archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimalStats {
    /// Ticks a hunt takes from admission to completion.
    pub hunt_ticks: u64,
    /// Food credited to the resource pool when the hunt completes.
    pub food: u64,
    /// Workers reserved for the duration of the hunt.
    pub workers: u32,
}

/// Fixed stats for a building archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingStats {
    /// Workers reserved while the building is constructed or improved.
    pub workers: u32,
    /// Gold produced per tick per level once built.
    pub gold_yield: u64,
    /// Food produced per tick per level once built.
    pub food_yield: u64,
    /// Population granted when construction completes.
    pub population_bonus: u32,
    /// Troop capacity added when construction completes.
    pub unit_capacity: u32,
}

/// Return the stats for an animal archetype.
///
/// | Animal | hunt ticks | food | workers |
/// |--------|-----------:|-----:|--------:|
/// | Bunny  | 2          | 4    | 1       |
/// | Fox    | 3          | 10   | 2       |
/// | Deer   | 5          | 30   | 3       |
/// | Bear   | 8          | 70   | 4       |
pub const fn animal_stats(kind: AnimalKind) -> AnimalStats {
    match kind {
        AnimalKind::Bunny => AnimalStats {
            hunt_ticks: 2,
            food: 4,
            workers: 1,
        },
        AnimalKind::Fox => AnimalStats {
            hunt_ticks: 3,
            food: 10,
            workers: 2,
        },
        AnimalKind::Deer => AnimalStats {
            hunt_ticks: 5,
            food: 30,
            workers: 3,
        },
        AnimalKind::Bear => AnimalStats {
            hunt_ticks: 8,
            food: 70,
            workers: 4,
        },
    }
}

/// Return the stats for a building archetype.
#[allow(clippy::match_same_arms)] // Each archetype keeps its own row for readability.
pub const fn building_stats(kind: BuildingKind) -> BuildingStats {
    match kind {
        BuildingKind::Gold => BuildingStats {
            workers: 2,
            gold_yield: 5,
            food_yield: 0,
            population_bonus: 0,
            unit_capacity: 0,
        },
        BuildingKind::Food => BuildingStats {
            workers: 2,
            gold_yield: 0,
            food_yield: 5,
            population_bonus: 0,
            unit_capacity: 0,
        },
        BuildingKind::House => BuildingStats {
            workers: 3,
            gold_yield: 0,
            food_yield: 0,
            population_bonus: 2,
            unit_capacity: 0,
        },
        BuildingKind::Attack => BuildingStats {
            workers: 3,
            gold_yield: 0,
            food_yield: 0,
            population_bonus: 0,
            unit_capacity: 5,
        },
        BuildingKind::Defense => BuildingStats {
            workers: 3,
            gold_yield: 0,
            food_yield: 0,
            population_bonus: 0,
            unit_capacity: 5,
        },
    }
}
