//! Economic state, reference data, and pricing for the Homestead simulation.
//!
//! This crate holds everything events read and mutate, and nothing that
//! schedules them. Aggregates are plain data with public fields (so a
//! loader can hand over fully-formed instances) plus the mutators that keep
//! the reservation invariants: labor is reserved and released only through
//! [`Settlement`], payments only through [`ResourcePool`].
//!
//! # Modules
//!
//! - [`building`] -- Persistent building instances ([`Building`])
//! - [`catalog`] -- Animal and building archetype tables
//! - [`cost`] -- Seeded construction and improvement pricing
//! - [`error`] -- Shortage errors ([`EconomyError`])
//! - [`military`] -- Troops, military buildings, combat cooldown
//! - [`resources`] -- Food, gold, producing buildings
//! - [`rival`] -- The opposing nation
//! - [`settlement`] -- Clock, land, roads, population, wildlife
//! - [`snapshot`] -- Read-only copies for downstream consumers
//! - [`tech`] -- Era and construction timing

pub mod building;
pub mod catalog;
pub mod cost;
pub mod error;
pub mod military;
pub mod resources;
pub mod rival;
pub mod settlement;
pub mod snapshot;
pub mod tech;

use serde::{Deserialize, Serialize};

pub use building::Building;
pub use catalog::{AnimalStats, BuildingStats, animal_stats, building_stats};
pub use cost::{Cost, construction_cost, improvement_cost};
pub use error::EconomyError;
pub use military::MilitaryState;
pub use resources::ResourcePool;
pub use rival::{DefenseRateFormula, Distribution, RivalState};
pub use settlement::{Animal, Settlement};
pub use snapshot::EconomySnapshot;
pub use tech::TechState;

/// The five aggregates of one simulated nation.
///
/// Owned by the driver. Events borrow the parts they validate against at
/// construction and the whole bundle for the duration of a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Economy {
    /// The player's settlement.
    pub settlement: Settlement,
    /// Food, gold, and producing buildings.
    pub resources: ResourcePool,
    /// Troops and military buildings.
    pub military: MilitaryState,
    /// Research and development.
    pub tech: TechState,
    /// The opposing nation.
    pub rival: RivalState,
}

impl Economy {
    /// Buildings that count toward road allowance: houses plus every
    /// persistent building plus the military building counters.
    pub fn buildings_count(&self) -> u32 {
        let pool = u32::try_from(self.resources.buildings.len()).unwrap_or(u32::MAX);
        self.settlement
            .houses_count
            .saturating_add(pool)
            .saturating_add(self.military.attack_buildings_count)
            .saturating_add(self.military.defense_buildings_count)
    }

    /// Food plus gold in store.
    pub const fn wealth(&self) -> u64 {
        self.resources
            .food_count
            .saturating_add(self.resources.gold_count)
    }
}
