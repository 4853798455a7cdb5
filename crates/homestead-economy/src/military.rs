//! The military aggregate: troops, military buildings, and combat state.
//!
//! Force rates are derived from the military buildings. They start at the
//! configured value and move by [`FORCE_PER_LEVEL`] every time a building of
//! that side is added or gains a level.
//!
//! The building counters and the `buildings` list always agree: every
//! counted Attack or Defense building has a persistent instance that can be
//! improved. [`MilitaryState::fill_buildings`] restores that after loading.

use serde::{Deserialize, Serialize};

use homestead_types::{BuildingId, BuildingKind};

use crate::building::{self, Building};
use crate::catalog::building_stats;

/// Force rate contributed by each level of a military building.
pub const FORCE_PER_LEVEL: f64 = 1.0;

/// Troops, military buildings, and the combat cooldown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilitaryState {
    /// Attack troops available.
    pub attack_units_count: u32,
    /// Defense troops available.
    pub defense_units_count: u32,
    /// Cap on attack troops.
    pub max_attack_units_count: u32,
    /// Cap on defense troops.
    pub max_defense_units_count: u32,
    /// Completed attack buildings.
    pub attack_buildings_count: u32,
    /// Completed defense buildings.
    pub defense_buildings_count: u32,
    /// Derived attack strength.
    pub attack_force_rate: f64,
    /// Derived defense strength.
    pub defense_force_rate: f64,
    /// Ticks needed to train a troop.
    pub training_time: u64,
    /// Troops are recovering from an attack; new attacks are rejected.
    ///
    /// Only the attack and rest events move this flag, so it is never loaded.
    #[serde(skip_deserializing)]
    pub resting: bool,
    /// An admitted attack has not resolved yet.
    #[serde(skip_deserializing)]
    pub attack_in_progress: bool,
    /// Completed Attack and Defense buildings.
    pub buildings: Vec<Building>,
}

impl Default for MilitaryState {
    fn default() -> Self {
        let mut military = Self {
            attack_units_count: 10,
            defense_units_count: 10,
            max_attack_units_count: 20,
            max_defense_units_count: 20,
            attack_buildings_count: 1,
            defense_buildings_count: 1,
            attack_force_rate: 2.0,
            defense_force_rate: 2.0,
            training_time: 5,
            resting: false,
            attack_in_progress: false,
            buildings: Vec::new(),
        };
        military.fill_buildings();
        military
    }
}

impl MilitaryState {
    /// Bring the building counters and the `buildings` list into agreement.
    ///
    /// Counted buildings without an instance get a level-1 instance, and a
    /// counter below its number of instances is raised to match. Capacity
    /// and force rates are left as configured.
    pub fn fill_buildings(&mut self) {
        let counters = [
            (BuildingKind::Attack, &mut self.attack_buildings_count),
            (BuildingKind::Defense, &mut self.defense_buildings_count),
        ];
        for (kind, counter) in counters {
            let present = self.buildings.iter().filter(|b| b.kind == kind).count();
            let present = u32::try_from(present).unwrap_or(u32::MAX);
            for _ in present..*counter {
                self.buildings.push(Building::new(kind));
            }
            *counter = (*counter).max(present);
        }
    }

    /// Add a completed military building, raising capacity and force.
    ///
    /// Returns `None` for non-military kinds, which are left untouched.
    pub fn add_building(&mut self, kind: BuildingKind) -> Option<BuildingId> {
        let capacity = building_stats(kind).unit_capacity;
        match kind {
            BuildingKind::Attack => {
                self.attack_buildings_count = self.attack_buildings_count.saturating_add(1);
                self.max_attack_units_count =
                    self.max_attack_units_count.saturating_add(capacity);
            }
            BuildingKind::Defense => {
                self.defense_buildings_count = self.defense_buildings_count.saturating_add(1);
                self.max_defense_units_count =
                    self.max_defense_units_count.saturating_add(capacity);
            }
            BuildingKind::Gold | BuildingKind::Food | BuildingKind::House => return None,
        }
        let building = Building::new(kind);
        let id = building.id;
        self.buildings.push(building);
        self.raise_force_rate(kind);
        Some(id)
    }

    /// Look up a military building by handle.
    pub fn building_mut(&mut self, id: BuildingId) -> Option<&mut Building> {
        building::find_mut(&mut self.buildings, id)
    }

    /// Recompute the force rate of `kind`'s side after one level was gained.
    pub fn raise_force_rate(&mut self, kind: BuildingKind) {
        match kind {
            BuildingKind::Attack => self.attack_force_rate += FORCE_PER_LEVEL,
            BuildingKind::Defense => self.defense_force_rate += FORCE_PER_LEVEL,
            BuildingKind::Gold | BuildingKind::Food | BuildingKind::House => {}
        }
    }

    /// Whether an attack could be launched with the current troops.
    pub const fn can_field_attack(&self) -> bool {
        self.attack_units_count > 0 && self.attack_buildings_count > 0
    }
}
