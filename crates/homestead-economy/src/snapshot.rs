//! Read-only view of the economy for downstream consumers.
//!
//! A snapshot is a plain copy: nothing holding one can reach back into the
//! aggregates.

use serde::Serialize;

use crate::Economy;
use crate::building::Building;

/// Point-in-time copy of every externally observable counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomySnapshot {
    /// Settlement logical clock.
    pub current_time: u64,
    /// Cleared land ready to build on.
    pub available_space: u32,
    /// Land not yet opened.
    pub not_worked_space: u32,
    /// Land occupied by buildings.
    pub used_space: u32,
    /// Road segments.
    pub roads_count: u32,
    /// Total population.
    pub population_count: u32,
    /// Population reserved by active events.
    pub busy_population_count: u32,
    /// Completed houses.
    pub houses_count: u32,
    /// Live wild animals.
    pub animals_count: usize,
    /// Unexploited gold mine slots.
    pub gold_mines: u32,
    /// Food in store.
    pub food_count: u64,
    /// Gold in store.
    pub gold_count: u64,
    /// Gold/Food buildings followed by Attack/Defense buildings.
    pub buildings: Vec<Building>,
    /// Attack troops.
    pub attack_units: u32,
    /// Defense troops.
    pub defense_units: u32,
    /// Attack strength.
    pub attack_force_rate: f64,
    /// Defense strength.
    pub defense_force_rate: f64,
    /// Combat cooldown flag.
    pub resting: bool,
    /// Rival raid probability per tick.
    pub attacks_risk_rate: f64,
    /// Rival's realized food stake.
    pub food_per_combat: u64,
    /// Rival's realized gold stake.
    pub gold_per_combat: u64,
    /// Rival's realized unit commitment.
    pub units_per_combat: u32,
}

impl Economy {
    /// Copy out the current state.
    pub fn snapshot(&self) -> EconomySnapshot {
        let Self {
            settlement,
            resources,
            military,
            rival,
            ..
        } = self;
        EconomySnapshot {
            current_time: settlement.current_time,
            available_space: settlement.available_space,
            not_worked_space: settlement.not_worked_space,
            used_space: settlement.used_space,
            roads_count: settlement.roads_count,
            population_count: settlement.population_count,
            busy_population_count: settlement.busy_population_count,
            houses_count: settlement.houses_count,
            animals_count: settlement.animals.len(),
            gold_mines: settlement.gold_mines,
            food_count: resources.food_count,
            gold_count: resources.gold_count,
            buildings: resources
                .buildings
                .iter()
                .chain(&military.buildings)
                .cloned()
                .collect(),
            attack_units: military.attack_units_count,
            defense_units: military.defense_units_count,
            attack_force_rate: military.attack_force_rate,
            defense_force_rate: military.defense_force_rate,
            resting: military.resting,
            attacks_risk_rate: rival.attacks_risk_rate,
            food_per_combat: rival.food_per_combat,
            gold_per_combat: rival.gold_per_combat,
            units_per_combat: rival.units_per_combat,
        }
    }
}
