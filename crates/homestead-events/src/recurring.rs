//! Recurring background work.
//!
//! Each trial draws `u` uniformly from `[0, 1)` and fires when `u < rate`,
//! so a rate of zero never fires and a rate of one always does. Production
//! has no trial and fires every tick.

use rand::Rng;
use rand::seq::IndexedRandom;

use homestead_economy::Economy;
use homestead_types::AnimalKind;

use crate::event::{Event, EventKind};

impl Event {
    /// New gold mine slots appear at the settlement's spawn rate.
    pub const fn spawn_mine() -> Self {
        Self::recurring(EventKind::SpawnMine)
    }

    /// Wild animals wander in at the settlement's spawn rate.
    pub const fn spawn_animal() -> Self {
        Self::recurring(EventKind::SpawnAnimal)
    }

    /// The rival reassesses its raid risk and combat stakes.
    pub const fn update_rival_stats() -> Self {
        Self::recurring(EventKind::UpdateRivalStats)
    }

    /// Gold and Food buildings yield their per-level output every tick.
    pub const fn produce_resources() -> Self {
        Self::recurring(EventKind::ProduceResources)
    }
}

fn trial(rng: &mut impl Rng, rate: f64) -> bool {
    rng.random::<f64>() < rate
}

pub(crate) fn spawn_mine(economy: &mut Economy, rng: &mut impl Rng) {
    let settlement = &mut economy.settlement;
    if trial(rng, settlement.gold_mine_spawn_rate) {
        settlement.gold_mines = settlement.gold_mines.saturating_add(1);
        tracing::info!(mines = settlement.gold_mines, "gold mine spawned");
    }
}

pub(crate) fn spawn_animal(economy: &mut Economy, rng: &mut impl Rng) {
    let settlement = &mut economy.settlement;
    if !trial(rng, settlement.animal_spawn_rate) {
        return;
    }
    if let Some(&kind) = AnimalKind::ALL.choose(rng) {
        settlement.spawn_animal(kind);
        tracing::info!(animal = kind.as_str(), "animal spawned");
    }
}

pub(crate) fn update_rival_stats(economy: &mut Economy, rng: &mut impl Rng) {
    if !trial(rng, economy.rival.stats_update_rate) {
        return;
    }
    let wealth = economy.wealth();
    let rival = &mut economy.rival;
    rival.update_attacks_risk_rate(wealth);
    rival.resample_per_combat(rng);
    tracing::debug!(
        wealth,
        risk = rival.attacks_risk_rate,
        food = rival.food_per_combat,
        gold = rival.gold_per_combat,
        units = rival.units_per_combat,
        "rival stats updated"
    );
}

pub(crate) fn produce_resources(economy: &mut Economy) {
    let output = economy.resources.produce();
    if output.gold > 0 || output.food > 0 {
        tracing::debug!(gold = output.gold, food = output.food, "buildings produced");
    }
}
