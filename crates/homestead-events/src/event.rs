//! The [`Event`] type and its tick dispatch.
//!
//! # Lifecycle
//!
//! 1. **Constructed** by one of the `Event::*` constructors, which validate
//!    against the aggregates, reserve labor and resources, and fix the
//!    countdown (never below one tick).
//! 2. **Ticked** once per scheduler step. Nothing observable changes in the
//!    aggregates while the countdown runs.
//! 3. **Finished** when the countdown reaches zero. The completion effect is
//!    applied on that tick and never again.
//!
//! Recurring events skip step 3: their countdown is reset to
//! [`RECURRING_TICKS`] on every tick and they apply their effect (a
//! probability trial, or production) instead.

use core::fmt;

use rand::Rng;

use homestead_economy::Economy;
use homestead_types::{AnimalId, AnimalKind, BuildingId, BuildingKind};

use crate::{combat, construction, labor, recurring};

/// Countdown used by recurring events. They never reach zero.
pub const RECURRING_TICKS: u64 = u64::MAX;

/// What an event does, with the handles it needs at completion.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// A mining expedition holding two workers.
    MineGold,
    /// Road toll collection, accruing privately until completion.
    CollectRoadGold {
        /// Roads counted when the collection started.
        roads: u32,
        /// Gold accrued so far, credited (floored) at completion.
        accrued: f64,
    },
    /// Four new road segments.
    BuildRoad,
    /// Clearing one unit of unworked land.
    OpenSpace,
    /// A hunt for one claimed animal.
    HuntAnimal {
        /// The claimed animal.
        animal: AnimalId,
        /// Its archetype.
        kind: AnimalKind,
    },
    /// Construction of a new building.
    BuildBuilding {
        /// Archetype under construction.
        kind: BuildingKind,
    },
    /// One level of improvement on an existing building.
    ImproveBuilding {
        /// The building being improved.
        building: BuildingId,
        /// Its archetype.
        kind: BuildingKind,
    },
    /// An attack on the rival nation.
    AttackEnemies,
    /// Post-attack cooldown.
    RestFromAttack,
    /// A raid by the rival nation.
    DefendFromEnemies,
    /// Recurring trial for new gold mine slots.
    SpawnMine,
    /// Recurring trial for new wild animals.
    SpawnAnimal,
    /// Recurring trial for rival risk drift and stake resampling.
    UpdateRivalStats,
    /// Recurring output of every Gold and Food building.
    ProduceResources,
}

impl EventKind {
    /// Command-style tag used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MineGold => "MineGold",
            Self::CollectRoadGold { .. } => "CollectRoadGold",
            Self::BuildRoad => "BuildRoad",
            Self::OpenSpace => "OpenSpace",
            Self::HuntAnimal { .. } => "HuntAnimal",
            Self::BuildBuilding { .. } => "BuildBuilding",
            Self::ImproveBuilding { .. } => "ImproveBuilding",
            Self::AttackEnemies => "AttackEnemies",
            Self::RestFromAttack => "RestFromAttack",
            Self::DefendFromEnemies => "DefendFromEnemies",
            Self::SpawnMine => "SpawnMine",
            Self::SpawnAnimal => "SpawnAnimal",
            Self::UpdateRivalStats => "UpdateRivalStats",
            Self::ProduceResources => "ProduceResources",
        }
    }
}

/// A unit of timed work admitted into the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    remaining_ticks: u64,
    kind: EventKind,
}

impl Event {
    /// Build an admitted event. Durations below one tick are raised to one.
    pub(crate) const fn admitted(kind: EventKind, duration: u64) -> Self {
        Self {
            remaining_ticks: if duration == 0 { 1 } else { duration },
            kind,
        }
    }

    /// Build a recurring event.
    pub(crate) const fn recurring(kind: EventKind) -> Self {
        Self {
            remaining_ticks: RECURRING_TICKS,
            kind,
        }
    }

    /// Ticks left before completion.
    pub const fn remaining_ticks(&self) -> u64 {
        self.remaining_ticks
    }

    /// What this event does.
    pub const fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Whether the completion effect has been applied.
    pub const fn is_finished(&self) -> bool {
        self.remaining_ticks == 0
    }

    /// Whether this is an attack on the rival nation.
    pub const fn is_attack(&self) -> bool {
        matches!(self.kind, EventKind::AttackEnemies)
    }

    /// Whether this event recurs forever.
    pub const fn is_recurring(&self) -> bool {
        matches!(
            self.kind,
            EventKind::SpawnMine
                | EventKind::SpawnAnimal
                | EventKind::UpdateRivalStats
                | EventKind::ProduceResources
        )
    }

    /// Advance the event by one tick.
    ///
    /// A finished event is left untouched, so extra ticks are harmless.
    pub fn tick(&mut self, economy: &mut Economy, rng: &mut impl Rng) {
        if self.is_recurring() {
            self.remaining_ticks = RECURRING_TICKS;
            match self.kind {
                EventKind::SpawnMine => recurring::spawn_mine(economy, rng),
                EventKind::SpawnAnimal => recurring::spawn_animal(economy, rng),
                EventKind::UpdateRivalStats => recurring::update_rival_stats(economy, rng),
                EventKind::ProduceResources => recurring::produce_resources(economy),
                _ => {}
            }
            return;
        }
        if self.is_finished() {
            return;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if let EventKind::CollectRoadGold { roads, accrued } = &mut self.kind {
            *accrued += f64::from(*roads) * economy.settlement.road_gold_generation;
        }
        if self.is_finished() {
            self.complete(economy, rng);
        }
    }

    fn complete(&self, economy: &mut Economy, rng: &mut impl Rng) {
        tracing::debug!(
            event = self.kind.name(),
            tick = economy.settlement.current_time,
            "event completed"
        );
        match &self.kind {
            EventKind::MineGold => labor::complete_mine_gold(economy),
            EventKind::CollectRoadGold { accrued, .. } => {
                labor::complete_collect_road_gold(economy, *accrued);
            }
            EventKind::BuildRoad => labor::complete_build_road(economy),
            EventKind::OpenSpace => labor::complete_open_space(economy),
            EventKind::HuntAnimal { animal, kind } => {
                labor::complete_hunt_animal(economy, *animal, *kind);
            }
            EventKind::BuildBuilding { kind } => construction::complete_build(economy, *kind),
            EventKind::ImproveBuilding { building, kind } => {
                construction::complete_improvement(economy, *building, *kind);
            }
            EventKind::AttackEnemies => combat::resolve_attack(economy, rng),
            EventKind::RestFromAttack => combat::complete_rest(economy),
            EventKind::DefendFromEnemies => combat::resolve_defense(economy, rng),
            EventKind::SpawnMine
            | EventKind::SpawnAnimal
            | EventKind::UpdateRivalStats
            | EventKind::ProduceResources => {}
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_recurring() {
            write!(f, "{} (recurring)", self.kind.name())
        } else {
            write!(f, "{} ({} ticks left)", self.kind.name(), self.remaining_ticks)
        }
    }
}
