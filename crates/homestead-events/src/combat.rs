//! Combat with the rival nation.
//!
//! ## Attack flow
//!
//! 1. [`Event::attack_enemies`] checks troops, cooldown, and that no other
//!    attack is pending, then sets `attack_in_progress`.
//! 2. On its single tick the attack compares the rival's defense rate with
//!    our attack force. A win costs some units, loots the rival's realized
//!    stakes, and starts the cooldown. A loss wipes out the attack units.
//! 3. The scheduler enqueues [`Event::rest_from_attack`] once the attack is
//!    removed; `resting` clears when that event completes.
//!
//! ## Defense
//!
//! [`Event::defend_from_enemies`] is raised by the driver's raid trial. The
//! raid is held off when our defense units match the rival's attack
//! coefficient; otherwise the defenders are lost and the rival takes its
//! realized stakes, capped at what we hold.

use rand::Rng;

use homestead_economy::{Economy, MilitaryState};

use crate::error::EventAdditionError;
use crate::event::{Event, EventKind};

/// Ticks of cooldown after an attack.
pub const REST_TICKS: u64 = 20;

impl Event {
    /// Launch an attack on the rival nation.
    ///
    /// # Errors
    ///
    /// [`EventAdditionError::NoTroops`], [`EventAdditionError::TroopsResting`],
    /// or [`EventAdditionError::AttackUnderWay`].
    pub fn attack_enemies(military: &mut MilitaryState) -> Result<Self, EventAdditionError> {
        if !military.can_field_attack() {
            return Err(EventAdditionError::NoTroops);
        }
        if military.resting {
            return Err(EventAdditionError::TroopsResting);
        }
        if military.attack_in_progress {
            return Err(EventAdditionError::AttackUnderWay);
        }
        military.attack_in_progress = true;
        tracing::debug!(units = military.attack_units_count, "attack launched");
        Ok(Self::admitted(EventKind::AttackEnemies, 1))
    }

    /// Cooldown that follows every attack.
    pub const fn rest_from_attack() -> Self {
        Self::admitted(EventKind::RestFromAttack, REST_TICKS)
    }

    /// A raid by the rival nation, resolved on the next tick.
    pub const fn defend_from_enemies() -> Self {
        Self::admitted(EventKind::DefendFromEnemies, 1)
    }
}

pub(crate) fn resolve_attack(economy: &mut Economy, rng: &mut impl Rng) {
    let defense = economy.rival.defense_rate();
    let military = &mut economy.military;
    military.attack_in_progress = false;
    if defense >= military.attack_force_rate {
        tracing::info!(
            defense,
            force = military.attack_force_rate,
            lost = military.attack_units_count,
            "attack failed"
        );
        military.attack_units_count = 0;
        return;
    }
    let max_lost = military.attack_units_count.saturating_sub(1).max(1);
    let lost = rng.random_range(1..=max_lost);
    military.attack_units_count = military.attack_units_count.saturating_sub(lost);
    military.resting = true;
    let food = economy.rival.food_per_combat;
    let gold = economy.rival.gold_per_combat;
    economy.resources.credit_food(food);
    economy.resources.credit_gold(gold);
    tracing::info!(defense, lost, food, gold, "attack succeeded");
}

pub(crate) const fn complete_rest(economy: &mut Economy) {
    economy.military.resting = false;
}

pub(crate) fn resolve_defense(economy: &mut Economy, rng: &mut impl Rng) {
    let units = economy.military.defense_units_count;
    if f64::from(units) >= economy.rival.attack_coefficient {
        // A repelled raid always leaves one defender standing.
        let remaining = if units >= 2 {
            rng.random_range(1..=units.saturating_sub(1))
        } else {
            1
        };
        economy.military.defense_units_count = remaining;
        tracing::info!(units, remaining, "raid repelled");
        return;
    }
    economy.military.defense_units_count = 0;
    let food = economy.resources.take_food(economy.rival.food_per_combat);
    let gold = economy.resources.take_gold(economy.rival.gold_per_combat);
    tracing::info!(units, food, gold, "raid succeeded");
}
