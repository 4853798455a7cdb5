//! The resource pool: food, gold, and the producing buildings.
//!
//! Counters are unsigned, so "never negative" holds by construction. Every
//! subtraction saturates at zero instead of failing; callers that need an
//! all-or-nothing payment check [`ResourcePool::ensure_affordable`] first.

use serde::{Deserialize, Serialize};

use homestead_types::{BuildingId, BuildingKind};

use crate::building::{self, Building};
use crate::catalog::building_stats;
use crate::cost::Cost;
use crate::error::EconomyError;

/// Food, gold, and completed Gold/Food buildings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePool {
    /// Food in store.
    pub food_count: u64,
    /// Gold in store.
    pub gold_count: u64,
    /// Completed Gold and Food buildings.
    pub buildings: Vec<Building>,
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self {
            food_count: 200,
            gold_count: 400,
            buildings: Vec::new(),
        }
    }
}

impl ResourcePool {
    /// Check that `cost` could be paid right now. Food is checked first.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::NotEnoughFood`] or
    /// [`EconomyError::NotEnoughGold`] for the first shortfall found.
    pub const fn ensure_affordable(&self, cost: &Cost) -> Result<(), EconomyError> {
        if cost.food > self.food_count {
            return Err(EconomyError::NotEnoughFood {
                needed: cost.food,
                available: self.food_count,
            });
        }
        if cost.gold > self.gold_count {
            return Err(EconomyError::NotEnoughGold {
                needed: cost.gold,
                available: self.gold_count,
            });
        }
        Ok(())
    }

    /// Pay `cost`.
    ///
    /// # Errors
    ///
    /// Returns the shortfall from [`Self::ensure_affordable`] without
    /// mutating.
    pub fn spend(&mut self, cost: &Cost) -> Result<(), EconomyError> {
        self.ensure_affordable(cost)?;
        self.food_count = self.food_count.saturating_sub(cost.food);
        self.gold_count = self.gold_count.saturating_sub(cost.gold);
        Ok(())
    }

    /// Add food.
    pub const fn credit_food(&mut self, amount: u64) {
        self.food_count = self.food_count.saturating_add(amount);
    }

    /// Add gold.
    pub const fn credit_gold(&mut self, amount: u64) {
        self.gold_count = self.gold_count.saturating_add(amount);
    }

    /// Remove up to `amount` food and return how much was actually taken.
    pub fn take_food(&mut self, amount: u64) -> u64 {
        let taken = amount.min(self.food_count);
        self.food_count = self.food_count.saturating_sub(taken);
        taken
    }

    /// Remove up to `amount` gold and return how much was actually taken.
    pub fn take_gold(&mut self, amount: u64) -> u64 {
        let taken = amount.min(self.gold_count);
        self.gold_count = self.gold_count.saturating_sub(taken);
        taken
    }

    /// Add a completed level-1 building and return its handle.
    pub fn add_building(&mut self, kind: BuildingKind) -> BuildingId {
        let building = Building::new(kind);
        let id = building.id;
        self.buildings.push(building);
        id
    }

    /// Look up a building by handle.
    pub fn building_mut(&mut self, id: BuildingId) -> Option<&mut Building> {
        building::find_mut(&mut self.buildings, id)
    }

    /// Output of every building for one tick, as `(gold, food)`.
    ///
    /// Each building yields its archetype's per-level output times its
    /// level.
    pub fn production(&self) -> Cost {
        self.buildings.iter().fold(Cost::default(), |acc, b| {
            let stats = building_stats(b.kind);
            let level = u64::from(b.level);
            Cost {
                gold: acc
                    .gold
                    .saturating_add(stats.gold_yield.saturating_mul(level)),
                food: acc
                    .food
                    .saturating_add(stats.food_yield.saturating_mul(level)),
            }
        })
    }

    /// Credit one tick of building output and return it.
    pub fn produce(&mut self) -> Cost {
        let output = self.production();
        self.credit_gold(output.gold);
        self.credit_food(output.food);
        output
    }
}
