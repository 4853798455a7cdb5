//! The rival nation: combat coefficients, raid risk, and per-combat stakes.
//!
//! # Defense rate
//!
//! The historical formula averaged `defense_units_coefficient` with itself,
//! ignoring `defense_buildings_coefficient` entirely. That behavior is kept
//! as [`DefenseRateFormula::UnitsOnly`] (the default) so existing scenarios
//! resolve the same way; [`DefenseRateFormula::UnitsAndBuildings`] averages
//! both coefficients.
//!
//! # Per-combat stakes
//!
//! Food, gold, and unit stakes are drawn from normal distributions. The
//! realized values are what combat credits or deducts until the next
//! resample.

use rand_distr::{Distribution as _, Normal};
use serde::{Deserialize, Serialize};

/// Wealth (food + gold) at or above which the rival grows more aggressive.
pub const WEALTH_THRESHOLD: u64 = 500;

/// Amount the raid risk drifts per update.
pub const RISK_STEP: f64 = 0.01;

/// How the rival's defense rate is derived from its coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefenseRateFormula {
    /// `(units + units) / 2`, the historical formula.
    #[default]
    UnitsOnly,
    /// `(units + buildings) / 2`.
    UnitsAndBuildings,
}

/// A normal distribution described by mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Mean of the distribution.
    pub mean: f64,
    /// Standard deviation; zero, negative, or non-finite yields the mean.
    pub std: f64,
}

impl Distribution {
    /// Draw one value.
    ///
    /// A non-positive or non-finite deviation yields the mean.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> f64 {
        if self.std <= 0.0 || !self.std.is_finite() {
            return self.mean;
        }
        Normal::new(self.mean, self.std).map_or(self.mean, |normal| normal.sample(rng))
    }
}

/// The opposing nation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RivalState {
    /// Troop strength the rival attacks with.
    pub attack_coefficient: f64,
    /// Strength contributed by the rival's defending troops.
    pub defense_units_coefficient: f64,
    /// Strength contributed by the rival's fortifications.
    pub defense_buildings_coefficient: f64,
    /// Formula used by [`RivalState::defense_rate`].
    pub defense_rate_formula: DefenseRateFormula,
    /// Per-tick probability that the rival raids the settlement.
    pub attacks_risk_rate: f64,
    /// Ceiling for `attacks_risk_rate` drift.
    pub max_attacks_risk_rate: f64,
    /// Per-tick probability that the rival's stats are resampled.
    pub stats_update_rate: f64,
    /// Distribution of food at stake per combat.
    pub food_per_combat_dist: Distribution,
    /// Distribution of gold at stake per combat.
    pub gold_per_combat_dist: Distribution,
    /// Distribution of units the rival commits per combat.
    pub units_per_combat_dist: Distribution,
    /// Last realized food stake.
    pub food_per_combat: u64,
    /// Last realized gold stake.
    pub gold_per_combat: u64,
    /// Last realized unit commitment.
    pub units_per_combat: u32,
}

impl Default for RivalState {
    fn default() -> Self {
        Self {
            attack_coefficient: 5.0,
            defense_units_coefficient: 1.5,
            defense_buildings_coefficient: 2.5,
            defense_rate_formula: DefenseRateFormula::UnitsOnly,
            attacks_risk_rate: 0.05,
            max_attacks_risk_rate: 1.0,
            stats_update_rate: 0.5,
            food_per_combat_dist: Distribution {
                mean: 50.0,
                std: 10.0,
            },
            gold_per_combat_dist: Distribution {
                mean: 80.0,
                std: 20.0,
            },
            units_per_combat_dist: Distribution {
                mean: 5.0,
                std: 2.0,
            },
            food_per_combat: 50,
            gold_per_combat: 80,
            units_per_combat: 5,
        }
    }
}

impl RivalState {
    /// The strength an attack on the rival must exceed.
    pub fn defense_rate(&self) -> f64 {
        let second = match self.defense_rate_formula {
            DefenseRateFormula::UnitsOnly => self.defense_units_coefficient,
            DefenseRateFormula::UnitsAndBuildings => self.defense_buildings_coefficient,
        };
        (self.defense_units_coefficient + second) / 2.0
    }

    /// Drift the raid risk toward wealthy targets.
    ///
    /// At or above [`WEALTH_THRESHOLD`] the risk grows by [`RISK_STEP`];
    /// below it the risk shrinks. The result is clamped to
    /// `[0, max_attacks_risk_rate]`; a NaN ceiling or risk collapses to zero.
    pub fn update_attacks_risk_rate(&mut self, wealth: u64) {
        let drift = if wealth >= WEALTH_THRESHOLD {
            RISK_STEP
        } else {
            -RISK_STEP
        };
        let ceiling = if self.max_attacks_risk_rate.is_nan() {
            0.0
        } else {
            self.max_attacks_risk_rate.clamp(0.0, 1.0)
        };
        let drifted = self.attacks_risk_rate + drift;
        self.attacks_risk_rate = if drifted.is_nan() {
            0.0
        } else {
            drifted.clamp(0.0, ceiling)
        };
    }

    /// Draw fresh realized stakes from the per-combat distributions.
    pub fn resample_per_combat(&mut self, rng: &mut impl rand::Rng) {
        self.food_per_combat = non_negative_count(self.food_per_combat_dist.sample(rng));
        self.gold_per_combat = non_negative_count(self.gold_per_combat_dist.sample(rng));
        self.units_per_combat =
            u32::try_from(non_negative_count(self.units_per_combat_dist.sample(rng)))
                .unwrap_or(u32::MAX);
    }
}

/// Round a sampled value to a count, flooring negatives and NaN at zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Guarded: finite and positive, saturating cast.
fn non_negative_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
