//! Building construction and improvement.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. archetype and land (or an existing building, for improvements)
//! 2. labor
//! 3. building state (improvements only)
//! 4. food
//! 5. gold
//!
//! Admission pays the whole price and reserves labor at once. Nothing is
//! refunded: an admitted event always completes.

use homestead_economy::{
    Building, Economy, MilitaryState, ResourcePool, Settlement, TechState, building_stats,
    construction_cost, improvement_cost,
};
use homestead_types::{BuildingId, BuildingKind, ParseArchetypeError};

use crate::error::EventAdditionError;
use crate::event::{Event, EventKind};

fn parse_kind(name: &str) -> Result<BuildingKind, EventAdditionError> {
    name.parse()
        .map_err(|err: ParseArchetypeError| EventAdditionError::UnknownArchetype {
            name: err.name,
        })
}

impl Event {
    /// Start constructing a building named `name`, priced under `seed`.
    ///
    /// # Errors
    ///
    /// [`EventAdditionError::UnknownArchetype`],
    /// [`EventAdditionError::NoBuildingSpace`], or a labor, food, or gold
    /// shortage, checked in that order.
    pub fn build_building(
        settlement: &mut Settlement,
        resources: &mut ResourcePool,
        tech: &TechState,
        name: &str,
        seed: u64,
    ) -> Result<Self, EventAdditionError> {
        let kind = parse_kind(name)?;
        if settlement.available_space == 0 {
            return Err(EventAdditionError::NoBuildingSpace);
        }
        let workers = building_stats(kind).workers;
        settlement.ensure_workers(workers)?;
        let cost = construction_cost(kind, seed);
        resources.ensure_affordable(&cost)?;

        resources.spend(&cost)?;
        settlement.reserve_workers(workers)?;
        settlement.available_space = settlement.available_space.saturating_sub(1);
        tracing::debug!(
            building = kind.as_str(),
            food = cost.food,
            gold = cost.gold,
            workers,
            "construction started"
        );
        Ok(Self::admitted(EventKind::BuildBuilding { kind }, tech.build_time))
    }

    /// Start improving one building named `name` by a level, priced under
    /// `seed`.
    ///
    /// The first building of that kind that is idle and below the era's cap
    /// is chosen and marked as improving until completion.
    ///
    /// # Errors
    ///
    /// [`EventAdditionError::UnknownArchetype`],
    /// [`EventAdditionError::BuildingNotFound`], a labor shortage,
    /// [`EventAdditionError::AlreadyImproving`] or
    /// [`EventAdditionError::MaxLevelReached`], then a food or gold
    /// shortage, checked in that order.
    pub fn improve_building(
        settlement: &mut Settlement,
        resources: &mut ResourcePool,
        military: &mut MilitaryState,
        tech: &TechState,
        name: &str,
        seed: u64,
    ) -> Result<Self, EventAdditionError> {
        let kind = parse_kind(name)?;
        let max = tech.max_building_improvements;
        let candidates: &[Building] = if kind.is_military() {
            &military.buildings
        } else {
            &resources.buildings
        };
        let mut of_kind = candidates.iter().filter(|b| b.kind == kind).peekable();
        if of_kind.peek().is_none() {
            return Err(EventAdditionError::BuildingNotFound { kind });
        }
        let workers = building_stats(kind).workers;
        settlement.ensure_workers(workers)?;

        let mut any_idle = false;
        let mut eligible = None;
        for building in of_kind {
            any_idle |= !building.improving;
            if building.is_improvable(max) {
                eligible = Some(building.id);
                break;
            }
        }
        let Some(building) = eligible else {
            return Err(if any_idle {
                EventAdditionError::MaxLevelReached { kind, max }
            } else {
                EventAdditionError::AlreadyImproving { kind }
            });
        };

        let cost = improvement_cost(kind, seed);
        resources.ensure_affordable(&cost)?;

        resources.spend(&cost)?;
        settlement.reserve_workers(workers)?;
        let target = if kind.is_military() {
            military.building_mut(building)
        } else {
            resources.building_mut(building)
        };
        if let Some(target) = target {
            target.improving = true;
        }
        tracing::debug!(
            building = kind.as_str(),
            food = cost.food,
            gold = cost.gold,
            "improvement started"
        );
        Ok(Self::admitted(
            EventKind::ImproveBuilding { building, kind },
            tech.improvement_time,
        ))
    }
}

pub(crate) fn complete_build(economy: &mut Economy, kind: BuildingKind) {
    let stats = building_stats(kind);
    let settlement = &mut economy.settlement;
    settlement.release_workers(stats.workers);
    settlement.used_space = settlement.used_space.saturating_add(1);
    match kind {
        BuildingKind::House => {
            settlement.houses_count = settlement.houses_count.saturating_add(1);
            settlement.grow_population(stats.population_bonus);
        }
        BuildingKind::Gold | BuildingKind::Food => {
            economy.resources.add_building(kind);
        }
        BuildingKind::Attack | BuildingKind::Defense => {
            economy.military.add_building(kind);
        }
    }
    tracing::info!(building = kind.as_str(), "building built");
}

pub(crate) fn complete_improvement(economy: &mut Economy, building: BuildingId, kind: BuildingKind) {
    economy
        .settlement
        .release_workers(building_stats(kind).workers);
    let target = if kind.is_military() {
        economy.military.building_mut(building)
    } else {
        economy.resources.building_mut(building)
    };
    let Some(target) = target else {
        tracing::warn!(building = kind.as_str(), "improved building no longer exists");
        return;
    };
    target.level = target.level.saturating_add(1);
    target.improving = false;
    let level = target.level;
    if kind.is_military() {
        economy.military.raise_force_rate(kind);
    }
    tracing::info!(building = kind.as_str(), level, "building improved");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use homestead_economy::{Cost, EconomyError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const SEED: u64 = 42;

    fn rich() -> Economy {
        let mut economy = Economy::default();
        economy.resources.food_count = 10_000;
        economy.resources.gold_count = 10_000;
        economy
    }

    fn build(economy: &mut Economy, name: &str) -> Result<Event, EventAdditionError> {
        Event::build_building(
            &mut economy.settlement,
            &mut economy.resources,
            &economy.tech,
            name,
            SEED,
        )
    }

    fn improve(economy: &mut Economy, name: &str) -> Result<Event, EventAdditionError> {
        Event::improve_building(
            &mut economy.settlement,
            &mut economy.resources,
            &mut economy.military,
            &economy.tech,
            name,
            SEED,
        )
    }

    fn finish(event: &mut Event, economy: &mut Economy) {
        let mut rng = StdRng::seed_from_u64(0);
        while !event.is_finished() {
            event.tick(economy, &mut rng);
        }
    }

    #[test]
    fn construction_pays_and_reserves_up_front() {
        let mut economy = rich();
        let cost = construction_cost(BuildingKind::Gold, SEED);
        let event = build(&mut economy, "Gold").unwrap();
        assert_eq!(event.remaining_ticks(), economy.tech.build_time);
        assert_eq!(economy.resources.food_count, 10_000 - cost.food);
        assert_eq!(economy.resources.gold_count, 10_000 - cost.gold);
        assert_eq!(economy.settlement.busy_population_count, 2);
        assert_eq!(economy.settlement.available_space, 9);
    }

    #[test]
    fn insufficient_food_rejects_without_mutation() {
        let mut economy = rich();
        economy.resources.food_count = 0;
        let before = economy.clone();
        let err = build(&mut economy, "House").unwrap_err();
        assert!(matches!(
            err,
            EventAdditionError::Shortage(EconomyError::NotEnoughFood { .. })
        ));
        assert_eq!(economy, before);
    }

    #[test]
    fn insufficient_gold_rejects_without_mutation() {
        let mut economy = rich();
        economy.resources.gold_count = 10;
        let before = economy.clone();
        assert!(matches!(
            build(&mut economy, "Food"),
            Err(EventAdditionError::Shortage(EconomyError::NotEnoughGold { .. }))
        ));
        assert_eq!(economy, before);
    }

    #[test]
    fn improvement_shortage_rejects_without_mutation() {
        let cost = improvement_cost(BuildingKind::Gold, SEED);
        let short_of = |economy: &mut Economy| {
            economy.resources.add_building(BuildingKind::Gold);
            let before = economy.clone();
            let err = improve(economy, "Gold").unwrap_err();
            assert_eq!(*economy, before);
            assert!(economy.resources.buildings.iter().all(|b| !b.improving));
            err
        };

        let mut economy = rich();
        economy.resources.food_count = cost.food - 1;
        assert!(matches!(
            short_of(&mut economy),
            EventAdditionError::Shortage(EconomyError::NotEnoughFood { .. })
        ));

        let mut economy = rich();
        economy.resources.gold_count = cost.gold - 1;
        assert!(matches!(
            short_of(&mut economy),
            EventAdditionError::Shortage(EconomyError::NotEnoughGold { .. })
        ));

        let mut economy = rich();
        economy.settlement.busy_population_count = economy.settlement.population_count - 1;
        assert!(matches!(
            short_of(&mut economy),
            EventAdditionError::Shortage(EconomyError::NotEnoughPopulation { .. })
        ));
    }

    #[test]
    fn labor_is_checked_before_cost() {
        let mut economy = Economy::default();
        economy.resources = ResourcePool {
            food_count: 0,
            gold_count: 0,
            buildings: Vec::new(),
        };
        economy.settlement.busy_population_count = economy.settlement.population_count;
        assert!(matches!(
            build(&mut economy, "Gold"),
            Err(EventAdditionError::Shortage(EconomyError::NotEnoughPopulation { .. }))
        ));
    }

    #[test]
    fn unknown_archetype_and_missing_land() {
        let mut economy = rich();
        assert!(matches!(
            build(&mut economy, "Castle"),
            Err(EventAdditionError::UnknownArchetype { .. })
        ));
        economy.settlement.available_space = 0;
        assert_eq!(
            build(&mut economy, "Gold").unwrap_err(),
            EventAdditionError::NoBuildingSpace
        );
    }

    #[test]
    fn house_grows_population() {
        let mut economy = rich();
        let population = economy.settlement.population_count;
        let mut event = build(&mut economy, "House").unwrap();
        finish(&mut event, &mut economy);
        assert_eq!(economy.settlement.houses_count, 1);
        assert_eq!(economy.settlement.population_count, population + 2);
        assert_eq!(economy.settlement.used_space, 1);
        assert_eq!(economy.settlement.busy_population_count, 0);
    }

    #[test]
    fn producer_and_military_buildings_land_in_their_aggregates() {
        let mut economy = rich();
        let attack_rate = economy.military.attack_force_rate;
        let mut gold = build(&mut economy, "Gold").unwrap();
        let mut attack = build(&mut economy, "Attack").unwrap();
        finish(&mut gold, &mut economy);
        finish(&mut attack, &mut economy);
        assert_eq!(economy.resources.buildings.len(), 1);
        let attacks = economy
            .military
            .buildings
            .iter()
            .filter(|b| b.kind == BuildingKind::Attack)
            .count();
        assert_eq!(attacks, 2);
        assert_eq!(economy.military.attack_buildings_count, 2);
        assert!(economy.military.attack_force_rate > attack_rate);
    }

    #[test]
    fn improvement_holds_the_building_until_done() {
        let mut economy = rich();
        economy.resources.add_building(BuildingKind::Food);
        let cost: Cost = improvement_cost(BuildingKind::Food, SEED);

        let mut event = improve(&mut economy, "Food").unwrap();
        assert_eq!(economy.resources.food_count, 10_000 - cost.food);
        assert!(economy.resources.buildings.iter().all(|b| b.improving));
        assert_eq!(
            improve(&mut economy, "Food").unwrap_err(),
            EventAdditionError::AlreadyImproving {
                kind: BuildingKind::Food
            }
        );

        finish(&mut event, &mut economy);
        let building = economy.resources.buildings.first().unwrap();
        assert_eq!(building.level, 2);
        assert!(!building.improving);
        assert_eq!(economy.settlement.busy_population_count, 0);
    }

    #[test]
    fn improvement_respects_era_cap() {
        let mut economy = rich();
        economy.tech.max_building_improvements = 1;
        economy.resources.add_building(BuildingKind::Gold);
        assert_eq!(
            improve(&mut economy, "Gold").unwrap_err(),
            EventAdditionError::MaxLevelReached {
                kind: BuildingKind::Gold,
                max: 1
            }
        );
    }

    #[test]
    fn improvement_needs_an_existing_building() {
        let mut economy = rich();
        assert_eq!(
            improve(&mut economy, "Gold").unwrap_err(),
            EventAdditionError::BuildingNotFound {
                kind: BuildingKind::Gold
            }
        );
        assert_eq!(
            improve(&mut economy, "House").unwrap_err(),
            EventAdditionError::BuildingNotFound {
                kind: BuildingKind::House
            }
        );
    }

    #[test]
    fn military_improvement_raises_force() {
        let mut economy = rich();
        let rate = economy.military.defense_force_rate;
        let mut event = improve(&mut economy, "Defense").unwrap();
        finish(&mut event, &mut economy);
        assert!(economy.military.defense_force_rate > rate);
        let defense = economy
            .military
            .buildings
            .iter()
            .find(|b| b.kind == BuildingKind::Defense);
        assert_eq!(defense.map(|b| b.level), Some(2));
    }

    #[test]
    fn improvement_picks_the_next_idle_building() {
        let mut economy = rich();
        economy.resources.add_building(BuildingKind::Gold);
        economy.resources.add_building(BuildingKind::Gold);
        let _first = improve(&mut economy, "Gold").unwrap();
        let _second = improve(&mut economy, "Gold").unwrap();
        assert!(economy.resources.buildings.iter().all(|b| b.improving));
        assert_eq!(economy.settlement.busy_population_count, 4);
    }
}
