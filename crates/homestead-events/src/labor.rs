//! Settlement labor: mining, road work, land clearing, and hunting.

use homestead_economy::{Economy, Settlement, animal_stats};
use homestead_types::{AnimalId, AnimalKind, ParseArchetypeError};

use crate::error::EventAdditionError;
use crate::event::{Event, EventKind};

/// Gold credited by one completed mining expedition.
pub const GOLD_PER_MINE: u64 = 300;

/// Workers held by a mining expedition.
pub const MINE_WORKERS: u32 = 2;

/// Workers held while clearing land.
pub const OPEN_SPACE_WORKERS: u32 = 3;

/// Ticks needed to clear one unit of land.
pub const OPEN_SPACE_TICKS: u64 = 5;

/// Road segments added by one road construction.
pub const ROADS_PER_BUILD: u32 = 4;

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl Event {
    /// Send two workers to exploit a gold mine slot.
    ///
    /// # Errors
    ///
    /// [`EventAdditionError::NoGoldMines`] when no slot is left, or a
    /// population shortage.
    pub fn mine_gold(settlement: &mut Settlement) -> Result<Self, EventAdditionError> {
        if settlement.gold_mines == 0 {
            return Err(EventAdditionError::NoGoldMines);
        }
        settlement.reserve_workers(MINE_WORKERS)?;
        settlement.gold_mines = settlement.gold_mines.saturating_sub(1);
        tracing::debug!(
            mines_left = settlement.gold_mines,
            busy = settlement.busy_population_count,
            "mining expedition started"
        );
        Ok(Self::admitted(EventKind::MineGold, settlement.mine_time))
    }

    /// Collect tolls from every road, one tick per road.
    ///
    /// # Errors
    ///
    /// [`EventAdditionError::NoRoads`] or
    /// [`EventAdditionError::AlreadyCollecting`].
    pub fn collect_road_gold(settlement: &mut Settlement) -> Result<Self, EventAdditionError> {
        if settlement.roads_count == 0 {
            return Err(EventAdditionError::NoRoads);
        }
        if settlement.collecting_road_gold {
            return Err(EventAdditionError::AlreadyCollecting);
        }
        settlement.collecting_road_gold = true;
        let roads = settlement.roads_count;
        tracing::debug!(roads, "road gold collection started");
        Ok(Self::admitted(
            EventKind::CollectRoadGold { roads, accrued: 0.0 },
            u64::from(roads),
        ))
    }

    /// Lay four road segments. Roads are capped at four per building.
    ///
    /// # Errors
    ///
    /// [`EventAdditionError::NotEnoughBuildingsForRoads`] when the cap would
    /// be exceeded.
    pub fn build_road(economy: &Economy) -> Result<Self, EventAdditionError> {
        let roads = economy.settlement.roads_count;
        let buildings = economy.buildings_count();
        let allowance = u64::from(buildings).saturating_mul(u64::from(ROADS_PER_BUILD));
        if u64::from(roads).saturating_add(u64::from(ROADS_PER_BUILD)) > allowance {
            return Err(EventAdditionError::NotEnoughBuildingsForRoads { roads, buildings });
        }
        Ok(Self::admitted(EventKind::BuildRoad, 1))
    }

    /// Clear one unit of unworked land with three workers.
    ///
    /// # Errors
    ///
    /// [`EventAdditionError::NoUnworkedSpace`] or a population shortage.
    pub fn open_space(settlement: &mut Settlement) -> Result<Self, EventAdditionError> {
        if settlement.not_worked_space == 0 {
            return Err(EventAdditionError::NoUnworkedSpace);
        }
        settlement.reserve_workers(OPEN_SPACE_WORKERS)?;
        settlement.not_worked_space = settlement.not_worked_space.saturating_sub(1);
        Ok(Self::admitted(EventKind::OpenSpace, OPEN_SPACE_TICKS))
    }

    /// Hunt the first unclaimed animal named `name`.
    ///
    /// The animal is claimed immediately so a second hunt cannot target it;
    /// it leaves the settlement when the hunt completes.
    ///
    /// # Errors
    ///
    /// [`EventAdditionError::UnknownArchetype`] for an unknown tag,
    /// [`EventAdditionError::AnimalNotFound`] when no unclaimed animal of
    /// that kind is nearby, or a population shortage.
    pub fn hunt_animal(settlement: &mut Settlement, name: &str) -> Result<Self, EventAdditionError> {
        let kind: AnimalKind = name
            .parse()
            .map_err(|err: ParseArchetypeError| EventAdditionError::UnknownArchetype {
                name: err.name,
            })?;
        let animal = settlement
            .find_huntable(kind)
            .map(|animal| animal.id)
            .ok_or_else(|| EventAdditionError::AnimalNotFound {
                name: name.to_owned(),
            })?;
        let stats = animal_stats(kind);
        settlement.reserve_workers(stats.workers)?;
        settlement.target_animal(animal);
        tracing::debug!(animal = kind.as_str(), workers = stats.workers, "hunt started");
        Ok(Self::admitted(
            EventKind::HuntAnimal { animal, kind },
            stats.hunt_ticks,
        ))
    }
}

// ---------------------------------------------------------------------------
// Completion effects
// ---------------------------------------------------------------------------

pub(crate) fn complete_mine_gold(economy: &mut Economy) {
    economy.settlement.release_workers(MINE_WORKERS);
    economy.resources.credit_gold(GOLD_PER_MINE);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Guarded: finite and positive, saturating cast.
pub(crate) fn complete_collect_road_gold(economy: &mut Economy, accrued: f64) {
    let earned = if accrued.is_finite() && accrued > 0.0 {
        accrued.floor() as u64
    } else {
        0
    };
    economy.resources.credit_gold(earned);
    economy.settlement.collecting_road_gold = false;
    tracing::info!(earned, "road gold collected");
}

pub(crate) fn complete_build_road(economy: &mut Economy) {
    economy.settlement.roads_count = economy
        .settlement
        .roads_count
        .saturating_add(ROADS_PER_BUILD);
}

pub(crate) fn complete_open_space(economy: &mut Economy) {
    economy.settlement.release_workers(OPEN_SPACE_WORKERS);
    economy.settlement.available_space = economy.settlement.available_space.saturating_add(1);
}

pub(crate) fn complete_hunt_animal(economy: &mut Economy, animal: AnimalId, kind: AnimalKind) {
    let stats = animal_stats(kind);
    economy.settlement.release_workers(stats.workers);
    economy.settlement.remove_animal(animal);
    economy.resources.credit_food(stats.food);
    tracing::info!(animal = kind.as_str(), food = stats.food, "animal hunted");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use homestead_economy::EconomyError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn run(event: &mut Event, economy: &mut Economy, ticks: usize) {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..ticks {
            event.tick(economy, &mut rng);
        }
    }

    #[test]
    fn mining_holds_workers_until_completion() {
        let mut economy = Economy::default();
        economy.settlement.gold_mines = 1;
        economy.settlement.mine_time = 2;
        let gold = economy.resources.gold_count;

        let mut event = Event::mine_gold(&mut economy.settlement).unwrap();
        assert_eq!(economy.settlement.busy_population_count, 2);
        assert_eq!(economy.settlement.gold_mines, 0);

        run(&mut event, &mut economy, 1);
        assert_eq!(economy.settlement.busy_population_count, 2);
        assert_eq!(economy.resources.gold_count, gold);

        run(&mut event, &mut economy, 1);
        assert_eq!(economy.settlement.busy_population_count, 0);
        assert_eq!(economy.resources.gold_count, gold + GOLD_PER_MINE);
    }

    #[test]
    fn mining_without_slots_is_rejected() {
        let mut economy = Economy::default();
        economy.settlement.gold_mines = 0;
        let err = Event::mine_gold(&mut economy.settlement).unwrap_err();
        assert_eq!(err, EventAdditionError::NoGoldMines);
        assert_eq!(economy.settlement.busy_population_count, 0);
    }

    #[test]
    fn exhausted_labor_rejects_without_mutation() {
        let mut economy = Economy::default();
        economy.settlement.population_count = 2;
        economy.settlement.busy_population_count = 2;
        economy.settlement.animals.clear();
        economy.settlement.spawn_animal(AnimalKind::Bunny);
        let before = economy.clone();

        assert!(matches!(
            Event::mine_gold(&mut economy.settlement),
            Err(EventAdditionError::Shortage(EconomyError::NotEnoughPopulation { .. }))
        ));
        assert!(Event::open_space(&mut economy.settlement).is_err());
        assert!(Event::hunt_animal(&mut economy.settlement, "Bunny").is_err());
        assert_eq!(economy, before);
    }

    #[test]
    fn road_collection_is_exclusive_and_accrues_privately() {
        let mut economy = Economy::default();
        economy.settlement.roads_count = 3;
        economy.settlement.road_gold_generation = 0.5;
        let gold = economy.resources.gold_count;

        let mut event = Event::collect_road_gold(&mut economy.settlement).unwrap();
        assert_eq!(event.remaining_ticks(), 3);
        assert_eq!(
            Event::collect_road_gold(&mut economy.settlement).unwrap_err(),
            EventAdditionError::AlreadyCollecting
        );

        run(&mut event, &mut economy, 2);
        assert_eq!(economy.resources.gold_count, gold);
        run(&mut event, &mut economy, 1);
        // 3 roads * 0.5 * 3 ticks = 4.5, floored.
        assert_eq!(economy.resources.gold_count, gold + 4);
        assert!(!economy.settlement.collecting_road_gold);
    }

    #[test]
    fn road_collection_needs_roads() {
        let mut economy = Economy::default();
        economy.settlement.roads_count = 0;
        assert_eq!(
            Event::collect_road_gold(&mut economy.settlement).unwrap_err(),
            EventAdditionError::NoRoads
        );
        assert!(!economy.settlement.collecting_road_gold);
    }

    #[test]
    fn roads_are_capped_by_buildings() {
        let mut economy = Economy::default();
        // Default military has one attack and one defense building.
        economy.settlement.roads_count = 4;
        assert!(Event::build_road(&economy).is_ok());
        economy.settlement.roads_count = 5;
        assert!(matches!(
            Event::build_road(&economy),
            Err(EventAdditionError::NotEnoughBuildingsForRoads { roads: 5, buildings: 2 })
        ));
    }

    #[test]
    fn open_space_moves_land_to_available() {
        let mut economy = Economy::default();
        let available = economy.settlement.available_space;
        let unworked = economy.settlement.not_worked_space;

        let mut event = Event::open_space(&mut economy.settlement).unwrap();
        assert_eq!(economy.settlement.not_worked_space, unworked - 1);
        assert_eq!(economy.settlement.busy_population_count, OPEN_SPACE_WORKERS);

        run(&mut event, &mut economy, 5);
        assert!(event.is_finished());
        assert_eq!(economy.settlement.available_space, available + 1);
        assert_eq!(economy.settlement.busy_population_count, 0);
    }

    #[test]
    fn open_space_without_land_is_rejected() {
        let mut economy = Economy::default();
        economy.settlement.not_worked_space = 0;
        assert_eq!(
            Event::open_space(&mut economy.settlement).unwrap_err(),
            EventAdditionError::NoUnworkedSpace
        );
    }

    #[test]
    fn two_hunts_claim_distinct_animals() {
        let mut economy = Economy::default();
        economy.settlement.spawn_animal(AnimalKind::Deer);
        economy.settlement.spawn_animal(AnimalKind::Deer);
        let food = economy.resources.food_count;

        let mut first = Event::hunt_animal(&mut economy.settlement, "Deer").unwrap();
        let mut second = Event::hunt_animal(&mut economy.settlement, "Deer").unwrap();
        assert_eq!(economy.settlement.busy_population_count, 6);
        assert!(matches!(
            Event::hunt_animal(&mut economy.settlement, "Deer"),
            Err(EventAdditionError::AnimalNotFound { .. })
        ));

        run(&mut first, &mut economy, 5);
        run(&mut second, &mut economy, 5);
        assert!(economy.settlement.animals.is_empty());
        assert_eq!(economy.resources.food_count, food + 60);
        assert_eq!(economy.settlement.busy_population_count, 0);
    }

    #[test]
    fn unknown_animal_tag_is_rejected() {
        let mut economy = Economy::default();
        assert!(matches!(
            Event::hunt_animal(&mut economy.settlement, "bunny"),
            Err(EventAdditionError::UnknownArchetype { .. })
        ));
    }
}
