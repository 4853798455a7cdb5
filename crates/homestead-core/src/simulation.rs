//! The simulation driver.
//!
//! [`Simulation`] owns the [`Economy`] and the [`EventHandler`] and is the
//! single entry point for player commands. Each [`Simulation::step`] runs:
//!
//! 1. **Raid trial** -- with probability `attacks_risk_rate` the rival
//!    raids, enqueuing a [`Event::defend_from_enemies`].
//! 2. **Scheduler** -- [`EventHandler::advance_time`]. Building production
//!    is the first recurring event, so it lands before any other effect.
//!
//! The driver itself never mutates the aggregates; every change is an event
//! effect applied by the scheduler.
//!
//! The driver keeps its own random source for cost seeds and raid trials;
//! the scheduler's source is seeded from it, so one seed reproduces a whole
//! run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use homestead_economy::{Economy, EconomySnapshot};
use homestead_events::{CommandError, Event, EventAdditionError, EventCommand};

use crate::scheduler::EventHandler;

/// A tagged command could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The tag or its argument was malformed.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The event constructor refused the command.
    #[error(transparent)]
    Rejected(#[from] EventAdditionError),
}

/// Owns the economy and the scheduler and advances them together.
#[derive(Debug, Clone)]
pub struct Simulation {
    economy: Economy,
    handler: EventHandler,
    rng: StdRng,
}

impl Simulation {
    /// Start a simulation over `economy` with the recurring events already
    /// scheduled.
    ///
    /// Counted military buildings without an instance are filled in first,
    /// so every one of them can be improved.
    pub fn new(mut economy: Economy, seed: u64) -> Self {
        economy.military.fill_buildings();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut handler = EventHandler::new(rng.random());
        handler.add_event(Event::produce_resources());
        handler.add_event(Event::spawn_mine());
        handler.add_event(Event::spawn_animal());
        handler.add_event(Event::update_rival_stats());
        info!(
            settlement = %economy.settlement.name,
            seed,
            "simulation initialized"
        );
        Self {
            economy,
            handler,
            rng,
        }
    }

    /// Construct and schedule the event `command` asks for.
    ///
    /// Construction and improvement are priced with a fresh seed drawn from
    /// the driver's random source.
    ///
    /// # Errors
    ///
    /// Returns the constructor's [`EventAdditionError`]; nothing is mutated.
    pub fn submit(&mut self, command: &EventCommand) -> Result<(), EventAdditionError> {
        let seed = self.rng.random();
        match command.to_event(&mut self.economy, seed) {
            Ok(event) => {
                debug!(
                    tick = self.economy.settlement.current_time,
                    command = %command,
                    "command admitted"
                );
                self.handler.add_event(event);
                Ok(())
            }
            Err(err) => {
                debug!(
                    tick = self.economy.settlement.current_time,
                    command = %command,
                    reason = %err,
                    "command rejected"
                );
                Err(err)
            }
        }
    }

    /// Parse a command tag with its optional argument and submit it.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Command`] for malformed input (nothing is mutated) or
    /// [`SubmitError::Rejected`] when the constructor refuses.
    pub fn submit_tagged(&mut self, tag: &str, arg: Option<&str>) -> Result<(), SubmitError> {
        let command = EventCommand::parse(tag, arg).inspect_err(|err| {
            debug!(tag, reason = %err, "command not understood");
        })?;
        self.submit(&command)?;
        Ok(())
    }

    /// Run one step and return the new logical time.
    pub fn step(&mut self) -> u64 {
        if self.rng.random::<f64>() < self.economy.rival.attacks_risk_rate {
            info!(
                tick = self.economy.settlement.current_time,
                risk = self.economy.rival.attacks_risk_rate,
                "rival raid incoming"
            );
            self.handler.add_event(Event::defend_from_enemies());
        }

        self.handler.advance_time(&mut self.economy);
        self.economy.settlement.current_time
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> EconomySnapshot {
        self.economy.snapshot()
    }

    /// The aggregates.
    pub const fn economy(&self) -> &Economy {
        &self.economy
    }

    /// The scheduler.
    pub const fn scheduler(&self) -> &EventHandler {
        &self.handler
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quiet() -> Economy {
        let mut economy = Economy::default();
        economy.settlement.gold_mine_spawn_rate = 0.0;
        economy.settlement.animal_spawn_rate = 0.0;
        economy.rival.attacks_risk_rate = 0.0;
        economy.rival.stats_update_rate = 0.0;
        economy
    }

    #[test]
    fn recurring_events_are_seeded_once() {
        let sim = Simulation::new(quiet(), 1);
        let recurring = sim
            .scheduler()
            .active_events()
            .iter()
            .filter(|e| e.is_recurring())
            .count();
        assert_eq!(recurring, 4);
        assert_eq!(sim.scheduler().len(), 4);
    }

    #[test]
    fn unknown_tag_mutates_nothing() {
        let mut sim = Simulation::new(quiet(), 1);
        let before = sim.economy().clone();
        let err = sim.submit_tagged("Dance", None).unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Command(CommandError::UnknownCommand { .. })
        ));
        assert_eq!(sim.economy(), &before);
        assert_eq!(sim.scheduler().len(), 4);
    }

    #[test]
    fn rejected_command_is_not_scheduled() {
        let mut economy = quiet();
        economy.settlement.gold_mines = 0;
        let mut sim = Simulation::new(economy, 1);
        assert!(matches!(
            sim.submit_tagged("MineGold", None),
            Err(SubmitError::Rejected(EventAdditionError::NoGoldMines))
        ));
        assert_eq!(sim.scheduler().len(), 4);
    }

    #[test]
    fn production_runs_every_step() {
        let mut economy = quiet();
        economy.resources.add_building(homestead_types::BuildingKind::Food);
        let food = economy.resources.food_count;
        let mut sim = Simulation::new(economy, 1);
        sim.step();
        sim.step();
        assert_eq!(sim.economy().resources.food_count, food + 10);
    }

    #[test]
    fn certain_raid_is_scheduled_and_resolved() {
        let mut economy = quiet();
        economy.rival.attacks_risk_rate = 1.0;
        economy.rival.attack_coefficient = 1_000.0;
        economy.rival.food_per_combat = 5;
        let food = economy.resources.food_count;
        let mut sim = Simulation::new(economy, 1);
        // Raised before the scheduler runs, so it resolves in the same step.
        sim.step();
        assert_eq!(sim.economy().military.defense_units_count, 0);
        assert_eq!(sim.economy().resources.food_count, food - 5);
        sim.step();
        assert!(sim.economy().resources.food_count < food);
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let mut sim = Simulation::new(Economy::default(), seed);
            for tick in 0..50 {
                let _ = sim.submit_tagged("BuildBuilding", Some("Gold"));
                if tick % 5 == 0 {
                    let _ = sim.submit_tagged("MineGold", None);
                }
                sim.step();
            }
            sim.snapshot()
        };
        let first = run(9);
        let second = run(9);
        assert_eq!(first.gold_count, second.gold_count);
        assert_eq!(first.food_count, second.food_count);
        assert_eq!(first.animals_count, second.animals_count);
        assert_eq!(first.attack_units, second.attack_units);
    }
}
