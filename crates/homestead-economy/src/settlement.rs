//! The settlement aggregate: clock, land, roads, population, and wildlife.
//!
//! # Labor invariant
//!
//! `0 <= busy_population_count <= population_count` at all times. The only
//! code paths that touch `busy_population_count` are
//! [`Settlement::reserve_workers`] and [`Settlement::release_workers`]; the
//! former refuses without mutating when the reservation would exceed the
//! population, the latter saturates at zero.

use serde::{Deserialize, Serialize};

use homestead_types::{AnimalId, AnimalKind};

use crate::error::EconomyError;

/// A live wild animal near the settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Handle used by the hunt that reserves this animal.
    #[serde(default)]
    pub id: AnimalId,
    /// Archetype of the animal.
    pub kind: AnimalKind,
    /// Whether an active hunt has already claimed this animal.
    #[serde(skip_deserializing)]
    pub targeted: bool,
}

impl Animal {
    /// Create a fresh, unclaimed animal of the given kind.
    pub fn new(kind: AnimalKind) -> Self {
        Self {
            id: AnimalId::new(),
            kind,
            targeted: false,
        }
    }
}

/// The player's settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settlement {
    /// Settlement name.
    pub name: String,
    /// Logical clock, advanced once per scheduler step.
    pub current_time: u64,
    /// Cleared land ready to be built on.
    pub available_space: u32,
    /// Land that still has to be opened before it can be built on.
    pub not_worked_space: u32,
    /// Land occupied by completed buildings.
    pub used_space: u32,
    /// Number of road segments.
    pub roads_count: u32,
    /// Total population.
    pub population_count: u32,
    /// Population currently reserved by active events.
    ///
    /// No event is active when a settlement is loaded, so this always
    /// starts at zero.
    #[serde(skip_deserializing)]
    pub busy_population_count: u32,
    /// Completed houses.
    pub houses_count: u32,
    /// Unexploited gold mine slots.
    pub gold_mines: u32,
    /// Wild animals currently roaming nearby.
    pub animals: Vec<Animal>,
    /// Per-tick probability that a new animal spawns.
    pub animal_spawn_rate: f64,
    /// Per-tick probability that a new gold mine slot appears.
    pub gold_mine_spawn_rate: f64,
    /// Gold per road per tick while road gold is being collected.
    pub road_gold_generation: f64,
    /// Ticks a mining expedition takes.
    pub mine_time: u64,
    /// Whether a road gold collection is currently running.
    #[serde(skip_deserializing)]
    pub collecting_road_gold: bool,
}

impl Default for Settlement {
    fn default() -> Self {
        Self {
            name: "Wiwaland".to_owned(),
            current_time: 0,
            available_space: 10,
            not_worked_space: 10,
            used_space: 0,
            roads_count: 10,
            population_count: 10,
            busy_population_count: 0,
            houses_count: 0,
            gold_mines: 1,
            animals: Vec::new(),
            animal_spawn_rate: 0.4,
            gold_mine_spawn_rate: 0.4,
            road_gold_generation: 0.4,
            mine_time: 2,
            collecting_road_gold: false,
        }
    }
}

impl Settlement {
    /// Advance the logical clock by one tick and return the new time.
    pub const fn advance_time(&mut self) -> u64 {
        self.current_time = self.current_time.saturating_add(1);
        self.current_time
    }

    /// Population not reserved by any event.
    pub const fn idle_population(&self) -> u32 {
        self.population_count
            .saturating_sub(self.busy_population_count)
    }

    /// Check that `needed` workers could be reserved right now.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::NotEnoughPopulation`] when
    /// `busy + needed > population`.
    pub fn ensure_workers(&self, needed: u32) -> Result<(), EconomyError> {
        let fits = self
            .busy_population_count
            .checked_add(needed)
            .is_some_and(|total| total <= self.population_count);
        if fits {
            Ok(())
        } else {
            Err(EconomyError::NotEnoughPopulation {
                needed,
                idle: self.idle_population(),
            })
        }
    }

    /// Reserve `needed` workers.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::NotEnoughPopulation`] without mutating when the
    /// reservation does not fit.
    pub fn reserve_workers(&mut self, needed: u32) -> Result<(), EconomyError> {
        self.ensure_workers(needed)?;
        self.busy_population_count = self.busy_population_count.saturating_add(needed);
        Ok(())
    }

    /// Release `count` previously reserved workers.
    pub const fn release_workers(&mut self, count: u32) {
        self.busy_population_count = self.busy_population_count.saturating_sub(count);
    }

    /// Grow the population, e.g. when a house is completed.
    pub const fn grow_population(&mut self, count: u32) {
        self.population_count = self.population_count.saturating_add(count);
    }

    /// First animal of `kind` that no hunt has claimed yet.
    pub fn find_huntable(&self, kind: AnimalKind) -> Option<&Animal> {
        self.animals
            .iter()
            .find(|animal| animal.kind == kind && !animal.targeted)
    }

    /// Mark an animal as claimed by a hunt. Returns `false` if it is gone.
    pub fn target_animal(&mut self, id: AnimalId) -> bool {
        if let Some(animal) = self.animals.iter_mut().find(|animal| animal.id == id) {
            animal.targeted = true;
            true
        } else {
            false
        }
    }

    /// Remove an animal from the live collection.
    pub fn remove_animal(&mut self, id: AnimalId) -> Option<Animal> {
        let position = self.animals.iter().position(|animal| animal.id == id)?;
        Some(self.animals.remove(position))
    }

    /// Add a freshly spawned animal and return its handle.
    pub fn spawn_animal(&mut self, kind: AnimalKind) -> AnimalId {
        let animal = Animal::new(kind);
        let id = animal.id;
        self.animals.push(animal);
        id
    }
}
