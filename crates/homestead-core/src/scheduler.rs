//! The event scheduler.
//!
//! [`EventHandler`] owns every active event in insertion order and drives
//! them one logical step at a time. It performs no validation: anything
//! handed to [`EventHandler::add_event`] was already admitted by its
//! constructor.
//!
//! # Step order
//!
//! 1. Advance the settlement clock.
//! 2. Tick every event once, oldest first.
//! 3. Remove finished events, keeping the order of the rest.
//! 4. For every attack removed, clear the attack flag and enqueue a
//!    cooldown.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use homestead_economy::Economy;
use homestead_events::Event;

/// Owns the active events and the random source they tick with.
#[derive(Debug, Clone)]
pub struct EventHandler {
    events: Vec<Event>,
    attack_in_progress: bool,
    rng: StdRng,
}

impl EventHandler {
    /// Create an empty scheduler whose random draws derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            events: Vec::new(),
            attack_in_progress: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Append an admitted event.
    pub fn add_event(&mut self, event: Event) {
        if event.is_attack() {
            self.attack_in_progress = true;
        }
        debug!(event = %event, active = self.events.len(), "event added");
        self.events.push(event);
    }

    /// Run one logical step against `economy`.
    pub fn advance_time(&mut self, economy: &mut Economy) {
        let tick = economy.settlement.advance_time();
        for event in &mut self.events {
            event.tick(economy, &mut self.rng);
        }

        let before = self.events.len();
        let finished_attacks = self
            .events
            .iter()
            .filter(|event| event.is_finished() && event.is_attack())
            .count();
        self.events.retain(|event| !event.is_finished());
        let removed = before.saturating_sub(self.events.len());

        for _ in 0..finished_attacks {
            self.attack_in_progress = false;
            self.add_event(Event::rest_from_attack());
        }
        if removed > 0 {
            debug!(tick, removed, active = self.events.len(), "finished events removed");
        }
    }

    /// Active events in insertion order.
    pub fn active_events(&self) -> &[Event] {
        &self.events
    }

    /// Whether an admitted attack has not been removed yet.
    pub const fn attack_in_progress(&self) -> bool {
        self.attack_in_progress
    }

    /// Number of active events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are active.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use homestead_events::EventKind;

    use super::*;

    #[test]
    fn clock_advances_each_step() {
        let mut economy = Economy::default();
        let mut handler = EventHandler::new(0);
        handler.advance_time(&mut economy);
        handler.advance_time(&mut economy);
        assert_eq!(economy.settlement.current_time, 2);
        assert!(handler.is_empty());
    }

    #[test]
    fn finished_events_are_removed_in_order() {
        let mut economy = Economy::default();
        economy.settlement.roads_count = 0;
        let mut handler = EventHandler::new(0);
        handler.add_event(Event::open_space(&mut economy.settlement).unwrap());
        handler.add_event(Event::build_road(&economy).unwrap());
        handler.add_event(Event::spawn_mine());
        assert_eq!(handler.len(), 3);

        handler.advance_time(&mut economy);
        let kinds: Vec<&str> = handler
            .active_events()
            .iter()
            .map(|e| e.kind().name())
            .collect();
        assert_eq!(kinds, ["OpenSpace", "SpawnMine"]);
    }

    #[test]
    fn finished_attack_enqueues_rest() {
        let mut economy = Economy::default();
        economy.military.attack_force_rate = 100.0;
        let mut handler = EventHandler::new(3);
        handler.add_event(Event::attack_enemies(&mut economy.military).unwrap());
        assert!(handler.attack_in_progress());

        handler.advance_time(&mut economy);
        assert!(!handler.attack_in_progress());
        assert_eq!(handler.len(), 1);
        assert_eq!(
            handler.active_events().first().map(Event::kind),
            Some(&EventKind::RestFromAttack)
        );
        assert_eq!(
            handler.active_events().first().map(Event::remaining_ticks),
            Some(20)
        );
    }
}
