//! Error types for the `homestead-economy` crate.
//!
//! These are the shortages an aggregate reports when a caller asks it to
//! commit more than it holds. They are always returned before any mutation.

/// A reservation the aggregate cannot honor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EconomyError {
    /// Not enough idle population to reserve the requested workers.
    #[error("not enough available population: needs {needed} workers but only {idle} are idle")]
    NotEnoughPopulation {
        /// Workers the caller asked for.
        needed: u32,
        /// Workers currently idle.
        idle: u32,
    },

    /// Not enough food to pay a cost.
    #[error("not enough food: needs {needed} but only {available} in store")]
    NotEnoughFood {
        /// Food the caller asked for.
        needed: u64,
        /// Food currently held.
        available: u64,
    },

    /// Not enough gold to pay a cost.
    #[error("not enough gold: needs {needed} but only {available} in store")]
    NotEnoughGold {
        /// Gold the caller asked for.
        needed: u64,
        /// Gold currently held.
        available: u64,
    },
}
