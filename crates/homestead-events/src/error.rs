//! Error types for the `homestead-events` crate.
//!
//! [`EventAdditionError`] is the only failure the engine itself produces: an
//! event constructor refused to admit an event. It is always returned before
//! any aggregate is touched. [`CommandError`] covers malformed user input at
//! the command layer, before a constructor is ever reached.

use homestead_economy::EconomyError;
use homestead_types::BuildingKind;

/// An event could not be admitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventAdditionError {
    /// No unexploited gold mine slot is available.
    #[error("there are no gold mines")]
    NoGoldMines,

    /// A road gold collection is already running.
    #[error("cannot collect road gold while a collection is already running")]
    AlreadyCollecting,

    /// The settlement has no roads to collect from.
    #[error("there are no roads to collect gold from")]
    NoRoads,

    /// Four more roads would exceed the allowance of four per building.
    #[error("build more buildings before building more roads: {roads} roads for {buildings} buildings")]
    NotEnoughBuildingsForRoads {
        /// Current road count.
        roads: u32,
        /// Buildings counting toward the allowance.
        buildings: u32,
    },

    /// No unworked land is left to open.
    #[error("there is no unworked space left to open")]
    NoUnworkedSpace,

    /// No cleared land is available to build on.
    #[error("there is no available space for new buildings")]
    NoBuildingSpace,

    /// No unclaimed animal of the requested kind is nearby.
    #[error("there is no {name} in the settlement currently")]
    AnimalNotFound {
        /// The requested animal tag.
        name: String,
    },

    /// The requested archetype name matches no catalog entry.
    #[error("unknown archetype: {name}")]
    UnknownArchetype {
        /// The name that failed to resolve.
        name: String,
    },

    /// No completed building of the requested kind exists.
    #[error("there is no {kind} building in the settlement currently")]
    BuildingNotFound {
        /// The requested building kind.
        kind: BuildingKind,
    },

    /// Every building of the requested kind is already being improved.
    #[error("the {kind} building is already being improved")]
    AlreadyImproving {
        /// The requested building kind.
        kind: BuildingKind,
    },

    /// Every idle building of the requested kind is at the era's cap.
    #[error("the {kind} building cannot be improved beyond level {max} in this era")]
    MaxLevelReached {
        /// The requested building kind.
        kind: BuildingKind,
        /// Maximum level for the current era.
        max: u32,
    },

    /// No attack units or no attack building.
    #[error("you don't have troops")]
    NoTroops,

    /// Troops are recovering from the previous attack.
    #[error("your troops are resting")]
    TroopsResting,

    /// An admitted attack has not resolved yet.
    #[error("an attack is already under way")]
    AttackUnderWay,

    /// The aggregates cannot cover the required labor, food, or gold.
    #[error(transparent)]
    Shortage(#[from] EconomyError),
}

/// Malformed input at the command layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The tag names no known command.
    #[error("unknown command: {tag}")]
    UnknownCommand {
        /// The tag as received.
        tag: String,
    },

    /// The command needs an argument and none was given.
    #[error("command {tag} requires an argument")]
    MissingArgument {
        /// The command tag.
        tag: String,
    },
}
