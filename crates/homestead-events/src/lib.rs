//! Timed events for the Homestead simulation.
//!
//! Every piece of work in the settlement is an [`Event`]: a countdown plus
//! the effect applied when it reaches zero. Constructors are the only
//! validation gate. They either reserve what the event needs and return it,
//! or return an [`EventAdditionError`] having changed nothing.
//!
//! # Modules
//!
//! - [`event`] -- The [`Event`] type and tick dispatch
//! - [`labor`] -- Mining, road work, land clearing, hunting
//! - [`construction`] -- Building construction and improvement
//! - [`combat`] -- Attacks, cooldown, and rival raids
//! - [`recurring`] -- Background spawn and rival update trials
//! - [`command`] -- Player command vocabulary ([`EventCommand`])
//! - [`error`] -- [`EventAdditionError`] and [`CommandError`]

pub mod combat;
pub mod command;
pub mod construction;
pub mod error;
pub mod event;
pub mod labor;
pub mod recurring;

pub use command::EventCommand;
pub use error::{CommandError, EventAdditionError};
pub use event::{Event, EventKind, RECURRING_TICKS};
