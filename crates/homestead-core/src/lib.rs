//! Scheduling and orchestration for the Homestead simulation.
//!
//! This crate ties the economy and the events together. It owns no game
//! rules of its own beyond the per-step order: production, the rival raid
//! trial, then the scheduler.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration ([`SimulationConfig`])
//! - [`scheduler`] -- The event scheduler ([`EventHandler`])
//! - [`simulation`] -- The driver facade ([`Simulation`])

pub mod config;
pub mod scheduler;
pub mod simulation;

pub use config::{ConfigError, LoggingConfig, RunConfig, ScriptEntry, SimulationConfig, WorldConfig};
pub use scheduler::EventHandler;
pub use simulation::{Simulation, SubmitError};
