//! Configuration loading and typed config structures for the Homestead
//! simulation.
//!
//! The canonical configuration lives in `homestead-config.yaml` at the
//! project root. Every section is optional: missing sections and fields fall
//! back to the defaults of the matching aggregate, so an empty document is a
//! valid configuration.

use std::path::Path;

use serde::Deserialize;

use homestead_economy::{Economy, MilitaryState, ResourcePool, RivalState, Settlement, TechState};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `homestead-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Run identity and seed.
    #[serde(default)]
    pub world: WorldConfig,

    /// Initial settlement state.
    #[serde(default)]
    pub settlement: Settlement,

    /// Initial food, gold, and producing buildings.
    #[serde(default)]
    pub resources: ResourcePool,

    /// Initial troops and military buildings.
    #[serde(default)]
    pub military: MilitaryState,

    /// Era and construction timing.
    #[serde(default)]
    pub tech: TechState,

    /// The opposing nation.
    #[serde(default)]
    pub rival: RivalState,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Headless run parameters.
    #[serde(default)]
    pub run: RunConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Assemble the initial economy from the configured aggregates.
    pub fn economy(&self) -> Economy {
        let mut military = self.military.clone();
        military.fill_buildings();
        Economy {
            settlement: self.settlement.clone(),
            resources: self.resources.clone(),
            military,
            tech: self.tech.clone(),
            rival: self.rival.clone(),
        }
    }
}

/// Run identity and seed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable run name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Seed for the scheduler and the driver's random draws.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON-formatted log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,

    /// Log a full snapshot every N ticks. Zero disables periodic snapshots.
    #[serde(default = "default_snapshot_interval_ticks")]
    pub snapshot_interval_ticks: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            snapshot_interval_ticks: default_snapshot_interval_ticks(),
        }
    }
}

/// Headless run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Number of ticks to simulate.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// Commands to submit, each at the start of its tick.
    #[serde(default)]
    pub script: Vec<ScriptEntry>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            script: Vec::new(),
        }
    }
}

/// One scripted command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptEntry {
    /// Tick at which the command is submitted (before that tick's step).
    pub tick: u64,

    /// Command tag, e.g. `BuildBuilding`.
    pub command: String,

    /// Optional argument, e.g. `House`.
    #[serde(default)]
    pub arg: Option<String>,
}

fn default_world_name() -> String {
    "Homestead".to_owned()
}

const fn default_seed() -> u64 {
    42
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_snapshot_interval_ticks() -> u64 {
    10
}

const fn default_max_ticks() -> u64 {
    100
}
