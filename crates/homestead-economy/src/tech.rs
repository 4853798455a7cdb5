//! Research and development state.

use serde::{Deserialize, Serialize};

/// Era and construction timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechState {
    /// Current era tier.
    pub era_level: u32,
    /// Highest level any building may reach in this era.
    pub max_building_improvements: u32,
    /// Ticks a construction takes.
    pub build_time: u64,
    /// Ticks an improvement takes.
    pub improvement_time: u64,
}

impl Default for TechState {
    fn default() -> Self {
        Self {
            era_level: 1,
            max_building_improvements: 3,
            build_time: 4,
            improvement_time: 6,
        }
    }
}
