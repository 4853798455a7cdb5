//! Persistent building instances.
//!
//! Gold and Food buildings live in the [`ResourcePool`]; Attack and Defense
//! buildings live in the [`MilitaryState`]. Houses never become instances.
//!
//! [`ResourcePool`]: crate::resources::ResourcePool
//! [`MilitaryState`]: crate::military::MilitaryState

use serde::{Deserialize, Serialize};

use homestead_types::{BuildingId, BuildingKind};

/// A constructed building that can be improved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Handle used by improvement events.
    #[serde(default)]
    pub id: BuildingId,
    /// Archetype of the building.
    pub kind: BuildingKind,
    /// Current level, starting at 1.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Whether an improvement event currently holds this building.
    #[serde(skip_deserializing)]
    pub improving: bool,
}

impl Building {
    /// A freshly completed level-1 building.
    pub fn new(kind: BuildingKind) -> Self {
        Self {
            id: BuildingId::new(),
            kind,
            level: 1,
            improving: false,
        }
    }

    /// Whether a new improvement could start on this building.
    pub const fn is_improvable(&self, max_level: u32) -> bool {
        !self.improving && self.level < max_level
    }
}

/// Find a building by handle.
pub fn find_mut(buildings: &mut [Building], id: BuildingId) -> Option<&mut Building> {
    buildings.iter_mut().find(|building| building.id == id)
}

const fn default_level() -> u32 {
    1
}
