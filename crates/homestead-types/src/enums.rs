//! Archetype tags for the Homestead simulation.
//!
//! Both enumerations are closed sets in a fixed catalog order. The order
//! matters: the cost engine draws one pair of random values per archetype in
//! [`BuildingKind::ALL`] order, so reordering changes every seeded cost.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known archetype.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown archetype: {name}")]
pub struct ParseArchetypeError {
    /// The unrecognized name, exactly as given.
    pub name: String,
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

/// A kind of building the settlement can construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    /// Produces gold every tick, scaled by level.
    Gold,
    /// Produces food every tick, scaled by level.
    Food,
    /// Raises population on completion. Does not persist as an object.
    House,
    /// Barracks for attack units; raises attack capacity and force rate.
    Attack,
    /// Fortification for defense units; raises defense capacity and force rate.
    Defense,
}

impl BuildingKind {
    /// Every building kind, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Gold,
        Self::Food,
        Self::House,
        Self::Attack,
        Self::Defense,
    ];

    /// The case-sensitive tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Food => "Food",
            Self::House => "House",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
        }
    }

    /// Whether completed buildings of this kind live in the resource pool.
    pub const fn is_producer(self) -> bool {
        matches!(self, Self::Gold | Self::Food)
    }

    /// Whether completed buildings of this kind live in the military state.
    pub const fn is_military(self) -> bool {
        matches!(self, Self::Attack | Self::Defense)
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildingKind {
    type Err = ParseArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseArchetypeError { name: s.to_owned() })
    }
}

// ---------------------------------------------------------------------------
// Animals
// ---------------------------------------------------------------------------

/// A kind of wild animal that can spawn around the settlement and be hunted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    /// Small, quick hunt.
    Bunny,
    /// Medium hunt.
    Fox,
    /// Large hunt.
    Deer,
    /// Largest hunt, needs the most hunters.
    Bear,
}

impl AnimalKind {
    /// Every animal kind, in catalog order.
    pub const ALL: [Self; 4] = [Self::Bunny, Self::Fox, Self::Deer, Self::Bear];

    /// The case-sensitive tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bunny => "Bunny",
            Self::Fox => "Fox",
            Self::Deer => "Deer",
            Self::Bear => "Bear",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimalKind {
    type Err = ParseArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseArchetypeError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_tags_round_trip() {
        for kind in BuildingKind::ALL {
            assert_eq!(kind.as_str().parse::<BuildingKind>(), Ok(kind));
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("gold".parse::<BuildingKind>().is_err());
        assert!("bear".parse::<AnimalKind>().is_err());
        assert_eq!("Bear".parse::<AnimalKind>(), Ok(AnimalKind::Bear));
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = "Castle".parse::<BuildingKind>().err();
        assert_eq!(
            err,
            Some(ParseArchetypeError {
                name: "Castle".to_owned()
            })
        );
    }

    #[test]
    fn producer_and_military_partition() {
        assert!(BuildingKind::Gold.is_producer());
        assert!(BuildingKind::Food.is_producer());
        assert!(BuildingKind::Attack.is_military());
        assert!(BuildingKind::Defense.is_military());
        assert!(!BuildingKind::House.is_producer());
        assert!(!BuildingKind::House.is_military());
    }
}
