//! The player command vocabulary.
//!
//! Tags are exact and case-sensitive. Arguments are kept as given: archetype
//! names are resolved by the event constructors, which report unknown names
//! as [`EventAdditionError::UnknownArchetype`].

use core::fmt;

use homestead_economy::Economy;

use crate::error::{CommandError, EventAdditionError};
use crate::event::Event;

/// A player request to start an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventCommand {
    /// `MineGold`
    MineGold,
    /// `CollectRoadGold`
    CollectRoadGold,
    /// `BuildRoad`
    BuildRoad,
    /// `OpenSpace`
    OpenSpace,
    /// `HuntAnimal <animal>`
    HuntAnimal(String),
    /// `BuildBuilding <kind>`
    BuildBuilding(String),
    /// `ImproveBuilding <kind>`
    ImproveBuilding(String),
    /// `AttackEnemies`
    AttackEnemies,
}

impl EventCommand {
    /// Parse a command tag and its optional argument.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownCommand`] for an unrecognized tag and
    /// [`CommandError::MissingArgument`] when a command needing an argument
    /// gets none (or an empty one).
    pub fn parse(tag: &str, arg: Option<&str>) -> Result<Self, CommandError> {
        let required = || {
            arg.filter(|a| !a.is_empty())
                .map(str::to_owned)
                .ok_or_else(|| CommandError::MissingArgument {
                    tag: tag.to_owned(),
                })
        };
        match tag {
            "MineGold" => Ok(Self::MineGold),
            "CollectRoadGold" => Ok(Self::CollectRoadGold),
            "BuildRoad" => Ok(Self::BuildRoad),
            "OpenSpace" => Ok(Self::OpenSpace),
            "HuntAnimal" => required().map(Self::HuntAnimal),
            "BuildBuilding" => required().map(Self::BuildBuilding),
            "ImproveBuilding" => required().map(Self::ImproveBuilding),
            "AttackEnemies" => Ok(Self::AttackEnemies),
            _ => Err(CommandError::UnknownCommand {
                tag: tag.to_owned(),
            }),
        }
    }

    /// The command's tag.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::MineGold => "MineGold",
            Self::CollectRoadGold => "CollectRoadGold",
            Self::BuildRoad => "BuildRoad",
            Self::OpenSpace => "OpenSpace",
            Self::HuntAnimal(_) => "HuntAnimal",
            Self::BuildBuilding(_) => "BuildBuilding",
            Self::ImproveBuilding(_) => "ImproveBuilding",
            Self::AttackEnemies => "AttackEnemies",
        }
    }

    /// Construct the event this command asks for. `seed` prices
    /// construction and improvement.
    ///
    /// # Errors
    ///
    /// Whatever the matching constructor rejects with.
    pub fn to_event(&self, economy: &mut Economy, seed: u64) -> Result<Event, EventAdditionError> {
        match self {
            Self::MineGold => Event::mine_gold(&mut economy.settlement),
            Self::CollectRoadGold => Event::collect_road_gold(&mut economy.settlement),
            Self::BuildRoad => Event::build_road(economy),
            Self::OpenSpace => Event::open_space(&mut economy.settlement),
            Self::HuntAnimal(name) => Event::hunt_animal(&mut economy.settlement, name),
            Self::BuildBuilding(name) => Event::build_building(
                &mut economy.settlement,
                &mut economy.resources,
                &economy.tech,
                name,
                seed,
            ),
            Self::ImproveBuilding(name) => Event::improve_building(
                &mut economy.settlement,
                &mut economy.resources,
                &mut economy.military,
                &economy.tech,
                name,
                seed,
            ),
            Self::AttackEnemies => Event::attack_enemies(&mut economy.military),
        }
    }
}

impl fmt::Display for EventCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HuntAnimal(arg) | Self::BuildBuilding(arg) | Self::ImproveBuilding(arg) => {
                write!(f, "{} {arg}", self.tag())
            }
            _ => f.write_str(self.tag()),
        }
    }
}
