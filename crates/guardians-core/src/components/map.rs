//! Areas: the populated cells of a location.

use serde::{Deserialize, Serialize};

use super::grid::Coord;
use super::people::Character;

/// One carved cell of a location and the people found there
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    /// Key into the areas table
    pub archetype: String,
    pub coord: Coord,
    pub characters: Vec<Character>,
}

impl Area {
    pub fn new(archetype: impl Into<String>, coord: Coord, characters: Vec<Character>) -> Self {
        Self {
            archetype: archetype.into(),
            coord,
            characters,
        }
    }

    pub fn population(&self) -> usize {
        self.characters.len()
    }
}

/// What the player can currently tell about an area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sight {
    /// Never entered
    Unvisited,
    /// Entered before but too far away to see now
    OutOfSight,
    InSight { population: usize },
}

/// Player-facing view of one area
#[derive(Debug, Clone, Copy)]
pub struct AreaView<'a> {
    pub area: &'a Area,
    /// Forbidden and not where the player stands
    pub restricted: bool,
    pub sight: Sight,
}
