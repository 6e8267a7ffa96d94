//! People-related components: Character, wounds and the offence catalogue.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::alignment::{derive_alignment, Alignment};
use super::attributes::Attributes;
use super::common::{Name, Sex};
use crate::data::RankTable;
use crate::error::Result;

/// An inhabitant of the world, generated once and never restructured here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: Name,
    pub sex: Sex,
    pub age: u32,
    /// Key into the professions table
    pub profession: String,
    /// Alignment the stats were rolled with, before they had their say
    pub born_alignment: Alignment,
    pub attributes: Attributes,
    /// Influence score ("juice")
    pub influence: i32,
    /// Tier of the rank `influence` fell in at generation
    pub rank_tier: u8,
    /// Portrait asset path, when an identity source supplied one
    pub portrait: Option<String>,
    pub wounds: Wound,
    pub offences: BTreeMap<Offence, u32>,
}

impl Character {
    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    /// True leaning, read from the stats rather than the profession.
    pub fn alignment(&self) -> Alignment {
        derive_alignment(self.attributes.empathy, self.attributes.insight)
    }

    /// How society addresses this character, e.g. "a Budding Activist".
    pub fn rank_title(&self, ranks: &RankTable) -> Result<String> {
        ranks.title(self.influence, self.alignment())
    }
}

/// Injury flags. Carried for the wider game; nothing in this crate sets them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wound {
    pub light: bool,
    pub heavy: bool,
    pub disable: bool,
}

impl Wound {
    pub fn is_unhurt(&self) -> bool {
        !(self.light || self.heavy || self.disable)
    }
}

/// Crimes a character can be charged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Offence {
    Propaganda,
    Vandalism,
    Nudity,
    Speech,
    Theft,
    Drug,
    Assault,
    Murder,
    Flag,
}

impl Offence {
    pub fn label(self) -> &'static str {
        match self {
            Offence::Propaganda => "Propaganda",
            Offence::Vandalism => "Vandalism",
            Offence::Nudity => "Public nudity",
            Offence::Speech => "Harmful speech",
            Offence::Theft => "Theft",
            Offence::Drug => "Drug dealing",
            Offence::Assault => "Assault",
            Offence::Murder => "Murder",
            Offence::Flag => "Flag burning",
        }
    }

    pub fn is_violent(self) -> bool {
        matches!(self, Offence::Vandalism | Offence::Assault | Offence::Murder)
    }

    /// How badly the authorities take it
    pub fn severity(self) -> u32 {
        match self {
            Offence::Propaganda => 1,
            Offence::Vandalism | Offence::Nudity => 2,
            Offence::Speech | Offence::Theft => 3,
            Offence::Drug => 4,
            Offence::Assault => 5,
            Offence::Murder | Offence::Flag => 10,
        }
    }
}
