//! Character statistics and the rules that roll and rescale them.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::alignment::Alignment;
use crate::data::RankTable;
use crate::error::Result;

/// The seven character statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Vitality,
    Empathy,
    Insight,
    Intellect,
    Strength,
    Agility,
    Charisma,
}

impl Stat {
    pub const ALL: [Stat; 7] = [
        Stat::Vitality,
        Stat::Empathy,
        Stat::Insight,
        Stat::Intellect,
        Stat::Strength,
        Stat::Agility,
        Stat::Charisma,
    ];
}

/// Per-stat `(low, high)` deltas applied to a roll range before rolling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatModifiers(BTreeMap<Stat, (i32, i32)>);

impl StatModifiers {
    pub fn none() -> Self {
        Self::default()
    }

    /// Add `(low, high)` to whatever is already recorded for `stat`.
    pub fn with(mut self, stat: Stat, low: i32, high: i32) -> Self {
        let entry = self.0.entry(stat).or_insert((0, 0));
        entry.0 += low;
        entry.1 += high;
        self
    }

    pub fn get(&self, stat: Stat) -> (i32, i32) {
        self.0.get(&stat).copied().unwrap_or((0, 0))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|delta| *delta == (0, 0))
    }
}

/// Range every stat is rolled from before modifiers.
pub const BASE_ROLL_RANGE: (i32, i32) = (0, 10);

/// Rank tier at which influence neither weakens nor strengthens a character.
pub const BASE_TIER: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub vitality: i32,
    pub empathy: i32,
    pub insight: i32,
    pub intellect: i32,
    pub strength: i32,
    pub agility: i32,
    pub charisma: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            vitality: 8,
            empathy: 8,
            insight: 8,
            intellect: 8,
            strength: 8,
            agility: 8,
            charisma: 8,
        }
    }
}

impl Attributes {
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Vitality => self.vitality,
            Stat::Empathy => self.empathy,
            Stat::Insight => self.insight,
            Stat::Intellect => self.intellect,
            Stat::Strength => self.strength,
            Stat::Agility => self.agility,
            Stat::Charisma => self.charisma,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Vitality => &mut self.vitality,
            Stat::Empathy => &mut self.empathy,
            Stat::Insight => &mut self.insight,
            Stat::Intellect => &mut self.intellect,
            Stat::Strength => &mut self.strength,
            Stat::Agility => &mut self.agility,
            Stat::Charisma => &mut self.charisma,
        }
    }

    /// Roll a fresh stat block.
    ///
    /// Each stat starts from [`BASE_ROLL_RANGE`]; the mood, alignment and
    /// profession deltas are added to the range bounds in that order, then
    /// the stat is drawn from `max(1, low)..max(2, low + 1, high)`. The
    /// result is always at least 1, even when the modifiers invert the range.
    pub fn random(
        mood: &StatModifiers,
        alignment: &StatModifiers,
        profession: &StatModifiers,
        rng: &mut impl Rng,
    ) -> Self {
        let mut attributes = Self::default();
        for stat in Stat::ALL {
            let (mut low, mut high) = BASE_ROLL_RANGE;
            for modifiers in [mood, alignment, profession] {
                let (dl, dh) = modifiers.get(stat);
                low += dl;
                high += dh;
            }
            let floor = low.max(1);
            let ceiling = high.max(low + 1).max(2);
            *attributes.get_mut(stat) = rng.gen_range(floor..ceiling);
        }
        attributes
    }

    /// Rescale by the rank tier `influence` falls in.
    ///
    /// Tier 0 is returned untouched. Below [`BASE_TIER`] each stat shrinks by
    /// a quarter per tier, from it upward each stat grows by a sixth per tier,
    /// never below 1. Conservatives keep their empathy and liberals their
    /// insight as they were.
    pub fn juiced(&self, ranks: &RankTable, influence: i32, alignment: Alignment) -> Result<Self> {
        let tier = ranks.lookup(influence)?.tier;
        if tier == 0 {
            return Ok(*self);
        }

        let steps = f64::from(tier) - f64::from(BASE_TIER);
        let factor = if tier < BASE_TIER {
            1.0 + steps / 4.0
        } else {
            1.0 + steps / 6.0
        };

        let mut scaled = *self;
        for stat in Stat::ALL {
            let value = (f64::from(self.get(stat)) * factor).round() as i32;
            *scaled.get_mut(stat) = value.max(1);
        }

        match alignment.std() {
            Alignment::Conservative => scaled.empathy = self.empathy,
            Alignment::Liberal => scaled.insight = self.insight,
            _ => {}
        }
        Ok(scaled)
    }
}

impl std::fmt::Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stat in Stat::ALL {
            writeln!(f, "{:<9}:{:>3}", format!("{:?}", stat), self.get(stat))?;
        }
        Ok(())
    }
}
