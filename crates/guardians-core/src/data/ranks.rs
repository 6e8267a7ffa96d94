//! Rank lookup from influence score.

use serde::{Deserialize, Serialize};

use crate::components::Alignment;
use crate::error::{CoreError, Result};

/// One row of the ranks table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub key: String,
    /// Half-open `[lower, upper)`; `None` is unbounded on that side.
    pub bounds: (Option<i32>, Option<i32>),
    pub tier: u8,
    /// Article per alignment band (conservative, moderate, liberal)
    pub preposition: [String; 3],
    /// Title per alignment band (conservative, moderate, liberal)
    #[serde(rename = "str")]
    pub title: [String; 3],
}

impl Rank {
    pub fn contains(&self, influence: i32) -> bool {
        let (lower, upper) = self.bounds;
        lower.map_or(true, |lo| influence >= lo) && upper.map_or(true, |hi| influence < hi)
    }
}

/// Ranks in table order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankTable {
    ranks: Vec<Rank>,
}

impl RankTable {
    pub fn new(ranks: Vec<Rank>) -> Self {
        Self { ranks }
    }

    pub fn lookup(&self, influence: i32) -> Result<&Rank> {
        self.ranks
            .iter()
            .find(|rank| rank.contains(influence))
            .ok_or(CoreError::NoRank(influence))
    }

    /// Display title for `influence` as seen by a character of `alignment`,
    /// e.g. "a Concerned Citizen". Empty parts are skipped.
    pub fn title(&self, influence: i32, alignment: Alignment) -> Result<String> {
        let rank = self.lookup(influence)?;
        let band = alignment.index()?;
        let words: Vec<&str> = [rank.preposition[band].as_str(), rank.title[band].as_str()]
            .into_iter()
            .filter(|w| !w.is_empty())
            .collect();
        Ok(words.join(" "))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rank> {
        self.ranks.iter()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
