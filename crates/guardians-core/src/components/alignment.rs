//! Political alignment bands and the stat pressure each one applies.

use serde::{Deserialize, Serialize};

use super::attributes::{Stat, StatModifiers};
use crate::error::{CoreError, Result};

/// Political leaning. The five banded variants order from right to left;
/// `Any` stands for "no conviction" on professions that accept anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    ArchConservative,
    Conservative,
    Moderate,
    Liberal,
    EliteLiberal,
    Any,
}

/// Size of the empathy/insight range shift an alignment applies.
pub const ALIGNMENT_SHIFT: i32 = 5;

/// Empathy minus insight beyond which a character leans one way.
const BALANCE_THRESHOLD: i32 = 2;

impl Alignment {
    /// Fold the extreme bands into their neighbours, leaving the 3-band form.
    pub fn std(self) -> Alignment {
        match self {
            Alignment::ArchConservative => Alignment::Conservative,
            Alignment::EliteLiberal => Alignment::Liberal,
            other => other,
        }
    }

    /// Ordinal used to index per-alignment display arrays:
    /// 0 conservative, 1 moderate, 2 liberal.
    pub fn index(self) -> Result<usize> {
        match self.std() {
            Alignment::Conservative => Ok(0),
            Alignment::Moderate => Ok(1),
            Alignment::Liberal => Ok(2),
            other => Err(CoreError::AlignmentOutOfDomain(other)),
        }
    }

    /// Five-band classification of a country mood in [-1000, 1000].
    pub fn from_mood(mood: i32) -> Alignment {
        match mood {
            i32::MIN..=-750 => Alignment::ArchConservative,
            -749..=-250 => Alignment::Conservative,
            -249..=250 => Alignment::Moderate,
            251..=750 => Alignment::Liberal,
            _ => Alignment::EliteLiberal,
        }
    }

    /// Stat range deltas a character born with this alignment rolls with.
    pub fn modifier(self) -> StatModifiers {
        match self.std() {
            Alignment::Conservative => StatModifiers::none()
                .with(Stat::Empathy, -ALIGNMENT_SHIFT, -ALIGNMENT_SHIFT)
                .with(Stat::Insight, ALIGNMENT_SHIFT, ALIGNMENT_SHIFT),
            Alignment::Liberal => StatModifiers::none()
                .with(Stat::Empathy, ALIGNMENT_SHIFT, ALIGNMENT_SHIFT)
                .with(Stat::Insight, -ALIGNMENT_SHIFT, -ALIGNMENT_SHIFT),
            _ => StatModifiers::none(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Alignment::ArchConservative => "Arch-Conservative",
            Alignment::Conservative => "Conservative",
            Alignment::Moderate => "Moderate",
            Alignment::Liberal => "Liberal",
            Alignment::EliteLiberal => "Elite Liberal",
            Alignment::Any => "Without convictions",
        }
    }
}

/// Three-band alignment from the balance of empathy against insight.
pub fn derive_alignment(empathy: i32, insight: i32) -> Alignment {
    let balance = empathy - insight;
    if balance < -BALANCE_THRESHOLD {
        Alignment::Conservative
    } else if balance > BALANCE_THRESHOLD {
        Alignment::Liberal
    } else {
        Alignment::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_alignment() {
        assert_eq!(derive_alignment(10, 0), Alignment::Liberal);
        assert_eq!(derive_alignment(5, 5), Alignment::Moderate);
        assert_eq!(derive_alignment(0, 10), Alignment::Conservative);
        assert_eq!(derive_alignment(7, 5), Alignment::Moderate);
        assert_eq!(derive_alignment(5, 8), Alignment::Conservative);
    }

    #[test]
    fn test_std_folds_extremes() {
        assert_eq!(Alignment::ArchConservative.std(), Alignment::Conservative);
        assert_eq!(Alignment::EliteLiberal.std(), Alignment::Liberal);
        assert_eq!(Alignment::Moderate.std(), Alignment::Moderate);
        assert_eq!(Alignment::Any.std(), Alignment::Any);
    }

    #[test]
    fn test_index() {
        assert_eq!(Alignment::ArchConservative.index().unwrap(), 0);
        assert_eq!(Alignment::Moderate.index().unwrap(), 1);
        assert_eq!(Alignment::EliteLiberal.index().unwrap(), 2);
        assert!(matches!(
            Alignment::Any.index(),
            Err(CoreError::AlignmentOutOfDomain(Alignment::Any))
        ));
    }

    #[test]
    fn test_mood_bands() {
        assert_eq!(Alignment::from_mood(-1000), Alignment::ArchConservative);
        assert_eq!(Alignment::from_mood(-750), Alignment::ArchConservative);
        assert_eq!(Alignment::from_mood(-749), Alignment::Conservative);
        assert_eq!(Alignment::from_mood(-250), Alignment::Conservative);
        assert_eq!(Alignment::from_mood(0), Alignment::Moderate);
        assert_eq!(Alignment::from_mood(250), Alignment::Moderate);
        assert_eq!(Alignment::from_mood(251), Alignment::Liberal);
        assert_eq!(Alignment::from_mood(750), Alignment::Liberal);
        assert_eq!(Alignment::from_mood(1000), Alignment::EliteLiberal);
    }

    #[test]
    fn test_modifier_is_mirrored() {
        let cons = Alignment::Conservative.modifier();
        let lib = Alignment::EliteLiberal.modifier();
        assert_eq!(cons.get(Stat::Insight), (5, 5));
        assert_eq!(cons.get(Stat::Empathy), (-5, -5));
        assert_eq!(lib.get(Stat::Empathy), (5, 5));
        assert_eq!(lib.get(Stat::Insight), (-5, -5));
        assert!(Alignment::Moderate.modifier().is_empty());
        assert!(Alignment::Any.modifier().is_empty());
    }
}
