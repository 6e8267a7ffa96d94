//! Identity data shared by every generated character.

use serde::{Deserialize, Serialize};

/// Given/family name with an optional street name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub given: String,
    pub family: String,
    pub nickname: Option<String>,
}

impl Name {
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            family: family.into(),
            nickname: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given, self.family)
    }

    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.given)
    }
}

/// Recorded sex. `Unknown` is only ever assigned explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Unknown => "Unknown",
        }
    }
}

/// Age bracket a character's age is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    Youth,
    Adult,
    Elder,
}

impl AgeBand {
    /// Half-open range of ages in years
    pub fn years(self) -> std::ops::Range<u32> {
        match self {
            AgeBand::Youth => 16..21,
            AgeBand::Adult => 21..40,
            AgeBand::Elder => 40..80,
        }
    }

    pub fn of_age(age: u32) -> AgeBand {
        if age < 21 {
            AgeBand::Youth
        } else if age < 40 {
            AgeBand::Adult
        } else {
            AgeBand::Elder
        }
    }
}
