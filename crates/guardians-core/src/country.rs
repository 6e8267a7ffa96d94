//! The country: national mood, the clock and the head of state.
//!
//! Mood is the one value shared with character generation. It is written
//! only by game events between location builds and read through
//! [`Country::mood_modifier`] by every character rolled in the meantime.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Alignment, Character, Stat, StatModifiers};
use crate::error::Result;
use crate::generation::{CharacterFactory, CharacterOverrides, IdentitySource};

pub const MOOD_MIN: i32 = -1000;
pub const MOOD_MAX: i32 = 1000;

/// Largest empathy/insight shift a country at either mood extreme applies.
pub const MOOD_SHIFT: f64 = 5.0;

const PRESIDENT: &str = "president";

/// How many in-game days pass per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speed {
    VerySlow,
    Slow,
    #[default]
    Normal,
    Fast,
    VeryFast,
}

impl Speed {
    pub fn days_per_tick(self) -> u32 {
        match self {
            Speed::VerySlow => 1,
            Speed::Slow => 2,
            Speed::Normal => 4,
            Speed::Fast => 6,
            Speed::VeryFast => 12,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// Always within [`MOOD_MIN`, `MOOD_MAX`]
    mood: i32,
    pub speed: Speed,
    pub elapsed_days: u32,
    pub president: Character,
}

impl Country {
    /// Found a country and elect a president who shares its leaning.
    pub fn new<I: IdentitySource>(
        name: impl Into<String>,
        mood: i32,
        factory: &CharacterFactory<'_, I>,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let mood = mood.clamp(MOOD_MIN, MOOD_MAX);
        let overrides = CharacterOverrides {
            alignment: Some(Alignment::from_mood(mood).std()),
            ..CharacterOverrides::default()
        };
        let president = factory.create(PRESIDENT, &mood_modifier_for(mood), overrides, rng)?;

        let country = Self {
            name: name.into(),
            mood,
            speed: Speed::default(),
            elapsed_days: 0,
            president,
        };
        log::info!(
            "Founded {} (mood {}, {}), president {}",
            country.name,
            country.mood,
            country.mood_description(),
            country.president.full_name()
        );
        Ok(country)
    }

    pub fn mood(&self) -> i32 {
        self.mood
    }

    /// Store `mood`, clamped to [`MOOD_MIN`, `MOOD_MAX`].
    pub fn set_mood(&mut self, mood: i32) {
        self.mood = mood.clamp(MOOD_MIN, MOOD_MAX);
    }

    pub fn shift_mood(&mut self, delta: i32) {
        self.set_mood(self.mood.saturating_add(delta));
    }

    /// Five-band reading of the mood
    pub fn alignment(&self) -> Alignment {
        Alignment::from_mood(self.mood)
    }

    pub fn std_alignment(&self) -> Alignment {
        self.alignment().std()
    }

    /// Stat pull the national mood exerts on everyone generated now.
    pub fn mood_modifier(&self) -> StatModifiers {
        mood_modifier_for(self.mood)
    }

    pub fn mood_description(&self) -> &'static str {
        match self.alignment() {
            Alignment::ArchConservative => "fanatically conservative",
            Alignment::Conservative => "strongly conservative",
            Alignment::Moderate => "susceptible to liberal ideas",
            Alignment::Liberal => "showing liberal sympathy",
            _ => "embracing liberal ideas",
        }
    }

    /// One tick of the clock. Returns the total days elapsed.
    pub fn advance(&mut self) -> u32 {
        self.elapsed_days += self.speed.days_per_tick();
        self.elapsed_days
    }
}

/// `round(mood / 1000 * 5)` (ties to even) added to the empathy range and
/// taken off the insight range.
pub fn mood_modifier_for(mood: i32) -> StatModifiers {
    let shift = (f64::from(mood) * MOOD_SHIFT / f64::from(MOOD_MAX)).round_ties_even() as i32;
    StatModifiers::none()
        .with(Stat::Empathy, shift, shift)
        .with(Stat::Insight, -shift, -shift)
}
