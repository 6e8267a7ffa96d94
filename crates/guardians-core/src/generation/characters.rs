//! Character generation: profession data, alignment pressure, country mood
//! and rank combined into one inhabitant.

use std::collections::BTreeMap;

use rand::Rng;

use super::names::{IdentitySource, StockIdentities};
use crate::components::*;
use crate::data::Registry;
use crate::error::Result;

/// Optional overrides - `None` means "take it from the profession".
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterOverrides {
    pub alignment: Option<Alignment>,
    pub influence: Option<i32>,
    pub sex: Option<Sex>,
}

/// Builds characters against one registry.
#[derive(Debug, Clone)]
pub struct CharacterFactory<'a, I = StockIdentities> {
    registry: &'a Registry,
    identities: I,
}

impl<'a> CharacterFactory<'a, StockIdentities> {
    pub fn new(registry: &'a Registry) -> Self {
        Self::with_identities(registry, StockIdentities)
    }
}

impl<'a, I: IdentitySource> CharacterFactory<'a, I> {
    pub fn with_identities(registry: &'a Registry, identities: I) -> Self {
        Self {
            registry,
            identities,
        }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Generate a member of `profession`.
    ///
    /// Stats are rolled with `mood` (the country's pull), the born
    /// alignment's modifier and the profession's modifier, then rescaled by
    /// the rank the influence score falls in.
    pub fn create(
        &self,
        profession: &str,
        mood: &StatModifiers,
        overrides: CharacterOverrides,
        rng: &mut impl Rng,
    ) -> Result<Character> {
        let job = self.registry.profession(profession)?;
        let born_alignment = overrides.alignment.unwrap_or(job.alignment);

        let rolled = Attributes::random(mood, &born_alignment.modifier(), &job.attrs_mod, rng);
        let influence = overrides
            .influence
            .unwrap_or_else(|| job.juice.unwrap_or_default().roll(rng));
        let rank_tier = self.registry.ranks.lookup(influence)?.tier;
        let attributes = rolled.juiced(&self.registry.ranks, influence, born_alignment)?;

        let sex = overrides.sex.unwrap_or_else(|| random_sex(rng));
        let age_band = random_age_band(rng);
        let age = rng.gen_range(age_band.years());
        let name = self.identities.name(sex, rng);
        let portrait = self.identities.portrait(sex, age_band);

        Ok(Character {
            name,
            sex,
            age,
            profession: profession.to_string(),
            born_alignment,
            attributes,
            influence,
            rank_tier,
            portrait,
            wounds: Wound::default(),
            offences: BTreeMap::new(),
        })
    }
}

fn random_sex(rng: &mut impl Rng) -> Sex {
    if rng.gen_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    }
}

/// Youth 15%, adult 70%, elder 15%
fn random_age_band(rng: &mut impl Rng) -> AgeBand {
    match rng.gen_range(0..100) {
        0..=14 => AgeBand::Youth,
        15..=84 => AgeBand::Adult,
        _ => AgeBand::Elder,
    }
}
