//! Area population - weighted encounter sampling feeding the character
//! factory.

use std::collections::BTreeMap;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::IteratorRandom;
use rand::Rng;

use super::characters::{CharacterFactory, CharacterOverrides};
use super::names::IdentitySource;
use crate::components::Character;
use crate::country::Country;
use crate::data::AreaArchetype;
use crate::error::{CoreError, Result};

/// Encounter key that stands for "any known profession".
pub const ANY_PROFESSION: &str = "any";

/// Weight an encounter table is topped up to with [`ANY_PROFESSION`].
pub const ENCOUNTER_WEIGHT_TOTAL: u32 = 10;

/// Half-open range of people found in one area
pub const POPULATION_RANGE: std::ops::Range<usize> = 10..20;

/// Sum of a table's weights. A sum past `u32::MAX` is `DegenerateWeights`.
pub fn total_weight(table: &BTreeMap<String, u32>, what: &str) -> Result<u32> {
    table
        .values()
        .try_fold(0u32, |total, weight| total.checked_add(*weight))
        .ok_or_else(|| CoreError::DegenerateWeights(what.to_string()))
}

/// The archetype's encounter weights, topped up with an "any" bucket when
/// they sum to less than [`ENCOUNTER_WEIGHT_TOTAL`].
pub fn encounter_table(archetype: &AreaArchetype) -> Result<BTreeMap<String, u32>> {
    let mut table = archetype.encounter.clone();
    let total = total_weight(&table, &archetype.short_desc)?;
    if total < ENCOUNTER_WEIGHT_TOTAL {
        if total == 0 {
            log::warn!("Area '{}' has no encounters, anyone may turn up", archetype.short_desc);
        }
        *table.entry(ANY_PROFESSION.to_string()).or_insert(0) += ENCOUNTER_WEIGHT_TOTAL - total;
    }
    Ok(table)
}

/// Draw one key by weight.
pub fn pick_weighted<'t>(
    table: &'t BTreeMap<String, u32>,
    what: &str,
    rng: &mut impl Rng,
) -> Result<&'t str> {
    total_weight(table, what)?;
    let keys: Vec<&str> = table.keys().map(String::as_str).collect();
    let dist = WeightedIndex::new(table.values().copied())
        .map_err(|_| CoreError::DegenerateWeights(what.to_string()))?;
    Ok(keys[dist.sample(rng)])
}

/// Roll the people standing in one area of `archetype_key` right now.
pub fn populate<I: IdentitySource>(
    factory: &CharacterFactory<'_, I>,
    archetype_key: &str,
    country: &Country,
    rng: &mut impl Rng,
) -> Result<Vec<Character>> {
    let registry = factory.registry();
    let archetype = registry.area(archetype_key)?;
    let table = encounter_table(archetype)?;
    let mood = country.mood_modifier();

    let count = rng.gen_range(POPULATION_RANGE);
    let mut people = Vec::with_capacity(count);
    for _ in 0..count {
        let mut profession = pick_weighted(&table, archetype_key, rng)?;
        if profession == ANY_PROFESSION {
            profession = registry
                .profession_keys()
                .choose(rng)
                .ok_or_else(|| CoreError::DegenerateWeights(ANY_PROFESSION.to_string()))?;
        }
        people.push(factory.create(profession, &mood, CharacterOverrides::default(), rng)?);
    }

    log::debug!("Populated {} with {} people", archetype_key, people.len());
    Ok(people)
}
