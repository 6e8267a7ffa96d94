//! Reference data: professions, ranks, locations, areas and interactions.
//!
//! The tables are parsed once into a [`Registry`] and never mutated. Every
//! generator borrows the registry; lookups of unknown keys fail with a typed
//! error instead of falling back to a default.

mod ranks;

pub use ranks::*;

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Alignment, StatModifiers};
use crate::error::{CoreError, Result};
use crate::generation::{total_weight, ANY_PROFESSION};

const PROFESSIONS_JSON: &str = include_str!("../../../../data/professions.json");
const RANKS_JSON: &str = include_str!("../../../../data/ranks.json");
const LOCATIONS_JSON: &str = include_str!("../../../../data/locations.json");
const AREAS_JSON: &str = include_str!("../../../../data/areas.json");
const INTERACTIONS_JSON: &str = include_str!("../../../../data/interactions.json");

/// Influence range for professions that do not configure one.
pub const DEFAULT_INFLUENCE: (i32, i32) = (-100, 1100);

/// Influence a profession grants its members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Influence {
    Fixed(i32),
    /// Half-open `[low, high)`
    Range(i32, i32),
}

impl Influence {
    /// An empty range yields `low`; the registry refuses such ranges on load.
    pub fn roll(self, rng: &mut impl Rng) -> i32 {
        match self {
            Influence::Fixed(value) => value,
            Influence::Range(low, high) if high > low => rng.gen_range(low..high),
            Influence::Range(low, _) => low,
        }
    }
}

impl Default for Influence {
    fn default() -> Self {
        Influence::Range(DEFAULT_INFLUENCE.0, DEFAULT_INFLUENCE.1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profession {
    /// Alignment members are born with unless overridden
    pub alignment: Alignment,
    #[serde(default)]
    pub attrs_mod: StatModifiers,
    #[serde(default)]
    pub juice: Option<Influence>,
    pub short_desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationTemplate {
    /// Area archetype key -> weight
    pub areas: BTreeMap<String, u32>,
    pub short_desc: String,
    pub long_desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaArchetype {
    /// Profession key -> weight
    #[serde(default)]
    pub encounter: BTreeMap<String, u32>,
    #[serde(default)]
    pub forbidden: bool,
    #[serde(default)]
    pub interactions: Vec<String>,
    pub short_desc: String,
    pub long_desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub short_desc: String,
    pub long_desc: String,
}

/// Raw JSON text of the five reference tables
#[derive(Debug, Clone, Copy)]
pub struct TableSources<'a> {
    pub professions: &'a str,
    pub ranks: &'a str,
    pub locations: &'a str,
    pub areas: &'a str,
    pub interactions: &'a str,
}

impl TableSources<'static> {
    /// The tables shipped in `data/`.
    pub fn builtin() -> Self {
        Self {
            professions: PROFESSIONS_JSON,
            ranks: RANKS_JSON,
            locations: LOCATIONS_JSON,
            areas: AREAS_JSON,
            interactions: INTERACTIONS_JSON,
        }
    }
}

/// All reference tables, loaded once and shared by reference.
#[derive(Debug, Clone)]
pub struct Registry {
    pub professions: BTreeMap<String, Profession>,
    pub ranks: RankTable,
    pub locations: BTreeMap<String, LocationTemplate>,
    pub areas: BTreeMap<String, AreaArchetype>,
    pub interactions: BTreeMap<String, Interaction>,
}

impl Registry {
    /// Registry over the built-in tables.
    pub fn builtin() -> Result<Self> {
        Self::from_json(TableSources::builtin())
    }

    /// Parse and cross-check caller-supplied tables.
    pub fn from_json(sources: TableSources<'_>) -> Result<Self> {
        log::debug!("Loading reference data: started");
        let registry = Self {
            professions: serde_json::from_str(sources.professions)?,
            ranks: serde_json::from_str(sources.ranks)?,
            locations: serde_json::from_str(sources.locations)?,
            areas: serde_json::from_str(sources.areas)?,
            interactions: serde_json::from_str(sources.interactions)?,
        };
        registry.validate()?;
        log::info!(
            "Reference data loaded: {} professions, {} ranks, {} locations, {} areas, {} interactions",
            registry.professions.len(),
            registry.ranks.len(),
            registry.locations.len(),
            registry.areas.len(),
            registry.interactions.len()
        );
        Ok(registry)
    }

    /// Every key one table uses must exist in the table it points into,
    /// every weighted table must fit a `u32` total and every influence range
    /// must be non-empty.
    fn validate(&self) -> Result<()> {
        for (key, profession) in &self.professions {
            if let Some(Influence::Range(low, high)) = profession.juice {
                if high <= low {
                    return Err(CoreError::InvalidData(format!(
                        "profession '{}' has an empty influence range [{}, {})",
                        key, low, high
                    )));
                }
            }
        }
        for (key, template) in &self.locations {
            total_weight(&template.areas, key)?;
            for area in template.areas.keys() {
                self.area(area)?;
            }
        }
        for (key, archetype) in &self.areas {
            total_weight(&archetype.encounter, key)?;
            for profession in archetype.encounter.keys() {
                if profession != ANY_PROFESSION {
                    self.profession(profession)?;
                }
            }
            for interaction in &archetype.interactions {
                self.interaction(interaction)?;
            }
        }
        Ok(())
    }

    pub fn profession(&self, key: &str) -> Result<&Profession> {
        self.professions
            .get(key)
            .ok_or_else(|| CoreError::UnknownProfession(key.to_string()))
    }

    pub fn area(&self, key: &str) -> Result<&AreaArchetype> {
        self.areas
            .get(key)
            .ok_or_else(|| CoreError::UnknownArea(key.to_string()))
    }

    pub fn location(&self, key: &str) -> Result<&LocationTemplate> {
        self.locations
            .get(key)
            .ok_or_else(|| CoreError::UnknownLocation(key.to_string()))
    }

    pub fn interaction(&self, key: &str) -> Result<&Interaction> {
        self.interactions
            .get(key)
            .ok_or_else(|| CoreError::UnknownInteraction(key.to_string()))
    }

    /// Profession keys in table order
    pub fn profession_keys(&self) -> impl Iterator<Item = &str> {
        self.professions.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Stat;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_tables_load() {
        let registry = Registry::builtin().unwrap();
        assert!(registry.professions.contains_key("president"));
        assert!(registry.professions.contains_key("civilian"));
        assert!(!registry.ranks.is_empty());
        assert!(!registry.locations.is_empty());
        assert!(registry.areas.values().any(|a| a.forbidden));
    }

    #[test]
    fn test_builtin_ranks_cover_every_score() {
        let registry = Registry::builtin().unwrap();
        for influence in [i32::MIN, -1000, -1, 0, 1, 99, 500, 1099, 5000, i32::MAX] {
            assert!(registry.ranks.lookup(influence).is_ok(), "gap at {}", influence);
        }
        let tiers: Vec<u8> = registry.ranks.iter().map(|r| r.tier).collect();
        assert_eq!(tiers, (0..=6).collect::<Vec<u8>>());
    }

    #[test]
    fn test_profession_parsing() {
        let json = r#"{
            "medic": {"alignment": "liberal", "attrs_mod": {"empathy": [1, 2]},
                      "juice": [10, 20], "short_desc": "medic"},
            "boss": {"alignment": "arch_conservative", "juice": 900, "short_desc": "boss"},
            "nobody": {"alignment": "any", "short_desc": "nobody"}
        }"#;
        let professions: BTreeMap<String, Profession> = serde_json::from_str(json).unwrap();
        assert_eq!(professions["medic"].attrs_mod.get(Stat::Empathy), (1, 2));
        assert_eq!(professions["medic"].juice, Some(Influence::Range(10, 20)));
        assert_eq!(professions["boss"].juice, Some(Influence::Fixed(900)));
        assert_eq!(professions["boss"].alignment, Alignment::ArchConservative);
        assert!(professions["nobody"].attrs_mod.is_empty());
        assert_eq!(professions["nobody"].juice, None);
    }

    #[test]
    fn test_influence_roll() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Influence::Fixed(42).roll(&mut rng), 42);
        assert_eq!(Influence::Range(5, 5).roll(&mut rng), 5);
        for _ in 0..100 {
            let v = Influence::Range(10, 20).roll(&mut rng);
            assert!((10..20).contains(&v));
        }
    }

    #[test]
    fn test_dangling_reference_is_rejected() {
        let builtin = TableSources::builtin();
        let areas = r#"{"lobby": {"encounter": {"astronaut": 3},
                         "short_desc": "lobby", "long_desc": "A lobby."}}"#;
        let locations = r#"{"tower": {"areas": {"lobby": 1},
                             "short_desc": "tower", "long_desc": "A tower."}}"#;
        let result = Registry::from_json(TableSources {
            areas,
            locations,
            ..builtin
        });
        assert!(matches!(result, Err(CoreError::UnknownProfession(k)) if k == "astronaut"));
    }

    #[test]
    fn test_overflowing_weights_are_rejected() {
        let builtin = TableSources::builtin();
        let areas = r#"{"lobby": {"encounter": {"police": 4000000000, "lawyer": 4000000000},
                         "short_desc": "lobby", "long_desc": "A lobby."},
                        "hall": {"short_desc": "hall", "long_desc": "A hall."}}"#;
        let locations = r#"{"tower": {"areas": {"hall": 1},
                             "short_desc": "tower", "long_desc": "A tower."}}"#;
        let result = Registry::from_json(TableSources {
            areas,
            locations,
            ..builtin
        });
        assert!(matches!(result, Err(CoreError::DegenerateWeights(k)) if k == "lobby"));

        let areas = r#"{"hall": {"short_desc": "hall", "long_desc": "A hall."}}"#;
        let locations = r#"{"tower": {"areas": {"hall": 4294967295, "hall_b": 1},
                             "short_desc": "tower", "long_desc": "A tower."}}"#;
        let result = Registry::from_json(TableSources {
            areas,
            locations,
            ..builtin
        });
        assert!(matches!(result, Err(CoreError::DegenerateWeights(k)) if k == "tower"));
    }

    #[test]
    fn test_empty_influence_range_is_rejected() {
        let professions = r#"{
            "medic": {"alignment": "liberal", "juice": [20, 10], "short_desc": "medic"},
            "civilian": {"alignment": "any", "short_desc": "civilian"}
        }"#;
        let result = Registry::from_json(TableSources {
            professions,
            ..TableSources::builtin()
        });
        assert!(matches!(result, Err(CoreError::InvalidData(m)) if m.contains("'medic'")));

        let professions = r#"{"clerk": {"alignment": "any", "juice": [5, 5], "short_desc": "clerk"}}"#;
        let result = Registry::from_json(TableSources {
            professions,
            ..TableSources::builtin()
        });
        assert!(matches!(result, Err(CoreError::InvalidData(_))));
    }

    #[test]
    fn test_malformed_table_is_a_data_error() {
        let result = Registry::from_json(TableSources {
            ranks: "{ not json",
            ..TableSources::builtin()
        });
        assert!(matches!(result, Err(CoreError::Data(_))));
    }
}
