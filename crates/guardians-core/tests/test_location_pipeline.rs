//! Integration tests for the full location pipeline.
//!
//! Exercises: Registry → CharacterFactory → Country → Location
//! → attempt_move / fog of war
//!
//! Everything runs against the built-in reference tables with seeded
//! generators.

use guardians_core::prelude::*;
use guardians_core::generation::{encounter_table, populate, ANY_PROFESSION};
use guardians_core::location::MoveBlocked;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ────────────────────────────────────────────────────────────

fn build(registry: &Registry, template: &str, seed: u64) -> (Country, Location) {
    let factory = CharacterFactory::new(registry);
    let mut rng = StdRng::seed_from_u64(seed);
    let country = Country::new("Testland", 0, &factory, &mut rng).unwrap();
    let location = Location::generate(
        &factory,
        &country,
        template,
        &LocationConfig::default(),
        &mut rng,
    )
    .unwrap();
    (country, location)
}

/// Walk every open door reachable from the current cell, depth first, and
/// come back, so every carved room gets visited once.
fn explore(location: &mut Location, from: Coord, seen: &mut Vec<Coord>) {
    seen.push(from);
    let doors = location.connections()[from];
    for dir in doors.directions() {
        let next = location.connections().step(from, dir).unwrap();
        if seen.contains(&next) {
            continue;
        }
        assert!(location.attempt_move(dir).moved);
        explore(location, next, seen);
        assert!(location.attempt_move(dir.opposite()).moved);
    }
}

// ── Pipeline tests ─────────────────────────────────────────────────────

#[test]
fn every_template_builds() {
    let registry = Registry::builtin().unwrap();
    for template in registry.locations.keys() {
        for seed in 0..5 {
            let (_, location) = build(&registry, template, seed);
            assert_eq!(location.template, *template);
            assert!(!location.areas().is_empty());
            for area in location.areas().values() {
                assert!(registry.locations[template].areas.contains_key(&area.archetype));
            }
        }
    }
}

#[test]
fn same_seed_same_location() {
    let registry = Registry::builtin().unwrap();
    let (_, a) = build(&registry, "university", 31);
    let (_, b) = build(&registry, "university", 31);
    assert_eq!(a.connections(), b.connections());
    assert_eq!(a.visibility(), b.visibility());
    let names = |l: &Location| -> Vec<String> {
        l.areas()
            .values()
            .flat_map(|area| area.characters.iter().map(Character::full_name))
            .collect()
    };
    assert_eq!(names(&a), names(&b));
}

#[test]
fn exit_reachable_and_budget_kept() {
    let registry = Registry::builtin().unwrap();
    for seed in 0..50 {
        let (_, location) = build(&registry, "corporate_hq", seed);
        let grid = location.connections();
        assert!(grid.reachable(location.entrance()).contains(&location.exit()));
        assert!(grid.room_count() <= 7 * 5 / 2);
        for (pos, doors) in grid.iter() {
            for dir in doors.directions() {
                let next = grid.step(pos, dir).unwrap();
                assert!(grid[next].has(dir.opposite()), "seed {} at {}", seed, pos);
            }
        }
    }
}

// ── Exploration tests ──────────────────────────────────────────────────

#[test]
fn full_exploration_visits_everything() {
    let registry = Registry::builtin().unwrap();
    let (_, mut location) = build(&registry, "courthouse", 12);
    let entrance = location.entrance();
    let mut seen = Vec::new();
    explore(&mut location, entrance, &mut seen);

    assert_eq!(location.player_position(), entrance);
    assert_eq!(seen.len(), location.connections().room_count());
    assert_eq!(location.explored_percent(), 100);
    for pos in seen {
        let mask = location.visibility()[pos];
        assert!(mask.contains(AreaMask::VISITED));
        assert!(!mask.contains(AreaMask::FOG | AreaMask::VISIBLE));
    }
}

#[test]
fn back_and_forth_keeps_visited() {
    let registry = Registry::builtin().unwrap();
    let (_, mut location) = build(&registry, "police_station", 3);
    let entrance = location.entrance();
    let dir = location.connections()[entrance].directions().next().unwrap();

    location.attempt_move(dir);
    location.attempt_move(dir.opposite());
    let settled = location.visibility().clone();
    location.attempt_move(dir);
    location.attempt_move(dir.opposite());

    assert_eq!(location.visibility(), &settled);
    assert!(location.visibility()[entrance].contains(AreaMask::VISITED | AreaMask::ENTRANCE));
}

#[test]
fn walls_block_without_side_effects() {
    let registry = Registry::builtin().unwrap();
    let (_, mut location) = build(&registry, "university", 8);
    let before = location.visibility().clone();
    let position = location.player_position();

    // The entrance sits in the first column, so west is always a wall.
    let result = location.attempt_move(Direction::West);
    assert!(!result.moved);
    assert_eq!(result.blocked, Some(MoveBlocked::NoPassage));
    assert_eq!(result.message(&registry).unwrap(), "You can't go there");
    assert_eq!(location.player_position(), position);
    assert_eq!(location.visibility(), &before);
}

// ── Population tests ───────────────────────────────────────────────────

#[test]
fn squad_room_gets_an_any_bucket() {
    let registry = Registry::builtin().unwrap();
    let table = encounter_table(registry.area("squad_room").unwrap()).unwrap();
    assert_eq!(table.values().sum::<u32>(), 10);
    assert!(table.contains_key(ANY_PROFESSION));
}

#[test]
fn rosters_stay_in_range() {
    let registry = Registry::builtin().unwrap();
    let factory = CharacterFactory::new(&registry);
    let mut rng = StdRng::seed_from_u64(77);
    let country = Country::new("Testland", 600, &factory, &mut rng).unwrap();
    for _ in 0..50 {
        let roster = populate(&factory, "cafeteria", &country, &mut rng).unwrap();
        assert!((10..20).contains(&roster.len()));
    }
}

#[test]
fn liberal_country_breeds_liberals() {
    let registry = Registry::builtin().unwrap();
    let factory = CharacterFactory::new(&registry);
    let mut rng = StdRng::seed_from_u64(5);
    let mut country = Country::new("Testland", 1000, &factory, &mut rng).unwrap();

    let count_liberals = |country: &Country, rng: &mut StdRng| {
        (0..300)
            .filter(|_| {
                factory
                    .create(
                        "civilian",
                        &country.mood_modifier(),
                        CharacterOverrides::default(),
                        rng,
                    )
                    .unwrap()
                    .alignment()
                    == Alignment::Liberal
            })
            .count()
    };
    let liberal = count_liberals(&country, &mut rng);
    country.set_mood(-1000);
    let conservative = count_liberals(&country, &mut rng);
    assert!(liberal > conservative);
}
