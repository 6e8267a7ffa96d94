//! Location - the live, explorable map.
//!
//! A location is built in one go: carve the connectivity grid, seed the fog,
//! pick an archetype for every carved cell and fill it with people. Any
//! failure along the way aborts the build, so a `Location` value is always
//! complete. Afterwards the only mutation is [`Location::attempt_move`]
//! (plus the suspicion meter and hostile marks, which game logic drives).

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Area, AreaMask, AreaView, Coord, Direction, Doors, Grid, Sight};
use crate::country::Country;
use crate::data::{Interaction, Registry};
use crate::error::{CoreError, Result};
use crate::generation::{carve, pick_weighted, populate, CharacterFactory, IdentitySource};
use crate::systems::{apply_move, seed_visibility};

/// Upper end of the suspicion meter
pub const SUSPICION_MAX: u32 = 100;

/// Shape and layout parameters for one location build.
///
/// `None` means "let the generator pick".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub width: usize,
    pub height: usize,
    /// Row of the entrance, which always sits in the first column
    pub entrance_row: Option<usize>,
    /// Row of the exit, which always sits in the last column
    pub exit_row: Option<usize>,
    /// Most rooms to carve; defaults to half the grid, and never less than
    /// the shortest entrance to exit corridor.
    pub room_budget: Option<usize>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            width: 7,
            height: 5,
            entrance_row: None,
            exit_row: None,
            room_budget: None,
        }
    }
}

impl LocationConfig {
    /// Entrance and exit rows, fixed or drawn. In a single column both doors
    /// share the column, so a drawn row skips the other door's row.
    fn rows(&self, rng: &mut impl Rng) -> Result<(usize, usize)> {
        let single_column = self.width == 1;
        if single_column && self.height < 2 {
            return Err(CoreError::InvalidConfig(format!(
                "a {}x{} grid has no room for both entrance and exit",
                self.width, self.height
            )));
        }

        if let Some(exit) = self.exit_row {
            let exit = self.check_row(exit, "exit")?;
            let entrance = match self.entrance_row {
                Some(row) => self.check_row(row, "entrance")?,
                None => self.draw_row(single_column.then_some(exit), rng),
            };
            return Ok((entrance, exit));
        }
        let entrance = match self.entrance_row {
            Some(row) => self.check_row(row, "entrance")?,
            None => self.draw_row(None, rng),
        };
        let exit = self.draw_row(single_column.then_some(entrance), rng);
        Ok((entrance, exit))
    }

    fn check_row(&self, row: usize, what: &str) -> Result<usize> {
        if row < self.height {
            Ok(row)
        } else {
            Err(CoreError::InvalidConfig(format!(
                "{} row {} outside a grid {} high",
                what, row, self.height
            )))
        }
    }

    /// Uniform row, never `taken`. Needs two rows when `taken` is set.
    fn draw_row(&self, taken: Option<usize>, rng: &mut impl Rng) -> usize {
        match taken {
            Some(taken) => {
                let row = rng.gen_range(0..self.height - 1);
                if row >= taken {
                    row + 1
                } else {
                    row
                }
            }
            None => rng.gen_range(0..self.height),
        }
    }
}

/// Why a move did not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveBlocked {
    NoPassage,
}

impl std::fmt::Display for MoveBlocked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveBlocked::NoPassage => write!(f, "You can't go there"),
        }
    }
}

/// Outcome of [`Location::attempt_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub moved: bool,
    /// Where the player stands after the attempt
    pub new_position: Coord,
    /// Archetype key of the area just entered
    pub area_entered: Option<String>,
    pub direction: Direction,
    pub blocked: Option<MoveBlocked>,
}

impl MoveResult {
    /// One log line for the player, e.g. `"East  : Lobby"`.
    pub fn message(&self, registry: &Registry) -> Result<String> {
        match (&self.area_entered, self.blocked) {
            (_, Some(reason)) => Ok(reason.to_string()),
            (Some(archetype), None) => {
                let area = registry.area(archetype)?;
                Ok(format!("{:<6}: {}", self.direction.label(), area.short_desc))
            }
            (None, None) => Ok(String::new()),
        }
    }
}

/// How alarmed the conservatives are
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SuspicionLevel {
    Calm,
    Noisy,
    Noticed,
    High,
    VeryHigh,
}

impl SuspicionLevel {
    pub fn from_suspicion(suspicion: u32) -> SuspicionLevel {
        match suspicion {
            0..=20 => SuspicionLevel::Calm,
            21..=40 => SuspicionLevel::Noisy,
            41..=60 => SuspicionLevel::Noticed,
            61..=80 => SuspicionLevel::High,
            _ => SuspicionLevel::VeryHigh,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SuspicionLevel::Calm => "no alarm",
            SuspicionLevel::Noisy => "conservatives suspicious",
            SuspicionLevel::Noticed => "conservatives incoming",
            SuspicionLevel::High => "conservatives in pursuit",
            SuspicionLevel::VeryHigh => "conservatives on your tail",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Key into the locations table
    pub template: String,
    connections: Grid<Doors>,
    visibility: Grid<AreaMask>,
    areas: BTreeMap<Coord, Area>,
    player_position: Coord,
    entrance: Coord,
    exit: Coord,
    suspicion: u32,
}

impl Location {
    /// Build a complete location from `template`.
    pub fn generate<I: IdentitySource>(
        factory: &CharacterFactory<'_, I>,
        country: &Country,
        template: &str,
        config: &LocationConfig,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let registry = factory.registry();
        let layout = registry.location(template)?;
        if config.width == 0 || config.height == 0 {
            return Err(CoreError::InvalidConfig(format!(
                "grid must not be empty, got {}x{}",
                config.width, config.height
            )));
        }

        let (entrance_row, exit_row) = config.rows(rng)?;
        let entrance = Coord::new(0, entrance_row);
        let exit = Coord::new(config.width - 1, exit_row);
        let budget = config
            .room_budget
            .unwrap_or_else(|| (config.width * config.height / 2).max(entrance.manhattan(exit) + 1));

        let connections = carve(config.width, config.height, entrance, exit, budget, rng)?;
        let mut visibility = seed_visibility(&connections, entrance, exit);

        let mut areas = BTreeMap::new();
        for (pos, doors) in connections.iter() {
            if doors.is_empty() {
                continue;
            }
            let archetype_key = pick_weighted(&layout.areas, template, rng)?;
            if registry.area(archetype_key)?.forbidden {
                visibility[pos].insert(AreaMask::FORBIDDEN);
            }
            let people = populate(factory, archetype_key, country, rng)?;
            areas.insert(pos, Area::new(archetype_key, pos, people));
        }

        log::info!(
            "Generated {} ({}x{}): {} areas, {} people, entrance {} exit {}",
            template,
            config.width,
            config.height,
            areas.len(),
            areas.values().map(Area::population).sum::<usize>(),
            entrance,
            exit
        );

        Ok(Self {
            template: template.to_string(),
            connections,
            visibility,
            areas,
            player_position: entrance,
            entrance,
            exit,
            suspicion: 0,
        })
    }

    /// Step through the door in `direction`, if there is one.
    ///
    /// A closed door changes nothing and reports [`MoveBlocked::NoPassage`].
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        let start = self.player_position;
        let open = self.connections.get(start).is_some_and(|d| d.has(direction));
        let dest = self.connections.step(start, direction).filter(|_| open);

        let Some(dest) = dest else {
            log::debug!("Blocked moving {} from {}", direction.label(), start);
            return MoveResult {
                moved: false,
                new_position: start,
                area_entered: None,
                direction,
                blocked: Some(MoveBlocked::NoPassage),
            };
        };

        apply_move(&mut self.visibility, &self.connections, start, dest);
        self.player_position = dest;
        MoveResult {
            moved: true,
            new_position: dest,
            area_entered: self.areas.get(&dest).map(|a| a.archetype.clone()),
            direction,
            blocked: None,
        }
    }

    pub fn connections(&self) -> &Grid<Doors> {
        &self.connections
    }

    pub fn visibility(&self) -> &Grid<AreaMask> {
        &self.visibility
    }

    pub fn areas(&self) -> &BTreeMap<Coord, Area> {
        &self.areas
    }

    pub fn area(&self, pos: Coord) -> Option<&Area> {
        self.areas.get(&pos)
    }

    pub fn current_area(&self) -> Option<&Area> {
        self.area(self.player_position)
    }

    pub fn player_position(&self) -> Coord {
        self.player_position
    }

    pub fn entrance(&self) -> Coord {
        self.entrance
    }

    pub fn exit(&self) -> Coord {
        self.exit
    }

    pub fn suspicion(&self) -> u32 {
        self.suspicion
    }

    pub fn raise_suspicion(&mut self, amount: u32) {
        self.suspicion = self.suspicion.saturating_add(amount).min(SUSPICION_MAX);
    }

    pub fn lower_suspicion(&mut self, amount: u32) {
        self.suspicion = self.suspicion.saturating_sub(amount);
    }

    /// Flag the carved room at `pos` as hostile. Returns `false` for cells
    /// outside the grid or with no room.
    pub fn mark_hostile(&mut self, pos: Coord) -> bool {
        if self.connections.get(pos).map_or(true, |d| d.is_empty()) {
            return false;
        }
        match self.visibility.get_mut(pos) {
            Some(mask) => {
                mask.insert(AreaMask::HOSTILE);
                log::debug!("Area {} turned hostile", pos);
                true
            }
            None => false,
        }
    }

    pub fn suspicion_level(&self) -> SuspicionLevel {
        SuspicionLevel::from_suspicion(self.suspicion)
    }

    /// Share of carved rooms the player has set foot in, 0 to 100.
    pub fn explored_percent(&self) -> usize {
        let rooms = self.connections.room_count();
        if rooms == 0 {
            return 0;
        }
        let visited = self
            .visibility
            .iter()
            .filter(|(_, mask)| mask.contains(AreaMask::VISITED))
            .count();
        visited * 100 / rooms
    }

    /// What the player may know about the area at `pos`.
    pub fn area_view(&self, pos: Coord) -> Option<AreaView<'_>> {
        let area = self.areas.get(&pos)?;
        let mask = self.visibility.get(pos).copied().unwrap_or_default();
        let sight = if !mask.contains(AreaMask::VISITED) {
            Sight::Unvisited
        } else if mask.contains(AreaMask::FOG) {
            Sight::OutOfSight
        } else {
            Sight::InSight {
                population: area.population(),
            }
        };
        Some(AreaView {
            area,
            restricted: mask.contains(AreaMask::FORBIDDEN) && pos != self.player_position,
            sight,
        })
    }

    /// Interactions offered where the player stands, in table order.
    pub fn interactions_here<'r>(
        &self,
        registry: &'r Registry,
    ) -> Result<Vec<(&'r str, &'r Interaction)>> {
        let Some(area) = self.current_area() else {
            return Ok(Vec::new());
        };
        let archetype = registry.area(&area.archetype)?;
        archetype
            .interactions
            .iter()
            .map(|key| Ok((key.as_str(), registry.interaction(key)?)))
            .collect()
    }
}
