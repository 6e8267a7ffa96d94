//! Maze carving - randomized depth-first walk that always links the entrance
//! to the exit and never carves more rooms than the budget allows.
//!
//! The walk runs off an explicit stack of frames. The first frames form the
//! "first pass": a corridor from the entrance that steps strictly closer to
//! the exit each room, so it reaches the exit in exactly
//! `manhattan(entrance, exit) + 1` rooms. Every door opened along the way
//! that is not part of the corridor becomes an ordinary branch, carved after
//! the corridor is complete.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{Coord, Direction, Doors, Grid};
use crate::error::{CoreError, Result};

/// A cell waiting to be carved, entered from `parent`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Coord,
    parent: Option<Coord>,
    first_pass: bool,
}

/// Traversal state for one carve
struct Carver<'r, R: Rng> {
    grid: Grid<Doors>,
    visited: Grid<bool>,
    rooms: usize,
    budget: usize,
    exit: Coord,
    stack: Vec<Frame>,
    rng: &'r mut R,
}

/// Carve a `width` x `height` connectivity grid.
///
/// The result has a door path from `entrance` to `exit`, reciprocal doors
/// everywhere, at most `room_budget` carved cells and an empty door set on
/// every cell that was never reached.
pub fn carve(
    width: usize,
    height: usize,
    entrance: Coord,
    exit: Coord,
    room_budget: usize,
    rng: &mut impl Rng,
) -> Result<Grid<Doors>> {
    validate(width, height, entrance, exit, room_budget)?;

    let mut carver = Carver {
        grid: Grid::new(width, height),
        visited: Grid::new(width, height),
        rooms: 0,
        budget: room_budget,
        exit,
        stack: vec![Frame {
            pos: entrance,
            parent: None,
            first_pass: true,
        }],
        rng,
    };
    while let Some(frame) = carver.stack.pop() {
        carver.visit(frame);
    }

    log::debug!(
        "Carved {} of {} rooms on a {}x{} grid, {} -> {}",
        carver.rooms,
        room_budget,
        width,
        height,
        entrance,
        exit
    );
    Ok(carver.grid)
}

fn validate(width: usize, height: usize, entrance: Coord, exit: Coord, budget: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidConfig(format!(
            "grid must not be empty, got {}x{}",
            width, height
        )));
    }
    for (what, pos) in [("entrance", entrance), ("exit", exit)] {
        if pos.x >= width || pos.y >= height {
            return Err(CoreError::InvalidConfig(format!(
                "{} {} lies outside the {}x{} grid",
                what, pos, width, height
            )));
        }
    }
    if entrance == exit {
        return Err(CoreError::InvalidConfig(format!(
            "entrance and exit share cell {}",
            entrance
        )));
    }
    if budget == 0 {
        return Err(CoreError::InvalidConfig("room budget must be positive".into()));
    }
    let corridor = entrance.manhattan(exit) + 1;
    if budget < corridor {
        return Err(CoreError::InvalidConfig(format!(
            "room budget {} cannot hold the {}-room corridor from {} to {}",
            budget, corridor, entrance, exit
        )));
    }
    Ok(())
}

impl<R: Rng> Carver<'_, R> {
    fn visit(&mut self, frame: Frame) {
        let Frame {
            pos,
            parent,
            first_pass,
        } = frame;
        let parent_door = parent
            .and_then(|p| pos.direction_to(p))
            .map(Doors::from)
            .unwrap_or_default();

        // Reached again by another branch: open the way back and stop.
        if self.visited[pos] {
            self.grid[pos] |= parent_door;
            return;
        }

        if self.rooms >= self.budget {
            // No room left for this cell; close the door that led here.
            if let Some(p) = parent {
                if let Some(dir) = p.direction_to(pos) {
                    self.grid[p].remove(dir.into());
                }
            }
            return;
        }

        self.visited[pos] = true;
        self.rooms += 1;

        if (first_pass && pos == self.exit) || self.rooms >= self.budget {
            self.grid[pos] = parent_door;
            return;
        }

        let available = self.available(pos);
        if available.is_empty() {
            self.grid[pos] = parent_door;
            return;
        }

        let mut new_doors = available
            .subsets()
            .choose(&mut *self.rng)
            .copied()
            .unwrap_or(available);

        let mut forced = None;
        if first_pass {
            let mandatory = self.toward_exit(pos) & available;
            if !new_doors.intersects(mandatory) {
                let extra: Vec<Direction> = mandatory.directions().collect();
                if let Some(dir) = extra.choose(&mut *self.rng) {
                    new_doors.insert((*dir).into());
                }
            }
            let progress: Vec<Direction> = (new_doors & mandatory).directions().collect();
            forced = progress.choose(&mut *self.rng).copied();
        }

        self.grid[pos] = new_doors | parent_door;

        let mut branches: Vec<Direction> = new_doors
            .directions()
            .filter(|dir| Some(*dir) != forced)
            .collect();
        branches.shuffle(&mut *self.rng);
        for dir in branches {
            self.push(pos, dir, false);
        }
        // Pushed last so the corridor is finished before any branch.
        if let Some(dir) = forced {
            self.push(pos, dir, true);
        }
    }

    fn push(&mut self, from: Coord, dir: Direction, first_pass: bool) {
        if let Some(pos) = self.grid.step(from, dir) {
            self.stack.push(Frame {
                pos,
                parent: Some(from),
                first_pass,
            });
        }
    }

    /// In-bounds directions whose neighbour is still uncarved
    fn available(&self, pos: Coord) -> Doors {
        let mut doors = Doors::empty();
        for dir in Direction::ALL {
            if let Some(next) = self.grid.step(pos, dir) {
                if !self.visited[next] {
                    doors.insert(dir.into());
                }
            }
        }
        doors
    }

    /// Directions that bring `pos` closer to the exit
    fn toward_exit(&self, pos: Coord) -> Doors {
        let mut doors = Doors::empty();
        if self.exit.x > pos.x {
            doors.insert(Doors::EAST);
        } else if self.exit.x < pos.x {
            doors.insert(Doors::WEST);
        }
        if self.exit.y > pos.y {
            doors.insert(Doors::SOUTH);
        } else if self.exit.y < pos.y {
            doors.insert(Doors::NORTH);
        }
        doors
    }
}
