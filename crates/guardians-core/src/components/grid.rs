//! Grid primitives: coordinates, compass directions, per-cell flag sets and
//! the dense 2D container both location grids are stored in.

use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

/// Cell coordinate, `x` grows east and `y` grows south.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring coordinate one step in `dir`, if it stays inside a
    /// `width` x `height` grid.
    pub fn step(self, dir: Direction, width: usize, height: usize) -> Option<Coord> {
        let (dx, dy) = dir.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < width && y < height).then_some(Coord { x, y })
    }

    pub fn manhattan(self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Direction leading from `self` to an orthogonally adjacent `other`.
    pub fn direction_to(self, other: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.step(*dir, usize::MAX, usize::MAX) == Some(other))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction. Declaration order is the door bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// East, South, West, North: bit 0 through bit 3.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::North => "North",
        }
    }
}

/// Bitwise operators for the `u8`-backed flag sets below. `!` is masked to
/// the flags the type defines.
macro_rules! flag_ops {
    ($name:ident, $mask:expr) => {
        impl $name {
            pub const fn empty() -> Self {
                Self(0)
            }

            pub const fn all() -> Self {
                Self($mask)
            }

            pub const fn bits(self) -> u8 {
                self.0
            }

            pub const fn from_bits_truncate(bits: u8) -> Self {
                Self(bits & $mask)
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// True when every flag of `other` is set.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, other: Self) {
                self.0 |= other.0;
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, other: Self) -> Self {
                Self(self.0 & other.0)
            }
        }

        impl std::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, other: Self) {
                self.0 &= other.0;
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;
            fn not(self) -> Self {
                Self(!self.0 & $mask)
            }
        }
    };
}

/// Open passages out of a cell. An empty set means the cell was never carved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Doors(u8);

flag_ops!(Doors, 0b1111);

impl Doors {
    pub const EAST: Self = Self(1 << 0);
    pub const SOUTH: Self = Self(1 << 1);
    pub const WEST: Self = Self(1 << 2);
    pub const NORTH: Self = Self(1 << 3);

    pub fn has(self, dir: Direction) -> bool {
        self.contains(dir.into())
    }

    /// Open directions in East, South, West, North order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |dir| self.has(*dir))
    }

    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Every non-empty subset of this set, smallest bit pattern first.
    pub fn subsets(self) -> Vec<Doors> {
        let mut subsets = Vec::with_capacity((1 << self.count()) - 1);
        let mut sub = self.0;
        while sub != 0 {
            subsets.push(Doors(sub));
            sub = (sub - 1) & self.0;
        }
        subsets.reverse();
        subsets
    }
}

impl From<Direction> for Doors {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::East => Doors::EAST,
            Direction::South => Doors::SOUTH,
            Direction::West => Doors::WEST,
            Direction::North => Doors::NORTH,
        }
    }
}

/// Fog-of-war and role flags for one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaMask(u8);

flag_ops!(AreaMask, 0b111_1111);

impl AreaMask {
    pub const FOG: Self = Self(1 << 0);
    pub const VISIBLE: Self = Self(1 << 1);
    pub const VISITED: Self = Self(1 << 2);
    /// Raised by game logic through `Location::mark_hostile`.
    pub const HOSTILE: Self = Self(1 << 3);
    pub const ENTRANCE: Self = Self(1 << 4);
    pub const EXIT: Self = Self(1 << 5);
    pub const FORBIDDEN: Self = Self(1 << 6);
}

/// Dense row-major grid, one `T` per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Coord) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[pos.y * self.width + pos.x])
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut T> {
        if self.contains(pos) {
            Some(&mut self.cells[pos.y * self.width + pos.x])
        } else {
            None
        }
    }

    /// All cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i % width, i / width), cell))
    }

    pub fn step(&self, pos: Coord, dir: Direction) -> Option<Coord> {
        pos.step(dir, self.width, self.height)
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;
    fn index(&self, pos: Coord) -> &T {
        assert!(self.contains(pos), "{} outside {}x{} grid", pos, self.width, self.height);
        &self.cells[pos.y * self.width + pos.x]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, pos: Coord) -> &mut T {
        assert!(self.contains(pos), "{} outside {}x{} grid", pos, self.width, self.height);
        &mut self.cells[pos.y * self.width + pos.x]
    }
}

impl Grid<Doors> {
    /// Cells reachable through the open doors of `pos`, East, South, West,
    /// North order.
    pub fn neighbours(&self, pos: Coord) -> impl Iterator<Item = Coord> + '_ {
        let doors = self.get(pos).copied().unwrap_or_default();
        doors.directions().filter_map(move |dir| self.step(pos, dir))
    }

    /// Number of carved (non-empty) cells.
    pub fn room_count(&self) -> usize {
        self.cells.iter().filter(|doors| !doors.is_empty()).count()
    }

    /// Every cell a breadth-first walk through open doors reaches from
    /// `start`, `start` included.
    pub fn reachable(&self, start: Coord) -> BTreeSet<Coord> {
        let mut seen = BTreeSet::new();
        if !self.contains(start) {
            return seen;
        }
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.neighbours(current) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }
}
