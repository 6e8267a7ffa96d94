//! Visibility system - fog of war over the connectivity grid
//!
//! The player sees the cell they stand in and every cell one open door away.
//! Everything else they have seen fades back into fog when they move on,
//! but keeps its `VISITED` mark for good.

use crate::components::{AreaMask, Coord, Doors, Grid};

/// Initial visibility for a freshly carved grid.
///
/// Carved cells start fogged, the two role cells get their flags and the
/// player starts in the entrance with its neighbourhood in view.
pub fn seed_visibility(connections: &Grid<Doors>, entrance: Coord, exit: Coord) -> Grid<AreaMask> {
    let mut visibility: Grid<AreaMask> = Grid::new(connections.width(), connections.height());
    for (pos, doors) in connections.iter() {
        if !doors.is_empty() {
            visibility[pos] = AreaMask::FOG;
        }
    }
    if let Some(mask) = visibility.get_mut(entrance) {
        mask.insert(AreaMask::ENTRANCE);
    }
    if let Some(mask) = visibility.get_mut(exit) {
        mask.insert(AreaMask::EXIT);
    }
    reveal(&mut visibility, connections, entrance);
    visibility
}

/// Apply the player's step from `start` to the adjacent `dest`.
///
/// The caller has already checked the door between them is open.
pub fn apply_move(
    visibility: &mut Grid<AreaMask>,
    connections: &Grid<Doors>,
    start: Coord,
    dest: Coord,
) {
    fog(visibility, start);
    for next in connections.neighbours(start) {
        fog(visibility, next);
    }
    reveal(visibility, connections, dest);
}

/// Mark `pos` visited and in view along with its door neighbours.
fn reveal(visibility: &mut Grid<AreaMask>, connections: &Grid<Doors>, pos: Coord) {
    if let Some(mask) = visibility.get_mut(pos) {
        mask.insert(AreaMask::VISITED | AreaMask::VISIBLE);
        mask.remove(AreaMask::FOG);
    }
    for next in connections.neighbours(pos) {
        if let Some(mask) = visibility.get_mut(next) {
            mask.insert(AreaMask::VISIBLE);
            mask.remove(AreaMask::FOG);
        }
    }
}

/// FOG and VISIBLE never hold together.
fn fog(visibility: &mut Grid<AreaMask>, pos: Coord) {
    if let Some(mask) = visibility.get_mut(pos) {
        mask.insert(AreaMask::FOG);
        mask.remove(AreaMask::VISIBLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three rooms in a row plus a side room off the middle:
    ///
    /// ```text
    /// A - B - C
    ///     |
    ///     D
    /// ```
    fn corridor() -> (Grid<Doors>, [Coord; 4]) {
        let a = Coord::new(0, 0);
        let b = Coord::new(1, 0);
        let c = Coord::new(2, 0);
        let d = Coord::new(1, 1);
        let mut grid: Grid<Doors> = Grid::new(3, 2);
        grid[a] = Doors::EAST;
        grid[b] = Doors::WEST | Doors::EAST | Doors::SOUTH;
        grid[c] = Doors::WEST;
        grid[d] = Doors::NORTH;
        (grid, [a, b, c, d])
    }

    fn assert_exclusive(visibility: &Grid<AreaMask>) {
        for (pos, mask) in visibility.iter() {
            assert!(
                !mask.contains(AreaMask::FOG | AreaMask::VISIBLE),
                "{} is both fogged and visible",
                pos
            );
        }
    }

    #[test]
    fn test_seed_reveals_entrance_neighbourhood() {
        let (grid, [a, b, c, d]) = corridor();
        let vis = seed_visibility(&grid, a, c);

        assert!(vis[a].contains(AreaMask::VISITED | AreaMask::VISIBLE | AreaMask::ENTRANCE));
        assert!(vis[b].contains(AreaMask::VISIBLE));
        assert!(!vis[b].contains(AreaMask::VISITED));
        assert!(vis[c].contains(AreaMask::FOG | AreaMask::EXIT));
        assert_eq!(vis[d], AreaMask::FOG);
        assert_eq!(vis[Coord::new(0, 1)], AreaMask::empty());
        assert_exclusive(&vis);
    }

    #[test]
    fn test_move_refogs_what_was_left_behind() {
        let (grid, [a, b, c, d]) = corridor();
        let mut vis = seed_visibility(&grid, a, c);

        apply_move(&mut vis, &grid, a, b);
        apply_move(&mut vis, &grid, b, d);

        assert!(vis[d].contains(AreaMask::VISITED | AreaMask::VISIBLE));
        assert!(vis[b].contains(AreaMask::VISITED | AreaMask::VISIBLE));
        assert!(vis[a].contains(AreaMask::FOG | AreaMask::VISITED));
        assert!(vis[c].contains(AreaMask::FOG));
        assert!(!vis[c].contains(AreaMask::VISITED));
        assert_exclusive(&vis);
    }

    #[test]
    fn test_revisit_keeps_visited() {
        let (grid, [a, b, c, _]) = corridor();
        let mut vis = seed_visibility(&grid, a, c);

        apply_move(&mut vis, &grid, a, b);
        apply_move(&mut vis, &grid, b, c);
        apply_move(&mut vis, &grid, c, b);
        let once = vis.clone();
        apply_move(&mut vis, &grid, b, c);
        apply_move(&mut vis, &grid, c, b);

        assert_eq!(vis, once);
        for pos in [a, b, c] {
            assert!(vis[pos].contains(AreaMask::VISITED));
        }
        assert!(vis[a].contains(AreaMask::ENTRANCE));
        assert!(vis[c].contains(AreaMask::EXIT | AreaMask::VISIBLE));
    }
}
