//! Flood-fill connectivity over Free cells.
//!
//! This is the same breadth-first traversal the BFS search runs (neighbors
//! in fixed order, nodes marked visited when enqueued), minus the early
//! exit and back-pointers: the oracle has to sweep the whole component.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::grid::{Grid, Position};

/// Every Free cell reachable from `start` by orthogonal moves, including
/// `start` itself. Returns an empty set if `start` is a Wall.
pub fn flood_fill(grid: &Grid, start: Position) -> FxHashSet<Position> {
    let mut visited = FxHashSet::default();
    if !grid.is_free(start) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in grid.neighbors(current) {
            if grid.is_free(neighbor) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    visited
}

/// True iff every target is reachable from `start`. This is the
/// maze-validity oracle: a generated maze is accepted only when all goals
/// lie in the start cell's connected component.
pub fn all_reachable(grid: &Grid, start: Position, targets: &[Position]) -> bool {
    if targets.is_empty() {
        return true;
    }
    let reachable = flood_fill(grid, start);
    targets.iter().all(|t| reachable.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 5x5 grid with a full-height wall down column 2.
    fn split_grid() -> Grid {
        let mut grid = Grid::open(5, 5);
        for row in 0..5 {
            grid.set_wall(Position::new(row, 2));
        }
        grid
    }

    #[test]
    fn flood_fill_covers_open_grid() {
        let grid = Grid::open(5, 5);
        let reached = flood_fill(&grid, Position::new(0, 0));
        assert_eq!(reached.len(), 25);
    }

    #[test]
    fn flood_fill_stops_at_walls() {
        let grid = split_grid();
        let reached = flood_fill(&grid, Position::new(0, 0));
        // Left component: two columns of five rows.
        assert_eq!(reached.len(), 10);
        assert!(!reached.contains(&Position::new(0, 3)));
    }

    #[test]
    fn flood_fill_from_wall_is_empty() {
        let grid = split_grid();
        assert!(flood_fill(&grid, Position::new(0, 2)).is_empty());
    }

    #[test]
    fn all_reachable_detects_cut_off_targets() {
        let grid = split_grid();
        let start = Position::new(0, 0);
        assert!(all_reachable(&grid, start, &[Position::new(4, 1)]));
        assert!(!all_reachable(
            &grid,
            start,
            &[Position::new(4, 1), Position::new(0, 4)]
        ));
    }

    #[test]
    fn all_reachable_with_no_targets_is_trivially_true() {
        let grid = split_grid();
        assert!(all_reachable(&grid, Position::new(0, 0), &[]));
    }
}
