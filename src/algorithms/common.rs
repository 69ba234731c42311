use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::error::ConfigError;
use crate::grid::{Grid, Position};

/// Observational counters for one search invocation. `expanded_nodes`
/// increments exactly once per node popped from the frontier, never per
/// node merely discovered; it is the cross-algorithm comparison metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetrics {
    pub expanded_nodes: usize,
    pub elapsed: Duration,
}

/// Path plus metrics from one search invocation. The path runs from the
/// step after `start` up to and including `goal`; an empty path means no
/// path was found.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub path: Vec<Position>,
    pub metrics: SearchMetrics,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// The closed set of search strategies. The set is fixed, so a tagged
/// variant dispatched through one `search` call replaces the open trait
/// object a plugin system would want.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    pub fn search(&self, grid: &Grid, start: Position, goal: Position) -> SearchResult {
        match self {
            Algorithm::Bfs => super::bfs::search(grid, start, goal),
            Algorithm::Dfs => super::dfs::search(grid, start, goal),
            Algorithm::AStar => super::a_star::search(grid, start, goal),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::AStar => "a_star",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "a_star" => Ok(Algorithm::AStar),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Walks the came-from map back from `goal` and reverses. The start cell
/// carries no back-pointer, so the result excludes it and ends at `goal`.
pub(crate) fn reconstruct_path(
    came_from: &FxHashMap<Position, Position>,
    goal: Position,
) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(current);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_round_trips_through_str() {
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar] {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!("dijkstra".parse::<Algorithm>().is_err());
    }

    #[test]
    fn reconstruct_path_excludes_start_includes_goal() {
        let mut came_from = FxHashMap::default();
        came_from.insert(Position::new(0, 1), Position::new(0, 0));
        came_from.insert(Position::new(0, 2), Position::new(0, 1));

        let path = reconstruct_path(&came_from, Position::new(0, 2));
        assert_eq!(path, vec![Position::new(0, 1), Position::new(0, 2)]);
    }

    #[test]
    fn reconstruct_path_of_start_itself_is_empty() {
        let came_from = FxHashMap::default();
        assert!(reconstruct_path(&came_from, Position::new(3, 3)).is_empty());
    }
}
