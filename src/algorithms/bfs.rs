use std::collections::VecDeque;
use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithms::common::{reconstruct_path, SearchMetrics, SearchResult};
use crate::grid::{Grid, Position};

/// Breadth-first search over the 4-neighbor graph. Nodes are marked
/// visited at enqueue time, so each cell enters the frontier at most once;
/// on an unweighted grid the first pop of `goal` is a shortest path.
pub(crate) fn search(grid: &Grid, start: Position, goal: Position) -> SearchResult {
    let started = Instant::now();
    let mut expanded_nodes = 0;

    let mut queue = VecDeque::new();
    let mut visited = FxHashSet::default();
    let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        expanded_nodes += 1;

        if current == goal {
            return SearchResult {
                path: reconstruct_path(&came_from, current),
                metrics: SearchMetrics {
                    expanded_nodes,
                    elapsed: started.elapsed(),
                },
            };
        }

        for neighbor in grid.neighbors(current) {
            if !grid.is_free(neighbor) {
                continue;
            }
            if visited.insert(neighbor) {
                came_from.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    SearchResult {
        path: Vec::new(),
        metrics: SearchMetrics {
            expanded_nodes,
            elapsed: started.elapsed(),
        },
    }
}
