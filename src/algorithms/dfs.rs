use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithms::common::{reconstruct_path, SearchMetrics, SearchResult};
use crate::grid::{Grid, Position};

/// Depth-first search with a LIFO frontier, visited at push time. Finds
/// *a* path, with no length guarantee; kept as the baseline the informed
/// searches are measured against.
pub(crate) fn search(grid: &Grid, start: Position, goal: Position) -> SearchResult {
    let started = Instant::now();
    let mut expanded_nodes = 0;

    let mut stack = vec![start];
    let mut visited = FxHashSet::default();
    let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();

    visited.insert(start);

    while let Some(current) = stack.pop() {
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
                stack.push(neighbor);
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
