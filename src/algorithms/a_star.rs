use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithms::common::{reconstruct_path, SearchMetrics, SearchResult};
use crate::grid::{Grid, Position};

/// A* with the Manhattan heuristic (admissible and consistent on a
/// unit-cost 4-neighbor grid, so the first pop of `goal` is optimal).
///
/// Duplicate-suppression policy: a relaxed neighbor is re-inserted into
/// the heap only if it is not already pending; `pending` gives that
/// membership test in O(1). An entry left in the heap after its node was
/// relaxed keeps its old priority, which can delay the node's pop, but
/// expansion always reads the live `g_score` map so the returned path is
/// unaffected. Expansion counts are therefore sensitive to this policy;
/// swapping in a true decrease-key would re-baseline every benchmark.
pub(crate) fn search(grid: &Grid, start: Position, goal: Position) -> SearchResult {
    let started = Instant::now();
    let mut expanded_nodes = 0;

    // Min-heap on (f, position); the Position tie-break keeps pop order,
    // and with it expansion counts, deterministic.
    let mut open: BinaryHeap<Reverse<(usize, Position)>> = BinaryHeap::new();
    let mut pending = FxHashSet::default();
    let mut g_score: FxHashMap<Position, usize> = FxHashMap::default();
    let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();

    g_score.insert(start, 0);
    open.push(Reverse((start.manhattan(&goal), start)));
    pending.insert(start);

    while let Some(Reverse((_, current))) = open.pop() {
        pending.remove(&current);
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

        let current_g = g_score[&current];

        for neighbor in grid.neighbors(current) {
            if !grid.is_free(neighbor) {
                continue;
            }

            let tentative_g = current_g + 1;
            let improved = match g_score.get(&neighbor) {
                Some(&g) => tentative_g < g,
                None => true,
            };
            if improved {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                if pending.insert(neighbor) {
                    open.push(Reverse((tentative_g + neighbor.manhattan(&goal), neighbor)));
                }
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
