pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;

pub use common::{Algorithm, SearchMetrics, SearchResult};

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::Algorithm;
    use crate::grid::{Grid, Position};
    use crate::maze::{GeneratorParams, Maze};

    const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    /// Checks the path contract: consecutive 4-neighbor steps, no walls,
    /// first step adjacent to `start`, last step equal to `goal`.
    fn assert_valid_path(grid: &Grid, start: Position, goal: Position, path: &[Position]) {
        assert!(!path.is_empty(), "expected a path from {start:?} to {goal:?}");
        assert_eq!(*path.last().unwrap(), goal);
        assert_eq!(path[0].manhattan(&start), 1);

        let mut prev = start;
        for &step in path {
            assert_eq!(step.manhattan(&prev), 1, "non-adjacent step {prev:?} -> {step:?}");
            assert!(grid.is_free(step), "path crosses a wall at {step:?}");
            prev = step;
        }
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let grid = Grid::open(5, 5);
        let start = Position::new(0, 0);
        let goal = Position::new(4, 4);

        let bfs = Algorithm::Bfs.search(&grid, start, goal);
        assert_valid_path(&grid, start, goal, &bfs.path);
        assert_eq!(bfs.path.len(), 8);

        let a_star = Algorithm::AStar.search(&grid, start, goal);
        assert_valid_path(&grid, start, goal, &a_star.path);
        assert_eq!(a_star.path.len(), 8);

        let dfs = Algorithm::Dfs.search(&grid, start, goal);
        assert_valid_path(&grid, start, goal, &dfs.path);
        assert!(dfs.path.len() >= 8);
    }

    #[test]
    fn walls_are_routed_around() {
        // Wall across row 2 with a single gap at column 4.
        let mut grid = Grid::open(5, 5);
        for col in 0..4 {
            grid.set_wall(Position::new(2, col));
        }
        let start = Position::new(0, 0);
        let goal = Position::new(4, 0);

        for algorithm in ALL {
            let result = algorithm.search(&grid, start, goal);
            assert_valid_path(&grid, start, goal, &result.path);
        }
        // Forced detour: down to the gap and back.
        let bfs = Algorithm::Bfs.search(&grid, start, goal);
        assert_eq!(bfs.path.len(), 12);
    }

    #[test]
    fn exhausted_frontier_expands_the_whole_component() {
        // Full-height wall down column 2 separates start from goal.
        let mut grid = Grid::open(5, 5);
        for row in 0..5 {
            grid.set_wall(Position::new(row, 2));
        }
        let start = Position::new(0, 0);
        let goal = Position::new(0, 4);

        for algorithm in ALL {
            let result = algorithm.search(&grid, start, goal);
            assert!(!result.found(), "{algorithm} found a path through a wall");
            // The left component is 2 columns x 5 rows.
            assert_eq!(result.metrics.expanded_nodes, 10, "{algorithm}");
        }
    }

    #[test]
    fn a_star_matches_bfs_path_length_on_generated_mazes() {
        let params = GeneratorParams::new(20, 20, 0.15, 5).unwrap();
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::generate(&params, &mut rng).unwrap();
            let start = maze.grid.first_free_cell().unwrap();

            for &goal in &maze.goals {
                if goal == start {
                    continue;
                }
                let bfs = Algorithm::Bfs.search(&maze.grid, start, goal);
                let a_star = Algorithm::AStar.search(&maze.grid, start, goal);
                // Generation guarantees reachability from any free cell.
                assert!(bfs.found());
                assert!(a_star.found());
                assert_eq!(
                    bfs.path.len(),
                    a_star.path.len(),
                    "seed {seed}: A* path is not shortest"
                );
                assert_valid_path(&maze.grid, start, goal, &a_star.path);
                assert_valid_path(&maze.grid, start, goal, &bfs.path);

                let dfs = Algorithm::Dfs.search(&maze.grid, start, goal);
                assert_valid_path(&maze.grid, start, goal, &dfs.path);
                assert!(dfs.path.len() >= bfs.path.len());
            }
        }
    }

    #[test]
    fn bfs_expands_no_more_than_the_component() {
        let grid = Grid::open(5, 5);
        let result = Algorithm::Bfs.search(&grid, Position::new(2, 2), Position::new(2, 3));
        // Each cell is enqueued at most once, so expansions are bounded by
        // the component size even on a hit.
        assert!(result.metrics.expanded_nodes <= 25);
        assert!(result.metrics.expanded_nodes >= 1);
    }

    #[test]
    fn expansion_counts_are_deterministic() {
        let mut grid = Grid::open(8, 8);
        grid.set_wall(Position::new(3, 3));
        grid.set_wall(Position::new(3, 4));
        grid.set_wall(Position::new(4, 3));
        let start = Position::new(0, 0);
        let goal = Position::new(7, 7);

        for algorithm in ALL {
            let a = algorithm.search(&grid, start, goal);
            let b = algorithm.search(&grid, start, goal);
            assert_eq!(a.metrics.expanded_nodes, b.metrics.expanded_nodes);
            assert_eq!(a.path, b.path);
        }
    }
}
