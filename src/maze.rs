//! Maze generation with a reachability guarantee.
//!
//! Walls are dropped independently per cell, goals placed uniformly on
//! distinct Free cells, and the layout is accepted only if every goal is
//! reachable from the validation origin. Attempts are bounded; exhausting
//! them falls back to a wall-free grid so generation always terminates
//! with a solvable layout.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::grid::{Grid, Position, MIN_DIMENSION};
use crate::reachability::all_reachable;

pub const DEFAULT_WALL_DENSITY: f64 = 0.15;
pub const DEFAULT_GOAL_COUNT: usize = 5;

/// Validated maze-generation parameters. Construction is the single
/// rejection point for degenerate configurations.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorParams {
    pub width: usize,
    pub height: usize,
    pub wall_density: f64,
    pub goal_count: usize,
}

impl GeneratorParams {
    pub fn new(
        width: usize,
        height: usize,
        wall_density: f64,
        goal_count: usize,
    ) -> Result<Self, ConfigError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(ConfigError::DimensionsTooSmall { width, height });
        }
        // Density 1.0 would leave zero Free cells: nothing to place goals on.
        if !(0.0..1.0).contains(&wall_density) {
            return Err(ConfigError::InvalidWallDensity(wall_density));
        }
        if goal_count == 0 {
            return Err(ConfigError::NoGoals);
        }
        // The agent needs a Free cell of its own even on the fallback grid.
        if goal_count >= width * height {
            return Err(ConfigError::TooManyGoals {
                goal_count,
                width,
                height,
            });
        }
        Ok(GeneratorParams {
            width,
            height,
            wall_density,
            goal_count,
        })
    }

    /// Validation passes get expensive on big grids; scale attempts down.
    fn max_attempts(&self) -> usize {
        let cells = self.width * self.height;
        if cells >= 1_000_000 {
            3
        } else if cells >= 100_000 {
            5
        } else {
            10
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    pub grid: Grid,
    pub goals: Vec<Position>,
}

impl Maze {
    /// Generates a maze whose goals are all reachable from the validation
    /// origin (the first Free cell in row-major order). Draws every random
    /// decision from `rng`, so a seeded rng reproduces the maze bit for bit.
    pub fn generate(params: &GeneratorParams, rng: &mut StdRng) -> Result<Maze, ConfigError> {
        // Re-check in case the params were built by hand rather than `new`.
        let params = GeneratorParams::new(
            params.width,
            params.height,
            params.wall_density,
            params.goal_count,
        )?;

        let max_attempts = params.max_attempts();
        for attempt in 1..=max_attempts {
            let grid = random_walls(&params, rng);

            // Strictly greater: the agent will need a Free non-goal cell.
            if grid.free_cell_count() <= params.goal_count {
                debug!(attempt, "too few free cells for goals, regenerating");
                continue;
            }

            let goals = place_goals(&grid, params.goal_count, rng);
            let origin = match grid.first_free_cell() {
                Some(origin) => origin,
                None => continue,
            };

            if all_reachable(&grid, origin, &goals) {
                debug!(attempt, "valid maze generated");
                return Ok(Maze { grid, goals });
            }
            debug!(attempt, "maze failed reachability check, regenerating");
        }

        warn!(
            max_attempts,
            "maze generation exhausted all attempts, falling back to a wall-free grid"
        );
        let grid = Grid::open(params.width, params.height);
        let goals = place_goals(&grid, params.goal_count, rng);
        Ok(Maze { grid, goals })
    }
}

fn random_walls(params: &GeneratorParams, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::open(params.width, params.height);
    for row in 0..params.height {
        for col in 0..params.width {
            if rng.gen_bool(params.wall_density) {
                grid.set_wall(Position::new(row, col));
            }
        }
    }
    grid
}

/// Uniform rejection sampling of distinct Free cells. Callers guarantee
/// the grid has at least `goal_count` Free cells.
fn place_goals(grid: &Grid, goal_count: usize, rng: &mut StdRng) -> Vec<Position> {
    let mut goals: Vec<Position> = Vec::with_capacity(goal_count);
    while goals.len() < goal_count {
        let pos = Position::new(rng.gen_range(0..grid.height), rng.gen_range(0..grid.width));
        if grid.is_free(pos) && !goals.contains(&pos) {
            goals.push(pos);
        }
    }
    goals
}
