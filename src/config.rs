use std::path::PathBuf;

use clap::Parser;

use crate::algorithms::Algorithm;
use crate::error::ConfigError;
use crate::grid::MAX_DIMENSION;
use crate::maze::{GeneratorParams, DEFAULT_GOAL_COUNT, DEFAULT_WALL_DENSITY};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Side length of the square grid.
    #[arg(long, default_value_t = 20)]
    pub grid_size: usize,

    /// Probability that any given cell is a wall.
    #[arg(long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub wall_density: f64,

    /// Number of goals placed on the grid.
    #[arg(long, default_value_t = DEFAULT_GOAL_COUNT)]
    pub goal_count: usize,

    /// Search strategy: "bfs", "dfs" or "a_star".
    #[arg(long, default_value = "a_star")]
    pub algorithm: Algorithm,

    /// Seed for reproducible maze generation; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run repeated seeded trials instead of a single simulation.
    #[arg(long, default_value_t = false)]
    pub benchmark: bool,

    /// Number of benchmark trials when no seed file is given.
    #[arg(long, default_value_t = 10)]
    pub runs: usize,

    /// JSON file holding an array of trial seeds.
    #[arg(long)]
    pub seed_file: Option<PathBuf>,

    #[arg(long, default_value = "benchmark_results.csv")]
    pub output_file: PathBuf,

    /// Delay between rendered simulation ticks.
    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    /// Validates the grid surface before any construction happens.
    pub fn generator_params(&self) -> Result<GeneratorParams, ConfigError> {
        if self.grid_size > MAX_DIMENSION {
            return Err(ConfigError::DimensionsTooLarge {
                width: self.grid_size,
                height: self.grid_size,
            });
        }
        GeneratorParams::new(
            self.grid_size,
            self.grid_size,
            self.wall_density,
            self.goal_count,
        )
    }
}
