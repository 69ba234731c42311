use std::path::PathBuf;

use thiserror::Error;

use crate::grid::{MAX_DIMENSION, MIN_DIMENSION};

/// Fatal configuration problems. These are rejected before any maze is
/// constructed; nothing in the engine retries them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error(
        "grid dimensions must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {width}x{height}"
    )]
    DimensionsTooSmall { width: usize, height: usize },

    #[error("grid dimensions must be at most {MAX_DIMENSION}x{MAX_DIMENSION}, got {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    #[error("wall density must be in [0.0, 1.0), got {0}")]
    InvalidWallDensity(f64),

    #[error("goal count must be at least 1")]
    NoGoals,

    #[error("goal count {goal_count} does not fit a {width}x{height} grid")]
    TooManyGoals {
        goal_count: usize,
        width: usize,
        height: usize,
    },

    #[error("unknown algorithm {0:?}, expected \"bfs\", \"dfs\" or \"a_star\"")]
    UnknownAlgorithm(String),
}

/// Top-level error type for the binary and the benchmark runner.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file {path}: {source}")]
    SeedFile {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
