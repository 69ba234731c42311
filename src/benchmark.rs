//! Seed-driven benchmark runs.
//!
//! Each seed builds one fully independent (grid, agent, goals) instance,
//! drives it to completion, and contributes one record per search
//! invocation. Unsolvable trials are kept and reported; only solved
//! trials feed the aggregate statistics.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::algorithms::Algorithm;
use crate::error::{Error, Result};
use crate::maze::GeneratorParams;
use crate::simulation::{RunState, Simulation};
use crate::statistics::AggregateStats;

/// One search invocation inside one benchmark trial.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRecord {
    pub run_number: usize,
    pub algorithm: String,
    pub grid_size: usize,
    pub seed: u64,
    pub solved: bool,
    pub expanded_nodes: usize,
    pub time_ms: f64,
}

/// A trial whose instance ended unsolvable.
#[derive(Debug, Clone)]
pub struct TrialFailure {
    pub run_number: usize,
    pub seed: u64,
    pub goals_collected: usize,
}

pub struct BenchmarkRunner {
    params: GeneratorParams,
    algorithm: Algorithm,
    seeds: Vec<u64>,
    records: Vec<BenchmarkRecord>,
    failures: Vec<TrialFailure>,
}

impl BenchmarkRunner {
    pub fn new(params: GeneratorParams, algorithm: Algorithm, seeds: Vec<u64>) -> Self {
        BenchmarkRunner {
            params,
            algorithm,
            seeds,
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Runs every seeded trial sequentially, so a fixed seed list always
    /// reproduces the same expansion counts.
    pub fn run(&mut self) -> Result<()> {
        let total = self.seeds.len();
        for (index, &seed) in self.seeds.iter().enumerate() {
            let run_number = index + 1;
            info!(run_number, total, seed, "running benchmark trial");

            let mut simulation = Simulation::from_seed(&self.params, self.algorithm, seed)?;
            let samples = simulation.run();
            let solved = simulation.state() == RunState::Complete;

            self.records
                .extend(samples.iter().map(|sample| BenchmarkRecord {
                    run_number,
                    algorithm: self.algorithm.name().to_string(),
                    grid_size: self.params.width,
                    seed,
                    solved,
                    expanded_nodes: sample.expanded_nodes,
                    time_ms: sample.elapsed.as_secs_f64() * 1000.0,
                }));

            if !solved {
                self.failures.push(TrialFailure {
                    run_number,
                    seed,
                    goals_collected: simulation.agent.collected,
                });
            }
        }
        Ok(())
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn failures(&self) -> &[TrialFailure] {
        &self.failures
    }

    /// Aggregate over solved trials only; failed trials are reported via
    /// `failures`, never folded into the averages.
    pub fn summary(&self) -> Option<AggregateStats> {
        let solved: Vec<BenchmarkRecord> =
            self.records.iter().filter(|r| r.solved).cloned().collect();
        AggregateStats::from_records(&solved)
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(Error::Io)?;
        writeln!(
            file,
            "run_number,algorithm,grid_size,seed,solved,expanded_nodes,time_ms"
        )?;
        for record in &self.records {
            writeln!(
                file,
                "{},{},{},{},{},{},{:.6}",
                record.run_number,
                record.algorithm,
                record.grid_size,
                record.seed,
                record.solved,
                record.expanded_nodes,
                record.time_ms
            )?;
        }
        Ok(())
    }

    pub fn print_summary(&self) {
        println!("\n=== BENCHMARK SUMMARY ===");
        println!("Algorithm: {}", self.algorithm);
        println!(
            "Grid: {}x{}, goals per trial: {}",
            self.params.width, self.params.height, self.params.goal_count
        );

        let total = self.seeds.len();
        let failed = self.failures.len();
        println!("Trials: {} ({} solved, {} unsolvable)", total, total - failed, failed);

        match self.summary() {
            Some(stats) => print!("{stats}"),
            None => println!("No solved trials to summarize."),
        }

        if !self.failures.is_empty() {
            println!("Unsolvable trials:");
            for failure in &self.failures {
                println!(
                    "  run {} (seed {}): {} goals collected before giving up",
                    failure.run_number, failure.seed, failure.goals_collected
                );
            }
        }
    }
}

/// Reads a seed list: a JSON array of unsigned integers, consumed in
/// order. The storage format is the only contract; seeds are opaque.
pub fn load_seeds(path: &Path) -> Result<Vec<u64>> {
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|source| Error::SeedFile {
        path: path.to_path_buf(),
        source,
    })
}
