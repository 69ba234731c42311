use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::warn;

use maze_bench::benchmark::{self, BenchmarkRunner};
use maze_bench::config::Config;
use maze_bench::error::Result;
use maze_bench::simulation::{RunState, SearchSample, Simulation};
use maze_bench::statistics::AggregateStats;

fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("maze_bench=info".parse().unwrap()),
        )
        .init();

    if let Err(e) = run(config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let params = config.generator_params()?;

    if config.benchmark {
        let seeds = match &config.seed_file {
            Some(path) => benchmark::load_seeds(path)?,
            None => {
                let base = config.seed.unwrap_or(0);
                (0..config.runs as u64).map(|i| base + i).collect()
            }
        };

        let mut runner = BenchmarkRunner::new(params, config.algorithm, seeds);
        runner.run()?;
        runner.write_csv(&config.output_file)?;
        if !config.quiet {
            runner.print_summary();
        }
        println!("Results saved to: {}", config.output_file.display());
        return Ok(());
    }

    // Single simulation with terminal visualization.
    let seed = config.seed.unwrap_or_else(rand::random);
    if !config.quiet {
        println!("Starting simulation...");
        println!("Grid: {}x{}", params.width, params.height);
        println!("Algorithm: {}", config.algorithm);
        println!("Seed: {seed} (for reproducibility)");
        println!();
    }

    let mut simulation = Simulation::from_seed(&params, config.algorithm, seed)?;
    let mut samples: Vec<SearchSample> = Vec::new();
    let mut ticks = 0usize;
    let max_ticks = params.width * params.height * (params.goal_count + 1) * 4;

    while simulation.state() == RunState::InProgress {
        let outcome = simulation.step();

        if !config.no_visualization {
            clear_screen();
            println!("=== PATHFINDING SIMULATION ===");
            println!(
                "Algorithm: {} | Tick: {} | Collected: {} | Goals left: {}",
                config.algorithm,
                ticks + 1,
                simulation.agent.collected,
                simulation.goals.len()
            );
            if let Some(last) = outcome.searches.last() {
                println!(
                    "Last search: {} nodes expanded in {:.2?}",
                    last.expanded_nodes, last.elapsed
                );
            }
            print!(
                "{}",
                simulation
                    .grid
                    .render(Some(simulation.agent.position), &simulation.goals)
            );
            thread::sleep(Duration::from_millis(config.delay_ms));
        } else if !config.quiet {
            for sample in &outcome.searches {
                println!(
                    "{} metrics - expanded nodes: {}, time: {:.2}ms",
                    sample.algorithm,
                    sample.expanded_nodes,
                    sample.elapsed.as_secs_f64() * 1000.0
                );
            }
        }
        samples.extend(outcome.searches);

        ticks += 1;
        if ticks >= max_ticks && simulation.state() == RunState::InProgress {
            warn!(ticks, "tick budget exhausted, stopping simulation");
            break;
        }
    }

    if !config.no_visualization {
        clear_screen();
    }
    println!("\n=== SIMULATION COMPLETE ===");
    match simulation.state() {
        RunState::Complete => println!("All goals collected in {ticks} ticks."),
        RunState::Unsolvable => println!("Instance unsolvable: no goal reachable."),
        RunState::InProgress => println!("Stopped after {ticks} ticks."),
    }
    println!("Goals collected: {}", simulation.agent.collected);

    let records: Vec<_> = samples
        .iter()
        .map(|sample| benchmark::BenchmarkRecord {
            run_number: 1,
            algorithm: sample.algorithm.name().to_string(),
            grid_size: params.width,
            seed,
            solved: simulation.state() == RunState::Complete,
            expanded_nodes: sample.expanded_nodes,
            time_ms: sample.elapsed.as_secs_f64() * 1000.0,
        })
        .collect();
    if let Some(stats) = AggregateStats::from_records(&records) {
        print!("{stats}");
    }

    Ok(())
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}
