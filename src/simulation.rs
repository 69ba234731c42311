//! One seeded (grid, agent, goals) instance driven to completion.
//!
//! The goal resolution policy lives in `plan`: chase the nearest remaining
//! goal by Manhattan distance, and if no path exists fall back across the
//! other goals in their existing order before declaring the instance
//! unsolvable.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::agent::Agent;
use crate::algorithms::Algorithm;
use crate::error::ConfigError;
use crate::grid::{Grid, Position};
use crate::maze::{GeneratorParams, Maze};

/// One record per search invocation, the unit the benchmark aggregates.
#[derive(Debug, Clone, Copy)]
pub struct SearchSample {
    pub algorithm: Algorithm,
    pub expanded_nodes: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    InProgress,
    /// Every goal collected.
    Complete,
    /// No goal reachable from the agent's position; the goal set has been
    /// cleared and the instance is finished. Distinct from `Complete`.
    Unsolvable,
}

/// What one tick did: searches issued while (re)planning, and whether the
/// step landed on a goal.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub goal_reached: bool,
    pub searches: Vec<SearchSample>,
}

pub struct Simulation {
    pub grid: Grid,
    pub agent: Agent,
    pub goals: Vec<Position>,
    algorithm: Algorithm,
    state: RunState,
}

impl Simulation {
    pub fn new(maze: Maze, agent_start: Position, algorithm: Algorithm) -> Self {
        Simulation {
            grid: maze.grid,
            goals: maze.goals,
            agent: Agent::new(agent_start),
            algorithm,
            state: RunState::InProgress,
        }
    }

    /// Builds a fully independent instance from one seed: the same seed
    /// reproduces the maze, the goal layout and the agent start bit for bit.
    pub fn from_seed(
        params: &GeneratorParams,
        algorithm: Algorithm,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate(params, &mut rng)?;
        let agent_start = place_agent(&maze, &mut rng);
        Ok(Self::new(maze, agent_start, algorithm))
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Advances the instance by one tick. Replans when the cached path is
    /// exhausted; every search issued (including fallbacks) appears in the
    /// outcome so the caller can stream metrics.
    pub fn step(&mut self) -> StepOutcome {
        let mut outcome = StepOutcome {
            goal_reached: false,
            searches: Vec::new(),
        };

        if self.state != RunState::InProgress {
            return outcome;
        }

        if !self.agent.has_path() && !self.plan(&mut outcome.searches) {
            self.goals.clear();
            self.state = RunState::Unsolvable;
            return outcome;
        }

        let Some(position) = self.agent.advance() else {
            return outcome;
        };

        // Any live goal the agent lands on is collected, even when it was
        // not the planned target; the cached path keeps going regardless.
        // Reaching the target empties the path, which forces a replan
        // against the updated goal set on the next tick.
        if let Some(index) = self.goals.iter().position(|g| *g == position) {
            self.goals.remove(index);
            self.agent.collected += 1;
            outcome.goal_reached = true;
        }

        if self.goals.is_empty() {
            self.state = RunState::Complete;
        }
        outcome
    }

    /// Runs to a terminal state, returning every search sample emitted
    /// along the way. The step cap guards against a runaway loop; hitting
    /// it marks the instance unsolvable rather than aborting the process.
    pub fn run(&mut self) -> Vec<SearchSample> {
        let max_steps = self.grid.width * self.grid.height * (self.goals.len() + 1) * 4;
        let mut samples = Vec::new();
        let mut steps = 0;

        while self.state == RunState::InProgress {
            let outcome = self.step();
            samples.extend(outcome.searches);

            steps += 1;
            if steps >= max_steps && self.state == RunState::InProgress {
                warn!(steps, "step budget exhausted, marking instance unsolvable");
                self.goals.clear();
                self.state = RunState::Unsolvable;
            }
        }
        samples
    }

    /// The goal resolution policy. Returns false when no remaining goal is
    /// reachable, leaving the caller to finalize the unsolvable state.
    fn plan(&mut self, searches: &mut Vec<SearchSample>) -> bool {
        let position = self.agent.position;
        let Some(closest) = self
            .goals
            .iter()
            .copied()
            .min_by_key(|goal| goal.manhattan(&position))
        else {
            return false;
        };

        let result = self.algorithm.search(&self.grid, position, closest);
        searches.push(SearchSample {
            algorithm: self.algorithm,
            expanded_nodes: result.metrics.expanded_nodes,
            elapsed: result.metrics.elapsed,
        });
        if result.found() {
            self.agent.set_path(result.path);
            return true;
        }

        // Fall back across the other goals in their existing order, not
        // re-sorted by distance.
        let remaining: Vec<Position> = self
            .goals
            .iter()
            .copied()
            .filter(|goal| *goal != closest)
            .collect();
        for goal in remaining {
            let result = self.algorithm.search(&self.grid, position, goal);
            searches.push(SearchSample {
                algorithm: self.algorithm,
                expanded_nodes: result.metrics.expanded_nodes,
                elapsed: result.metrics.elapsed,
            });
            if result.found() {
                self.agent.set_path(result.path);
                return true;
            }
        }

        warn!(
            position = ?position,
            goals = self.goals.len(),
            "no path to any remaining goal, instance unsolvable"
        );
        false
    }
}

/// Uniform random Free cell that is not a goal. Generation guarantees the
/// grid has more Free cells than goals, so sampling terminates.
fn place_agent(maze: &Maze, rng: &mut StdRng) -> Position {
    loop {
        let pos = Position::new(
            rng.gen_range(0..maze.grid.height),
            rng.gen_range(0..maze.grid.width),
        );
        if maze.grid.is_free(pos) && !maze.goals.contains(&pos) {
            return pos;
        }
    }
}
