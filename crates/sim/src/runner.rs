use std::time::Instant;

use rayon::prelude::*;

use dropchance_shared::config::SimulationConfig;
use dropchance_shared::result::AggregateResult;

use crate::engine::TrialEngine;
use crate::partition::{self, WorkPartition};

/// Runs one full simulation: partition the trial count, fan out one engine
/// per partition, join, and sum the per-worker counts. Each worker only
/// touches its own engine; aggregation happens strictly after the join.
pub fn run_simulation(
    config: &SimulationConfig,
    n_workers: Option<usize>,
    base_seed: Option<u64>,
) -> anyhow::Result<AggregateResult> {
    let workers = n_workers.unwrap_or_else(partition::effective_parallelism);
    let partitions = partition::plan(config.total_trials, workers, base_seed)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let start = Instant::now();
    let successes: u64 = pool.install(|| {
        partitions
            .par_iter()
            .map(|part| run_partition(config, part))
            .sum()
    });
    let elapsed = start.elapsed();

    Ok(AggregateResult {
        successes,
        total_trials: config.total_trials,
        elapsed,
    })
}

fn run_partition(config: &SimulationConfig, part: &WorkPartition) -> u64 {
    let mut engine = match part.seed {
        Some(seed) => TrialEngine::seeded(config, seed),
        None => TrialEngine::from_entropy(config),
    };
    engine.run(part.trials)
}
