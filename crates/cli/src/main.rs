mod output;

use clap::Parser;

use dropchance_shared::config::{SimulationConfig, MIN_RECOMMENDED_TRIALS};
use dropchance_sim::runner;

/// Virtually opens chests for item drop chances. Each trial records only
/// whether an item was found, not the quantity; trials are repeated to catch
/// anomalous outcomes. Nondeterministic unless a seed is given.
#[derive(Parser)]
#[command(name = "dropchance")]
struct Cli {
    /// Drop percentage per chest, 0 to 100
    #[arg(value_parser = parse_percent)]
    chance: f64,
    /// Number of chests opened per trial
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    chests: u64,
    /// Number of trials to run
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,
    /// Number of parallel workers (0 = auto)
    #[arg(long, default_value = "0")]
    workers: usize,
    /// Base seed for reproducible runs (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("invalid percentage: {}", e))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("percentage must be between 0 and 100, got {}", value));
    }
    Ok(value)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.trials < MIN_RECOMMENDED_TRIALS {
        println!(
            "Low trial counts may lead to unexpected and abnormal results.\n\
             Results may be more accurate with more than {} trials.",
            MIN_RECOMMENDED_TRIALS
        );
    }

    println!(
        "{}% drop over {} chest(s), {} times.",
        cli.chance, cli.chests, cli.trials
    );

    let config = SimulationConfig {
        drop_percent: cli.chance,
        chests_per_trial: cli.chests,
        total_trials: cli.trials,
    };
    let n_workers = if cli.workers == 0 {
        None
    } else {
        Some(cli.workers)
    };

    let result = runner::run_simulation(&config, n_workers, cli.seed)?;

    output::print_results(&result);
    Ok(())
}
