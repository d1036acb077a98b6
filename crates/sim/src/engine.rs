use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use rand_pcg::Pcg64;

use dropchance_shared::config::{SimulationConfig, DRAW_SCALE};

/// Samples one partition's worth of trials against a private random stream.
/// Never shared across workers; the success count is the only output.
pub struct TrialEngine {
    threshold: u32,
    chests_per_trial: u64,
    draw: Uniform<u32>,
    rng: Pcg64,
}

impl TrialEngine {
    pub fn seeded(config: &SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg64::seed_from_u64(seed))
    }

    /// Default path: a distinct OS-entropy stream per engine instance.
    pub fn from_entropy(config: &SimulationConfig) -> Self {
        Self::with_rng(config, Pcg64::from_entropy())
    }

    fn with_rng(config: &SimulationConfig, rng: Pcg64) -> Self {
        Self {
            threshold: config.draw_threshold(),
            chests_per_trial: config.chests_per_trial,
            draw: Uniform::new_inclusive(1, DRAW_SCALE),
            rng,
        }
    }

    // Stops at the first successful chest; later chests cannot change the
    // trial's outcome.
    #[inline]
    fn trial(&mut self) -> bool {
        for _ in 0..self.chests_per_trial {
            if self.draw.sample(&mut self.rng) <= self.threshold {
                return true;
            }
        }
        false
    }

    /// Runs `trial_count` trials, counting those where at least one chest
    /// dropped. A count of zero is valid and returns zero.
    pub fn run(&mut self, trial_count: u64) -> u64 {
        let mut successes = 0u64;
        for _ in 0..trial_count {
            if self.trial() {
                successes += 1;
            }
        }
        successes
    }
}
