// Uniform draws land in 1..=DRAW_SCALE and are compared against a threshold
// in millionths, giving a fixed 1e-4 percentage-point resolution. The draw
// floor of 1 keeps a 0% threshold unreachable.
pub const DRAW_SCALE: u32 = 1_000_000;

// Compiled-in defaults
pub const DEFAULT_DROP_PERCENT: f64 = 10.0;
pub const DEFAULT_CHESTS_PER_TRIAL: u64 = 10;
pub const DEFAULT_TOTAL_TRIALS: u64 = 10;

// Below this the empirical rate is noisy enough to warrant a warning.
pub const MIN_RECOMMENDED_TRIALS: u64 = 3_621;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub drop_percent: f64,
    pub chests_per_trial: u64,
    pub total_trials: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            drop_percent: DEFAULT_DROP_PERCENT,
            chests_per_trial: DEFAULT_CHESTS_PER_TRIAL,
            total_trials: DEFAULT_TOTAL_TRIALS,
        }
    }
}

impl SimulationConfig {
    /// Highest draw value that still counts as a drop, in millionths.
    #[inline]
    pub fn draw_threshold(&self) -> u32 {
        (self.drop_percent * (DRAW_SCALE as f64 / 100.0)).round() as u32
    }
}
