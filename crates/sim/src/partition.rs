use dropchance_shared::error::ConfigError;

/// One worker's share of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkPartition {
    pub trials: u64,
    /// Derived from the base seed when one was injected; `None` means the
    /// engine seeds itself from OS entropy.
    pub seed: Option<u64>,
}

/// Detected hardware parallelism, clamped to at least one worker. Some
/// platforms report nothing at all; a run always gets one partition.
pub fn effective_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Splits `total` trials into `workers` near-equal counts. The remainder
/// goes to the last partition so no trials are dropped. Deterministic for a
/// given `(total, workers)`.
pub fn split_trials(total: u64, workers: usize) -> Result<Vec<u64>, ConfigError> {
    if workers == 0 {
        return Err(ConfigError::ZeroWorkers);
    }
    let share = total / workers as u64;
    let mut counts = vec![share; workers];
    counts[workers - 1] += total % workers as u64;

    let partitioned: u64 = counts.iter().sum();
    if partitioned != total {
        return Err(ConfigError::PartitionMismatch {
            partitioned,
            expected: total,
        });
    }
    Ok(counts)
}

/// Builds the partition set, deriving one seed per partition by wrapping
/// addition of the partition index when a base seed is given.
pub fn plan(
    total: u64,
    workers: usize,
    base_seed: Option<u64>,
) -> Result<Vec<WorkPartition>, ConfigError> {
    let counts = split_trials(total, workers)?;
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, trials)| WorkPartition {
            trials,
            seed: base_seed.map(|s| s.wrapping_add(i as u64)),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_lands_on_last() {
        let counts = split_trials(10, 3).unwrap();
        assert_eq!(counts, vec![3, 3, 4]);
    }

    #[test]
    fn test_even_split_has_no_remainder() {
        let counts = split_trials(12, 4).unwrap();
        assert_eq!(counts, vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_fewer_trials_than_workers() {
        let counts = split_trials(2, 5).unwrap();
        assert_eq!(counts, vec![0, 0, 0, 0, 2]);
        assert_eq!(counts.iter().sum::<u64>(), 2);
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(matches!(
            split_trials(10, 0),
            Err(ConfigError::ZeroWorkers)
        ));
    }

    #[test]
    fn test_plan_derives_seeds_from_base() {
        let parts = plan(100, 3, Some(41)).unwrap();
        let seeds: Vec<_> = parts.iter().map(|p| p.seed.unwrap()).collect();
        assert_eq!(seeds, vec![41, 42, 43]);
    }

    #[test]
    fn test_plan_without_base_seed() {
        let parts = plan(100, 3, None).unwrap();
        assert!(parts.iter().all(|p| p.seed.is_none()));
    }
}
