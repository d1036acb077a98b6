/// Partitioning or parallelism detection went inconsistent. Fatal: surfaces
/// before any worker launches, never alongside a partial result.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("worker count resolved to zero")]
    ZeroWorkers,
    #[error("partitions cover {partitioned} trials, expected {expected}")]
    PartitionMismatch { partitioned: u64, expected: u64 },
}
