use serde::{Deserialize, Serialize};

/// Output of one sample-size estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSizeResult {
    /// Minimum sample size n, with 1 <= n <= N.
    pub sample_size: u64,

    /// `round((1 - n/N) * 100)`, the informational reduction from the
    /// population size. Not used in further computation.
    pub reduction_percent: u8,
}
