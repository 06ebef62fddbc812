use serde::{Deserialize, Serialize};

use crate::models::ConfidenceLevel;

/// Inputs for one sample-size estimate.
///
/// Numeric ranges are checked by the estimator, not here: the request is a
/// plain value object so callers can build it from unvalidated form input
/// and get a precise error back from the calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeRequest {
    /// Population size N. Must be at least 1.
    pub population_size: u64,

    /// Confidence level, resolved to its z-score by the estimator.
    pub confidence_level: ConfidenceLevel,

    /// Estimated population proportion p, in [0, 1].
    /// Use 0.5 when unknown; it maximises the required sample size.
    pub proportion: f64,

    /// Margin of error E, in (0, 1].
    pub margin_of_error: f64,
}
