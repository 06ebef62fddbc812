//! Minimum sample size for estimating a population proportion.
//!
//! This module implements the normal-approximation sample-size formula with
//! the finite population correction:
//!
//! ```text
//! n = ceil( (N * Z^2 * p * (1 - p)) / ((N - 1) * E^2 + Z^2 * p * (1 - p)) )
//! ```
//!
//! | Term | Meaning |
//! |------|---------|
//! | N    | Population size (rows of data available) |
//! | Z    | Two-tailed z-score for the chosen confidence level |
//! | p    | Estimated population proportion (0.5 when unknown) |
//! | E    | Margin of error |
//!
//! The result is always rounded up: rounding down would under-sample and
//! break the margin-of-error guarantee. As N grows the result converges to
//! the infinite-population estimate `Z^2 * p * (1 - p) / E^2`.
//!
//! # Example
//!
//! ```
//! use sampler_core::calculations::SampleSizeEstimator;
//! use sampler_core::models::{ConfidenceLevel, SampleSizeRequest};
//!
//! let request = SampleSizeRequest {
//!     population_size: 1000,
//!     confidence_level: ConfidenceLevel::NinetyFive,
//!     proportion: 0.5,
//!     margin_of_error: 0.05,
//! };
//!
//! let result = SampleSizeEstimator::estimate(&request).unwrap();
//!
//! assert_eq!(result.sample_size, 278);
//! assert_eq!(result.reduction_percent, 72);
//! ```

use thiserror::Error;
use tracing::debug;

use crate::models::{SampleSizeRequest, SampleSizeResult};

/// Errors that can occur during sample-size estimation.
#[derive(Debug, Error, PartialEq)]
pub enum EstimatorError {
    /// The population must contain at least one member.
    #[error("population size must be at least 1, got {0}")]
    PopulationTooSmall(u64),

    /// The z-score must be a positive real number.
    #[error("z-score must be positive, got {0}")]
    NonPositiveZScore(f64),

    /// The margin of error must lie in (0, 1].
    #[error("margin of error must be greater than 0 and at most 1, got {0}")]
    MarginOutOfRange(f64),

    /// The proportion must lie in [0, 1].
    #[error("proportion must be between 0 and 1, got {0}")]
    ProportionOutOfRange(f64),

    /// A proportion of exactly 0 or 1 implies zero variance, so the formula
    /// has nothing to estimate.
    #[error("proportion {0} leaves no variance to estimate; use a value strictly between 0 and 1")]
    DegenerateProportion(f64),

    /// The denominator of the formula came out non-positive. Unreachable for
    /// inputs that pass validation; kept as a guard against malformed calls.
    #[error("formula denominator is not positive")]
    NonPositiveDenominator,
}

/// Calculator for the finite-population-corrected minimum sample size.
///
/// Stateless: every invocation reads only its arguments and the static
/// z-score table, so calls may run concurrently without coordination.
#[derive(Debug, Clone, Copy)]
pub struct SampleSizeEstimator;

impl SampleSizeEstimator {
    /// Estimates the minimum sample size for a request.
    ///
    /// Resolves the confidence level to its z-score, computes the sample
    /// size, and derives the reduction percentage for display.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError`] when any input falls outside its valid
    /// domain. Inputs are never clamped into range.
    pub fn estimate(request: &SampleSizeRequest) -> Result<SampleSizeResult, EstimatorError> {
        let z_score = request.confidence_level.z_score();
        let sample_size = Self::compute(
            request.population_size,
            z_score,
            request.proportion,
            request.margin_of_error,
        )?;
        let reduction_percent = Self::reduction_percent(sample_size, request.population_size);

        debug!(
            confidence = request.confidence_level.as_str(),
            population = request.population_size,
            sample_size,
            reduction_percent,
            "sample size estimated"
        );

        Ok(SampleSizeResult {
            sample_size,
            reduction_percent,
        })
    }

    /// Computes the minimum sample size from raw formula inputs.
    ///
    /// For callers that supply their own z-score instead of a named
    /// confidence level. The result satisfies `1 <= n <= population` for all
    /// valid inputs.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError`] when any input falls outside its valid
    /// domain, or when the denominator of the formula is not positive.
    pub fn compute(
        population: u64,
        z_score: f64,
        proportion: f64,
        margin_of_error: f64,
    ) -> Result<u64, EstimatorError> {
        if population == 0 {
            return Err(EstimatorError::PopulationTooSmall(population));
        }
        if z_score.is_nan() || z_score <= 0.0 {
            return Err(EstimatorError::NonPositiveZScore(z_score));
        }
        if margin_of_error.is_nan() || margin_of_error <= 0.0 || margin_of_error > 1.0 {
            return Err(EstimatorError::MarginOutOfRange(margin_of_error));
        }
        if !(0.0..=1.0).contains(&proportion) {
            return Err(EstimatorError::ProportionOutOfRange(proportion));
        }
        if proportion == 0.0 || proportion == 1.0 {
            return Err(EstimatorError::DegenerateProportion(proportion));
        }

        let n = population as f64;
        let variance_term = z_score * z_score * proportion * (1.0 - proportion);
        let denominator = (n - 1.0) * margin_of_error * margin_of_error + variance_term;
        if denominator <= 0.0 {
            return Err(EstimatorError::NonPositiveDenominator);
        }

        let raw = n * variance_term / denominator;

        // Rounding up is correctness-critical: under-sampling would violate
        // the margin-of-error guarantee. The clamp only pins the ceiling
        // result back into [1, N] when floating point lands a hair past N.
        Ok((raw.ceil() as u64).clamp(1, population))
    }

    /// `round((1 - n/N) * 100)`, using round-half-up.
    fn reduction_percent(sample_size: u64, population: u64) -> u8 {
        let fraction = 1.0 - sample_size as f64 / population as f64;
        (fraction * 100.0).round() as u8
    }
}
