//! Sample-size calculations.
//!
//! This module holds the finite-population sample-size estimator, the only
//! computation in the crate.

pub mod estimator;

pub use estimator::{EstimatorError, SampleSizeEstimator};
