pub mod calculations;
pub mod models;

pub use calculations::{EstimatorError, SampleSizeEstimator};
pub use models::*;
