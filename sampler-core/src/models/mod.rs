mod confidence_level;
mod request;
mod result;

pub use confidence_level::ConfidenceLevel;
pub use request::SampleSizeRequest;
pub use result::SampleSizeResult;
