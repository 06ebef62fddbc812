use serde::{Deserialize, Serialize};

/// Two-tailed confidence level for a proportion estimate.
///
/// Each level maps to the critical z-score of the standard normal
/// distribution. The mapping is fixed at compile time and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Ninety,
    NinetyFive,
    NinetySeven,
    NinetyNine,
    NinetyNinePointNine,
}

impl ConfidenceLevel {
    /// All supported levels, in ascending order of confidence.
    pub const ALL: [Self; 5] = [
        Self::Ninety,
        Self::NinetyFive,
        Self::NinetySeven,
        Self::NinetyNine,
        Self::NinetyNinePointNine,
    ];

    /// The two-tailed critical z-score for this level.
    pub const fn z_score(&self) -> f64 {
        match self {
            Self::Ninety => 1.645,
            Self::NinetyFive => 1.96,
            Self::NinetySeven => 2.17,
            Self::NinetyNine => 2.58,
            Self::NinetyNinePointNine => 3.29,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ninety => "90%",
            Self::NinetyFive => "95%",
            Self::NinetySeven => "97%",
            Self::NinetyNine => "99%",
            Self::NinetyNinePointNine => "99.9%",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "90%" | "90" => Some(Self::Ninety),
            "95%" | "95" => Some(Self::NinetyFive),
            "97%" | "97" => Some(Self::NinetySeven),
            "99%" | "99" => Some(Self::NinetyNine),
            "99.9%" | "99.9" => Some(Self::NinetyNinePointNine),
            _ => None,
        }
    }
}
