//! Treatments and splits

use serde::{Deserialize, Serialize};
use std::fmt;

/// Experiment outcome bucket assigned to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Treatment {
    /// Control arm
    #[serde(rename = "C")]
    Control,
    /// First treatment arm
    #[serde(rename = "T1")]
    Treatment1,
}

impl Treatment {
    /// All treatments, in bucket order (bucket `i` maps to `ALL[i]`).
    pub const ALL: [Self; 2] = [Self::Control, Self::Treatment1];

    /// Number of defined treatments.
    pub const COUNT: u32 = 2;

    /// Short label used in logs and event records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Control => "C",
            Self::Treatment1 => "T1",
        }
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of equally weighted buckets an experiment divides users into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Split {
    /// 2 buckets
    HalfHalf,
    /// 4 buckets
    FourWay,
    /// 5 buckets
    FiveWay,
    /// 7 buckets
    SevenWay,
}

impl Split {
    /// Number of buckets.
    #[must_use]
    pub const fn cardinality(&self) -> u32 {
        match self {
            Self::HalfHalf => 2,
            Self::FourWay => 4,
            Self::FiveWay => 5,
            Self::SevenWay => 7,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HalfHalf => "HALF_HALF",
            Self::FourWay => "FOUR_WAY",
            Self::FiveWay => "FIVE_WAY",
            Self::SevenWay => "SEVEN_WAY",
        };
        write!(f, "{name}({})", self.cardinality())
    }
}
