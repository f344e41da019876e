//! Experiment - deterministic user-to-treatment assignment

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{murmur3_32, Split, Treatment};
use crate::{Error, Result, UserId};

/// Raw bucket of `user` under an experiment seed.
///
/// The user id is hashed as its decimal string, so `bucket` agrees with any
/// other service hashing the same textual id.
///
/// # Examples
///
/// ```rust
/// use botify_core::experiment::{bucket, murmur3_32, Split};
///
/// let seed = murmur3_32(b"ULTRA_POWER", 0);
/// assert!(bucket(seed, 42, Split::SevenWay) < 7);
/// ```
#[must_use]
pub fn bucket(seed: u32, user: UserId, split: Split) -> u32 {
    murmur3_32(user.to_string().as_bytes(), seed) % split.cardinality()
}

/// A single A/B experiment.
///
/// Assigns any user to one of the treatments based on the experiment name and
/// the user id. There is no hidden state: the same `(name, user)` pair always
/// yields the same treatment, across calls and across restarts.
///
/// # Example
///
/// ```rust
/// use botify_core::experiment::{Experiment, Split, Treatment};
///
/// let experiment = Experiment::new("ULTRA_POWER", Split::HalfHalf)?;
/// match experiment.assign(1001) {
///     Treatment::Control => { /* control actions */ }
///     Treatment::Treatment1 => { /* treatment actions */ }
/// }
/// # Ok::<(), botify_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    name: String,
    split: Split,
    seed: u32,
}

impl Experiment {
    /// Create an experiment and derive its seed from `name`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the split has more buckets than there
    /// are treatments, since such buckets would have no treatment to map to.
    pub fn new(name: impl Into<String>, split: Split) -> Result<Self> {
        let name = name.into();
        if split.cardinality() > Treatment::COUNT {
            return Err(Error::InvalidConfiguration(format!(
                "experiment {name}: split {split} has more buckets than the {} defined treatments",
                Treatment::COUNT
            )));
        }

        let seed = murmur3_32(name.as_bytes(), 0);
        Ok(Self { name, split, seed })
    }

    /// Experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Experiment split.
    #[must_use]
    pub const fn split(&self) -> Split {
        self.split
    }

    /// Seed derived from the name.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Assign `user` to a treatment.
    #[must_use]
    pub fn assign(&self, user: UserId) -> Treatment {
        // In range: construction rejects splits wider than the treatment set
        Treatment::ALL[bucket(self.seed, user, self.split) as usize]
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.split)
    }
}

/// Serializable experiment definition, validated into an [`Experiment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Unique experiment name
    pub name: String,
    /// Bucket split
    pub split: Split,
}

impl ExperimentConfig {
    /// Create a definition.
    #[must_use]
    pub fn new(name: impl Into<String>, split: Split) -> Self {
        Self {
            name: name.into(),
            split,
        }
    }
}

impl TryFrom<&ExperimentConfig> for Experiment {
    type Error = Error;

    fn try_from(config: &ExperimentConfig) -> Result<Self> {
        Self::new(config.name.clone(), config.split)
    }
}
