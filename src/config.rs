//! Service configuration
//!
//! JSON document describing the experiments and the recommender tuning.
//! Every field has a default, so `{}` is a valid configuration:
//!
//! ```json
//! {
//!   "experiments": [{"name": "ULTRA_POWER", "split": "HALF_HALF"}],
//!   "active_experiment": "ULTRA_POWER",
//!   "recommender": {"threshold": 0.8, "p_rand": 0.05, "top_tracks_limit": 100}
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::experiment::{ExperimentConfig, ExperimentRegistry, Split, CONTEXTUAL, ULTRA_POWER};
use crate::{Error, Result};

/// Default listen-through threshold below which the previous track is not trusted.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Default probability of an exploration (random) recommendation.
pub const DEFAULT_P_RAND: f64 = 0.05;

/// Default size of the popularity list used by the `TopPop` tier.
pub const DEFAULT_TOP_TRACKS_LIMIT: usize = 100;

/// Recommender cascade tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Listen-through fraction in `[0, 1]` required to trust the previous
    /// track's similarity list
    pub threshold: f64,
    /// Probability in `[0, 1]` of delegating to the random tier
    pub p_rand: f64,
    /// How many of the most popular tracks the `TopPop` tier draws from
    pub top_tracks_limit: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            p_rand: DEFAULT_P_RAND,
            top_tracks_limit: DEFAULT_TOP_TRACKS_LIMIT,
        }
    }
}

impl RecommenderConfig {
    /// Override the exploration probability.
    #[must_use]
    pub const fn with_p_rand(mut self, p_rand: f64) -> Self {
        self.p_rand = p_rand;
        self
    }

    /// Override the listen-through threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `p_rand` or `threshold` is outside
    /// `[0, 1]` (or NaN), or if `top_tracks_limit` is zero.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.p_rand) {
            return Err(Error::InvalidConfiguration(format!(
                "p_rand must be within [0, 1], got {}",
                self.p_rand
            )));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidConfiguration(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if self.top_tracks_limit == 0 {
            return Err(Error::InvalidConfiguration(
                "top_tracks_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Full service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Experiments to register
    pub experiments: Vec<ExperimentConfig>,
    /// Experiment that picks the recommender for each user
    pub active_experiment: String,
    /// Cascade tuning
    pub recommender: RecommenderConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            experiments: vec![
                ExperimentConfig::new(ULTRA_POWER, Split::HalfHalf),
                ExperimentConfig::new(CONTEXTUAL, Split::HalfHalf),
            ],
            active_experiment: ULTRA_POWER.to_string(),
            recommender: RecommenderConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `Decode` for malformed JSON and `InvalidConfiguration` for
    /// values that fail [`ServiceConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`ServiceConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate tuning values and that the active experiment is declared.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` on the first violation.
    pub fn validate(&self) -> Result<()> {
        self.recommender.validate()?;
        if !self
            .experiments
            .iter()
            .any(|e| e.name == self.active_experiment)
        {
            return Err(Error::InvalidConfiguration(format!(
                "active experiment {} is not declared",
                self.active_experiment
            )));
        }
        Ok(())
    }

    /// Build the experiment registry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for invalid splits or duplicate names.
    pub fn registry(&self) -> Result<ExperimentRegistry> {
        ExperimentRegistry::from_configs(&self.experiments)
    }
}
