//! Experiment Registry - the immutable set of experiments live in a process
//!
//! Built once at startup and handed to the serving layer; never mutated
//! afterwards, so concurrent readers need no coordination.

use rustc_hash::FxHashMap;

use super::{Experiment, ExperimentConfig, Split, Treatment};
use crate::{Error, Result, UserId};

/// Name of the experiment that gates the `UltraPower` recommender.
pub const ULTRA_POWER: &str = "ULTRA_POWER";

/// Name of the experiment that gates the contextual recommender.
pub const CONTEXTUAL: &str = "CONTEXTUAL";

/// Immutable, name-indexed collection of experiments.
#[derive(Debug, Clone, Default)]
pub struct ExperimentRegistry {
    experiments: FxHashMap<String, Experiment>,
}

impl ExperimentRegistry {
    /// Build a registry from already constructed experiments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if two experiments share a name.
    pub fn new(experiments: impl IntoIterator<Item = Experiment>) -> Result<Self> {
        let mut map = FxHashMap::default();
        for experiment in experiments {
            let name = experiment.name().to_string();
            if map.insert(name.clone(), experiment).is_some() {
                return Err(Error::InvalidConfiguration(format!(
                    "duplicate experiment name: {name}"
                )));
            }
        }

        tracing::info!(experiments = map.len(), "experiment registry built");
        Ok(Self { experiments: map })
    }

    /// Build a registry from serializable definitions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a split wider than the treatment set
    /// or for duplicate names.
    pub fn from_configs(configs: &[ExperimentConfig]) -> Result<Self> {
        let experiments = configs
            .iter()
            .map(Experiment::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(experiments)
    }

    /// The standard experiments: `ULTRA_POWER` and `CONTEXTUAL`, both half/half.
    ///
    /// # Errors
    ///
    /// Never fails in practice; kept fallible to share the construction path.
    pub fn standard() -> Result<Self> {
        Self::new([
            Experiment::new(ULTRA_POWER, Split::HalfHalf)?,
            Experiment::new(CONTEXTUAL, Split::HalfHalf)?,
        ])
    }

    /// Look up an experiment by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Experiment> {
        self.experiments.get(name)
    }

    /// Assign `user` within the named experiment.
    ///
    /// # Errors
    ///
    /// Returns `UnknownExperiment` if no experiment has that name.
    pub fn assign(&self, experiment_name: &str, user: UserId) -> Result<Treatment> {
        self.get(experiment_name)
            .map(|experiment| experiment.assign(user))
            .ok_or_else(|| Error::UnknownExperiment(experiment_name.to_string()))
    }

    /// Registered experiment names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.experiments.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over experiments (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Experiment> {
        self.experiments.values()
    }

    /// Number of experiments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Check if the registry holds no experiments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}
