//! `UltraPower` - exploration plus confidence-gated content similarity
//!
//! Track-to-track transitions are only trusted when the user endorsed the
//! previous track by listening through most of it. Per call:
//!
//! 1. previous track unknown            -> [`Indexed`]
//! 2. exploration trial (`p_rand`) hits -> [`Random`]
//! 3. listen-through below `threshold`  -> [`Indexed`]
//! 4. similarity list empty             -> [`Indexed`]
//! 5. otherwise a uniform pick from the previous track's similarity list

use super::{bernoulli, choose_uniform, Indexed, Random, RecommenderStrategy, TopPop};
use crate::catalog::{Catalog, TrackStore};
use crate::config::RecommenderConfig;
use crate::kv::KvStore;
use crate::{Result, TrackId, UserId};

/// The richest policy of the cascade.
///
/// `T` is the track store, `U` the per-user candidate store.
#[derive(Debug, Clone)]
pub struct UltraPower<T, U> {
    tracks: TrackStore<T>,
    fallback: Indexed<U>,
    random: Random,
    threshold: f64,
    p_rand: f64,
}

impl<T: KvStore, U: KvStore> UltraPower<T, U> {
    /// Assemble the full cascade.
    ///
    /// # Arguments
    ///
    /// * `tracks` - Track store used for previous-track lookups
    /// * `recommendations` - Per-user candidate store for the `Indexed` tier
    /// * `catalog` - Track universe and popularity ranking
    /// * `config` - Threshold, exploration probability and top-N size
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `config` is out of range or the
    /// catalog has no popular tracks for the `TopPop` tier.
    pub fn new(
        tracks: T,
        recommendations: U,
        catalog: &Catalog,
        config: &RecommenderConfig,
    ) -> Result<Self> {
        config.validate()?;
        let top_pop = TopPop::from_catalog(catalog, config.top_tracks_limit)?;

        Ok(Self {
            tracks: TrackStore::new(tracks),
            fallback: Indexed::new(recommendations, top_pop),
            random: Random::new(catalog.clone()),
            threshold: config.threshold,
            p_rand: config.p_rand,
        })
    }

    /// Listen-through threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Exploration probability.
    #[must_use]
    pub const fn p_rand(&self) -> f64 {
        self.p_rand
    }
}

impl<T: KvStore, U: KvStore> RecommenderStrategy for UltraPower<T, U> {
    async fn recommend_next(
        &self,
        user: UserId,
        prev_track: TrackId,
        prev_track_time: f64,
    ) -> Result<TrackId> {
        let Some(previous) = self.tracks.get_encoded(prev_track).await? else {
            tracing::debug!(user, prev_track, "previous track unknown, falling back to indexed");
            return self
                .fallback
                .recommend_next(user, prev_track, prev_track_time)
                .await;
        };

        if bernoulli(self.p_rand) {
            tracing::debug!(user, prev_track, "exploring");
            return self
                .random
                .recommend_next(user, prev_track, prev_track_time)
                .await;
        }

        // NaN compares false and goes on to the similarity list
        if prev_track_time < self.threshold {
            tracing::debug!(
                user,
                prev_track,
                prev_track_time,
                "low listen-through, falling back to indexed"
            );
            return self
                .fallback
                .recommend_next(user, prev_track, prev_track_time)
                .await;
        }

        let previous = previous.decode()?;
        match choose_uniform(&previous.recommendations) {
            Some(track) => {
                tracing::debug!(user, prev_track, track, tier = "ultra_power", "recommended");
                Ok(track)
            }
            None => {
                tracing::debug!(user, prev_track, "empty similarity list, falling back to indexed");
                self.fallback
                    .recommend_next(user, prev_track, prev_track_time)
                    .await
            }
        }
    }
}
