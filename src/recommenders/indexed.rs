//! Indexed - personalization from precomputed per-user candidate lists

use super::{choose_uniform, RecommenderStrategy, TopPop};
use crate::catalog::UserCandidates;
use crate::kv::KvStore;
use crate::{Result, TrackId, UserId};

/// Recommends a uniformly random entry of the user's offline candidate list,
/// falling back to [`TopPop`] for users without one.
#[derive(Debug, Clone)]
pub struct Indexed<S> {
    candidates: UserCandidates<S>,
    fallback: TopPop,
}

impl<S: KvStore> Indexed<S> {
    /// Create the tier over a per-user store.
    pub const fn new(recommendations: S, fallback: TopPop) -> Self {
        Self {
            candidates: UserCandidates::new(recommendations),
            fallback,
        }
    }

    /// The popularity tier used for users without candidates.
    pub const fn fallback(&self) -> &TopPop {
        &self.fallback
    }
}

impl<S: KvStore> RecommenderStrategy for Indexed<S> {
    async fn recommend_next(
        &self,
        user: UserId,
        prev_track: TrackId,
        prev_track_time: f64,
    ) -> Result<TrackId> {
        let candidates = self.candidates.get(user).await?;

        // An empty stored list carries no signal, same as no list
        match candidates.as_deref().and_then(choose_uniform) {
            Some(track) => {
                tracing::debug!(user, prev_track, track, tier = "indexed", "recommended");
                Ok(track)
            }
            None => {
                tracing::debug!(user, "no candidates, falling back to top_pop");
                self.fallback
                    .recommend_next(user, prev_track, prev_track_time)
                    .await
            }
        }
    }
}
