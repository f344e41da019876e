//! Random - terminal tier, uniform over the whole catalog

use super::{choose_uniform, RecommenderStrategy};
use crate::catalog::Catalog;
use crate::{Error, Result, TrackId, UserId};

/// Recommends a uniformly random track from the catalog universe.
///
/// Never delegates. The catalog guarantees a non-empty universe, so this
/// tier always has an answer.
#[derive(Debug, Clone)]
pub struct Random {
    catalog: Catalog,
}

impl Random {
    /// Create the tier over `catalog`.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl RecommenderStrategy for Random {
    async fn recommend_next(
        &self,
        user: UserId,
        prev_track: TrackId,
        _prev_track_time: f64,
    ) -> Result<TrackId> {
        let track = choose_uniform(self.catalog.track_ids()).ok_or_else(|| {
            Error::InvalidConfiguration("catalog track universe is empty".to_string())
        })?;
        tracing::debug!(user, prev_track, track, tier = "random", "recommended");
        Ok(track)
    }
}
