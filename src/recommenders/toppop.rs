//! `TopPop` - uniform over the most popular tracks

use std::sync::Arc;

use super::{choose_uniform, RecommenderStrategy};
use crate::catalog::Catalog;
use crate::{Error, Result, TrackId, UserId};

/// Recommends a uniformly random track from a fixed top-N popularity list.
///
/// Used when there is no personalization signal for the user.
#[derive(Debug, Clone)]
pub struct TopPop {
    top_tracks: Arc<[TrackId]>,
}

impl TopPop {
    /// Create the tier over an explicit popularity list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `top_tracks` is empty.
    pub fn new(top_tracks: Vec<TrackId>) -> Result<Self> {
        if top_tracks.is_empty() {
            return Err(Error::InvalidConfiguration(
                "top tracks list is empty".to_string(),
            ));
        }
        Ok(Self {
            top_tracks: top_tracks.into(),
        })
    }

    /// Create the tier over the catalog's `limit` most popular tracks.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the catalog has no popularity ranking.
    pub fn from_catalog(catalog: &Catalog, limit: usize) -> Result<Self> {
        Self::new(catalog.top_tracks_prefix(limit))
    }

    /// The popularity list this tier draws from.
    #[must_use]
    pub fn top_tracks(&self) -> &[TrackId] {
        &self.top_tracks
    }
}

impl RecommenderStrategy for TopPop {
    async fn recommend_next(
        &self,
        user: UserId,
        prev_track: TrackId,
        _prev_track_time: f64,
    ) -> Result<TrackId> {
        let track = choose_uniform(&self.top_tracks).ok_or_else(|| {
            Error::InvalidConfiguration("top tracks list is empty".to_string())
        })?;
        tracing::debug!(user, prev_track, track, tier = "top_pop", "recommended");
        Ok(track)
    }
}
