//! Catalog contract
//!
//! Read-only view of the music catalog as seen by the recommenders:
//! - [`Catalog`]: the full track universe plus the popularity ranking
//! - [`TrackStore`]: previous-track lookups (metadata + similarity list)
//! - [`UserCandidates`]: per-user candidate lists computed offline
//!
//! Tracks and candidate lists share one wire format (JSON, see [`codec`]).
//! Bulk loading and upload of the catalog happen outside this crate.

pub mod codec;
mod store;
mod track;

pub use store::{EncodedTrack, TrackStore, UserCandidates};
pub use track::Track;

use crate::{Error, Result, TrackId};
use std::sync::Arc;

/// Track universe and popularity ranking.
///
/// Both lists are fixed at construction and shared cheaply between strategies.
#[derive(Debug, Clone)]
pub struct Catalog {
    track_ids: Arc<[TrackId]>,
    top_tracks: Arc<[TrackId]>,
}

impl Catalog {
    /// Create a catalog.
    ///
    /// # Arguments
    ///
    /// * `track_ids` - Every track id that may be recommended
    /// * `top_tracks` - Track ids ordered by descending popularity
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the track universe is empty, since
    /// the terminal random tier must always have something to return.
    pub fn new(track_ids: Vec<TrackId>, top_tracks: Vec<TrackId>) -> Result<Self> {
        if track_ids.is_empty() {
            return Err(Error::InvalidConfiguration(
                "catalog track universe is empty".to_string(),
            ));
        }

        Ok(Self {
            track_ids: track_ids.into(),
            top_tracks: top_tracks.into(),
        })
    }

    /// Build a catalog from loaded tracks, keeping their order for the universe.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `tracks` is empty.
    pub fn from_tracks(tracks: &[Track], top_tracks: Vec<TrackId>) -> Result<Self> {
        Self::new(tracks.iter().map(|t| t.track).collect(), top_tracks)
    }

    /// The full track universe.
    #[must_use]
    pub fn track_ids(&self) -> &[TrackId] {
        &self.track_ids
    }

    /// Track ids ordered by popularity.
    #[must_use]
    pub fn top_tracks(&self) -> &[TrackId] {
        &self.top_tracks
    }

    /// The `n` most popular tracks (fewer if the ranking is shorter).
    #[must_use]
    pub fn top_tracks_prefix(&self, n: usize) -> Vec<TrackId> {
        self.top_tracks[..n.min(self.top_tracks.len())].to_vec()
    }

    /// Number of tracks in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.track_ids.len()
    }

    /// Always false: construction rejects an empty universe.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }
}
