//! Track - catalog entry with its offline similarity list

use serde::{Deserialize, Serialize};

use crate::TrackId;

/// A catalog track.
///
/// `recommendations` is the ordered similarity list computed offline for
/// this track; recommenders treat its entries as interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track id
    pub track: TrackId,
    /// Artist name
    pub artist: String,
    /// Track title
    pub title: String,
    /// Similar tracks, most similar first
    #[serde(default)]
    pub recommendations: Vec<TrackId>,
}

impl Track {
    /// Create a track.
    #[must_use]
    pub fn new(
        track: TrackId,
        artist: impl Into<String>,
        title: impl Into<String>,
        recommendations: Vec<TrackId>,
    ) -> Self {
        Self {
            track,
            artist: artist.into(),
            title: title.into(),
            recommendations,
        }
    }
}
