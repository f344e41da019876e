//! Shared wire format for stored tracks and candidate lists
//!
//! Both blob kinds are JSON: a track is an object, a candidate list is an
//! array of ids. Decoding failures surface as `Error::Decode`; they are
//! genuine failures and never routed to a fallback tier.

use super::Track;
use crate::{Result, TrackId, UserId};

/// Store key for a track.
#[must_use]
pub fn track_key(track: TrackId) -> String {
    track.to_string()
}

/// Store key for a user's candidate list.
#[must_use]
pub fn user_key(user: UserId) -> String {
    user.to_string()
}

/// Encode a track for the track store.
///
/// # Errors
///
/// Returns `Decode` if serialization fails.
pub fn encode_track(track: &Track) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(track)?)
}

/// Decode a track blob.
///
/// # Errors
///
/// Returns `Decode` if the bytes are not a valid track.
pub fn decode_track(bytes: &[u8]) -> Result<Track> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a candidate list for the per-user store.
///
/// # Errors
///
/// Returns `Decode` if serialization fails.
pub fn encode_candidates(candidates: &[TrackId]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(candidates)?)
}

/// Decode a candidate list blob.
///
/// # Errors
///
/// Returns `Decode` if the bytes are not a JSON array of track ids.
pub fn decode_candidates(bytes: &[u8]) -> Result<Vec<TrackId>> {
    Ok(serde_json::from_slice(bytes)?)
}
