//! Typed views over the raw key-value stores

use super::codec::{decode_candidates, decode_track, track_key, user_key};
use super::Track;
use crate::kv::KvStore;
use crate::{Result, TrackId, UserId};

/// Track blob as stored, decoded only when its contents are needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTrack(Vec<u8>);

impl EncodedTrack {
    /// Decode the stored blob.
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the blob is not a valid track record.
    pub fn decode(&self) -> Result<Track> {
        decode_track(&self.0)
    }
}

/// Track store: track id -> [`Track`].
#[derive(Debug, Clone)]
pub struct TrackStore<S> {
    store: S,
}

impl<S: KvStore> TrackStore<S> {
    /// Wrap a raw store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up a track without decoding it.
    ///
    /// # Errors
    ///
    /// Propagates store failures. A missing track is `Ok(None)`.
    pub async fn get_encoded(&self, track: TrackId) -> Result<Option<EncodedTrack>> {
        Ok(self.store.get(&track_key(track)).await?.map(EncodedTrack))
    }
}

/// Per-user store: user id -> precomputed candidate list.
#[derive(Debug, Clone)]
pub struct UserCandidates<S> {
    store: S,
}

impl<S: KvStore> UserCandidates<S> {
    /// Wrap a raw store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up the candidate list of `user`.
    ///
    /// # Errors
    ///
    /// Propagates store failures and undecodable blobs. A user without a
    /// stored list is `Ok(None)`.
    pub async fn get(&self, user: UserId) -> Result<Option<Vec<TrackId>>> {
        match self.store.get(&user_key(user)).await? {
            Some(bytes) => decode_candidates(&bytes).map(Some),
            None => Ok(None),
        }
    }
}
