//! Served-event records and sinks
//!
//! Every `next`/`last` call produces one [`Datum`]. Where the records end up
//! (files, a log pipeline) is the sink's business; nothing here persists them.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

use crate::experiment::Treatment;
use crate::{TrackId, UserId};

/// Which endpoint produced the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A next-track recommendation was served
    Next,
    /// The session ended with the given track
    Last,
}

/// One served event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    /// Endpoint
    pub kind: EventKind,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Listener id
    pub user: UserId,
    /// Track the user just played
    pub track: TrackId,
    /// Listen-through fraction of `track`
    pub time: f64,
    /// Seconds spent serving the call
    pub latency: f64,
    /// Recommended track (`next` only)
    pub recommendation: Option<TrackId>,
    /// Treatment of the user in the active experiment (`next` only)
    pub treatment: Option<Treatment>,
}

impl Datum {
    /// Record for a `next` call.
    #[must_use]
    pub fn next(
        user: UserId,
        track: TrackId,
        time: f64,
        latency: f64,
        recommendation: TrackId,
        treatment: Treatment,
    ) -> Self {
        Self {
            kind: EventKind::Next,
            timestamp: Utc::now().timestamp_millis(),
            user,
            track,
            time,
            latency,
            recommendation: Some(recommendation),
            treatment: Some(treatment),
        }
    }

    /// Record for a `last` call.
    #[must_use]
    pub fn last(user: UserId, track: TrackId, time: f64, latency: f64) -> Self {
        Self {
            kind: EventKind::Last,
            timestamp: Utc::now().timestamp_millis(),
            user,
            track,
            time,
            latency,
            recommendation: None,
            treatment: None,
        }
    }
}

/// Destination of served events.
pub trait EventSink: Send + Sync {
    /// Record one event. Must not block the request path for long.
    fn log(&self, datum: Datum);
}

/// Emits each event as a structured `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn log(&self, datum: Datum) {
        tracing::info!(
            target: "botify::events",
            kind = ?datum.kind,
            timestamp = datum.timestamp,
            user = datum.user,
            track = datum.track,
            time = datum.time,
            latency = datum.latency,
            recommendation = ?datum.recommendation,
            treatment = ?datum.treatment,
            "served"
        );
    }
}

/// Buffers events in memory (tests, offline simulations).
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<Datum>>,
}

impl MemoryEventSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything logged so far.
    #[must_use]
    pub fn events(&self) -> Vec<Datum> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of events logged so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing was logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemoryEventSink {
    fn log(&self, datum: Datum) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(datum);
    }
}
