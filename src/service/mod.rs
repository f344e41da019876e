//! Serving glue: experiment assignment in front of the recommenders
//!
//! [`NextTrackService`] is what a request handler calls. It assigns the user
//! within the active experiment, dispatches to the strategy bound to that
//! treatment and records the outcome. Transport, request parsing and event
//! persistence live outside this crate.

mod events;

pub use events::{Datum, EventKind, EventSink, MemoryEventSink, TracingEventSink};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::experiment::{ExperimentRegistry, Treatment};
use crate::recommenders::RecommenderStrategy;
use crate::{Error, Result, TrackId, UserId};

/// Response of a `next` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTrack {
    /// Listener id
    pub user: UserId,
    /// Recommended track
    pub track: TrackId,
}

/// Binds the two treatments of one experiment to two strategies.
///
/// `C` serves [`Treatment::Control`], `T` serves [`Treatment::Treatment1`].
#[derive(Debug)]
pub struct NextTrackService<C, T, E> {
    registry: Arc<ExperimentRegistry>,
    experiment: String,
    control: C,
    treatment: T,
    sink: E,
}

impl<C, T, E> NextTrackService<C, T, E>
where
    C: RecommenderStrategy,
    T: RecommenderStrategy,
    E: EventSink,
{
    /// Create the service.
    ///
    /// # Errors
    ///
    /// Returns `UnknownExperiment` if `experiment` is not in `registry`.
    pub fn new(
        registry: Arc<ExperimentRegistry>,
        experiment: impl Into<String>,
        control: C,
        treatment: T,
        sink: E,
    ) -> Result<Self> {
        let experiment = experiment.into();
        if registry.get(&experiment).is_none() {
            return Err(Error::UnknownExperiment(experiment));
        }

        Ok(Self {
            registry,
            experiment,
            control,
            treatment,
            sink,
        })
    }

    /// Name of the experiment that routes users.
    #[must_use]
    pub fn experiment(&self) -> &str {
        &self.experiment
    }

    /// The event sink.
    pub const fn sink(&self) -> &E {
        &self.sink
    }

    /// Recommend the next track for `user` and record the event.
    ///
    /// # Errors
    ///
    /// Propagates store failures from the selected strategy; nothing is
    /// recorded for a failed call.
    pub async fn next(&self, user: UserId, track: TrackId, time: f64) -> Result<NextTrack> {
        let start = Instant::now();
        let treatment = self.registry.assign(&self.experiment, user)?;

        let recommendation = match treatment {
            Treatment::Control => self.control.recommend_next(user, track, time).await?,
            Treatment::Treatment1 => self.treatment.recommend_next(user, track, time).await?,
        };

        self.sink.log(Datum::next(
            user,
            track,
            time,
            start.elapsed().as_secs_f64(),
            recommendation,
            treatment,
        ));

        Ok(NextTrack {
            user,
            track: recommendation,
        })
    }

    /// Record the end of a session.
    pub fn last(&self, user: UserId, track: TrackId, time: f64) {
        let start = Instant::now();
        self.sink
            .log(Datum::last(user, track, time, start.elapsed().as_secs_f64()));
    }
}
