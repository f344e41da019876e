//! Next-track recommenders
//!
//! Every strategy implements [`RecommenderStrategy`] and owns the strategy it
//! falls back to. From the richest tier down:
//!
//! ```text
//! UltraPower ──> Indexed ──> TopPop
//!      └────────> Random
//! ```
//!
//! | Tier         | Picks from                          | Falls back when                     |
//! |--------------|-------------------------------------|-------------------------------------|
//! | `UltraPower` | previous track's similarity list    | track unknown, low listen-through, empty list |
//! | `Indexed`    | user's precomputed candidate list   | user has no list                    |
//! | `TopPop`     | top-N popular tracks                | never                               |
//! | `Random`     | whole catalog                       | never                               |
//!
//! Missing data always moves to a strictly lower tier, so a call returns
//! within four hops. Store failures are not missing data: they propagate.

mod indexed;
mod random;
mod toppop;
mod ultra_power;

pub use indexed::Indexed;
pub use random::Random;
pub use toppop::TopPop;
pub use ultra_power::UltraPower;

use rand::seq::SliceRandom;
use rand::Rng;
use std::future::Future;

use crate::{Result, TrackId, UserId};

/// Common contract of all recommendation policies.
///
/// Implementations hold no mutable state between calls, so one instance can
/// serve any number of concurrent requests.
pub trait RecommenderStrategy: Send + Sync {
    /// Recommend the track to play after `prev_track`.
    ///
    /// # Arguments
    ///
    /// * `user` - Listener id
    /// * `prev_track` - Track the user just finished or skipped
    /// * `prev_track_time` - Fraction of `prev_track` played, in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Only genuine failures of the backing stores (or undecodable blobs);
    /// absent data is handled by falling back.
    fn recommend_next(
        &self,
        user: UserId,
        prev_track: TrackId,
        prev_track_time: f64,
    ) -> impl Future<Output = Result<TrackId>> + Send;
}

/// Uniformly pick one candidate, or `None` if there are none.
///
/// Draws a single index from the thread-local generator; the generator is
/// released before returning so callers' futures stay `Send`.
#[must_use]
pub fn choose_uniform(candidates: &[TrackId]) -> Option<TrackId> {
    candidates.choose(&mut rand::thread_rng()).copied()
}

/// One Bernoulli trial with success probability `p` (clamped to `[0, 1]`,
/// NaN never succeeds).
#[must_use]
pub fn bernoulli(p: f64) -> bool {
    if p.is_nan() {
        return false;
    }
    rand::thread_rng().gen_bool(p.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_uniform_empty() {
        assert_eq!(choose_uniform(&[]), None);
    }

    #[test]
    fn test_choose_uniform_single() {
        assert_eq!(choose_uniform(&[7]), Some(7));
    }

    #[test]
    fn test_choose_uniform_frequencies() {
        let candidates = [10, 20, 30];
        let mut counts = [0usize; 3];
        let draws = 30_000;

        for _ in 0..draws {
            let pick = choose_uniform(&candidates).unwrap();
            let idx = candidates.iter().position(|&c| c == pick).unwrap();
            counts[idx] += 1;
        }

        for count in counts {
            let freq = count as f64 / draws as f64;
            assert!((freq - 1.0 / 3.0).abs() < 0.02, "frequency {freq}");
        }
    }

    #[test]
    fn test_bernoulli_edges() {
        for _ in 0..1_000 {
            assert!(!bernoulli(0.0));
            assert!(bernoulli(1.0));
        }
    }

    #[test]
    fn test_bernoulli_rate() {
        let hits = (0..20_000).filter(|_| bernoulli(0.05)).count();
        let rate = hits as f64 / 20_000.0;
        assert!((rate - 0.05).abs() < 0.01, "rate {rate}");
    }
}
