//! # botify-core: A/B bucketing and next-track recommendation
//!
//! Two pieces of a music recommendation service:
//!
//! - **Experiments**: deterministic, hash-based assignment of users to
//!   treatments, reproducible across calls and restarts.
//! - **Recommenders**: a fallback cascade of strategies that trades
//!   personalization precision for robustness, from content similarity
//!   gated by listen-through down to a uniform pick over the catalog.
//!
//! ## Design Principles
//!
//! - **Determinism**: assignment depends only on `(experiment name, user)`
//! - **Totality**: missing data falls back to a lower tier, so every call
//!   returns a track unless a store genuinely fails
//! - **Fail fast**: invalid experiment splits and tuning values are rejected
//!   at construction, before any traffic is served
//! - **No shared mutable state**: strategies are immutable; randomness is
//!   drawn per call from the thread-local generator
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use botify_core::catalog::Catalog;
//! use botify_core::config::RecommenderConfig;
//! use botify_core::experiment::{ExperimentRegistry, Treatment, ULTRA_POWER};
//! use botify_core::kv::MemoryKvStore;
//! use botify_core::recommenders::{RecommenderStrategy, UltraPower};
//!
//! # async fn example() -> botify_core::Result<()> {
//! let registry = ExperimentRegistry::standard()?;
//! let catalog = Catalog::new((0..1000).collect(), (0..100).collect())?;
//! let ultra = UltraPower::new(
//!     MemoryKvStore::new(),
//!     MemoryKvStore::new(),
//!     &catalog,
//!     &RecommenderConfig::default(),
//! )?;
//!
//! if registry.assign(ULTRA_POWER, 1001)? == Treatment::Treatment1 {
//!     let next = ultra.recommend_next(1001, 42, 0.93).await?;
//!     println!("next track: {next}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod experiment;
pub mod kv;
pub mod recommenders;
pub mod service;
pub mod telemetry;

pub use error::{Error, Result};

/// Track identifier
pub type TrackId = u64;

/// User identifier
pub type UserId = u64;
