//! A/B Experiment Bucketing
//!
//! Deterministic mapping of user ids onto experiment treatments.
//!
//! ## Overview
//!
//! ```text
//! name ──murmur3(seed 0)──> seed
//! user ──decimal──murmur3(seed)──> hash ── mod split ──> bucket ──> Treatment
//! ```
//!
//! - **Determinism**: no hidden state, so `(name, user)` always maps to the
//!   same treatment, in this process and the next.
//! - **Independence**: each experiment hashes with its own seed, so two
//!   experiments bucket the same user population independently.
//! - **Uniformity**: every bucket receives about `1 / split` of any large
//!   user population.
//!
//! ## Usage
//!
//! ```rust
//! use botify_core::experiment::{ExperimentRegistry, Treatment, ULTRA_POWER};
//!
//! let registry = ExperimentRegistry::standard()?;
//! let treatment = registry.assign(ULTRA_POWER, 1001)?;
//! assert!(Treatment::ALL.contains(&treatment));
//! # Ok::<(), botify_core::Error>(())
//! ```

mod bucketing;
mod murmur;
mod registry;
mod treatment;

pub use bucketing::{bucket, Experiment, ExperimentConfig};
pub use murmur::murmur3_32;
pub use registry::{ExperimentRegistry, CONTEXTUAL, ULTRA_POWER};
pub use treatment::{Split, Treatment};
