//! A/B Simulation Demo
//!
//! Seeds in-memory stores with a synthetic catalog, then replays listening
//! sessions through the `ULTRA_POWER` experiment: control users get the
//! `Indexed` recommender, treatment users get `UltraPower`.
//!
//! Run with: `RUST_LOG=botify_core=debug cargo run --example ab_simulation`

use std::collections::HashMap;
use std::sync::Arc;

use botify_core::catalog::codec::{encode_candidates, encode_track};
use botify_core::catalog::{Catalog, Track};
use botify_core::config::ServiceConfig;
use botify_core::experiment::Treatment;
use botify_core::kv::MemoryKvStore;
use botify_core::recommenders::{Indexed, TopPop, UltraPower};
use botify_core::service::{MemoryEventSink, NextTrackService};

const TRACKS: u64 = 2_000;
const USERS: u64 = 500;
const SESSION_LENGTH: usize = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    botify_core::telemetry::init("botify_core=info");
    println!("=== botify A/B Simulation ===\n");

    // -------------------------------------------------------------------------
    // 1. Configuration and experiments
    // -------------------------------------------------------------------------
    println!("1. Loading configuration...");
    let config = ServiceConfig::default();
    let registry = Arc::new(config.registry()?);
    for name in registry.names() {
        if let Some(experiment) = registry.get(name) {
            println!("   {experiment}");
        }
    }

    // -------------------------------------------------------------------------
    // 2. Seed the stores (normally an offline job)
    // -------------------------------------------------------------------------
    println!("\n2. Seeding stores...");
    let tracks = Arc::new(MemoryKvStore::with_capacity(TRACKS as usize));
    let mut catalog_tracks = Vec::with_capacity(TRACKS as usize);
    for id in 0..TRACKS {
        let similar = (1..=10).map(|step| (id + step * 7) % TRACKS).collect();
        let track = Track::new(id, format!("Artist {}", id % 50), format!("Track {id}"), similar);
        tracks.insert(id.to_string(), encode_track(&track)?);
        catalog_tracks.push(track);
    }

    // Only every third user has personalized candidates
    let users = Arc::new(MemoryKvStore::new());
    for user in (0..USERS).step_by(3) {
        let candidates: Vec<u64> = (0..25).map(|i| (user * 13 + i * 31) % TRACKS).collect();
        users.insert(user.to_string(), encode_candidates(&candidates)?);
    }

    let popularity = (0..TRACKS).rev().collect();
    let catalog = Catalog::from_tracks(&catalog_tracks, popularity)?;
    println!("   {} tracks, {} users with candidates", catalog.len(), users.len());

    // -------------------------------------------------------------------------
    // 3. Bind treatments to strategies
    // -------------------------------------------------------------------------
    let control = Indexed::new(
        Arc::clone(&users),
        TopPop::from_catalog(&catalog, config.recommender.top_tracks_limit)?,
    );
    let treatment = UltraPower::new(tracks, users, &catalog, &config.recommender)?;
    let service = NextTrackService::new(
        registry,
        config.active_experiment.clone(),
        control,
        treatment,
        MemoryEventSink::new(),
    )?;

    // -------------------------------------------------------------------------
    // 4. Replay sessions
    // -------------------------------------------------------------------------
    println!("\n3. Replaying {USERS} sessions of {SESSION_LENGTH} tracks...");
    for user in 0..USERS {
        let mut track = user % TRACKS;
        for step in 0..SESSION_LENGTH {
            // Deterministic listen-through pattern: mostly full listens, some skips
            let time = if (user + step as u64) % 4 == 0 { 0.3 } else { 0.95 };
            track = service.next(user, track, time).await?.track;
        }
        service.last(user, track, 1.0);
    }

    // -------------------------------------------------------------------------
    // 5. Summarize
    // -------------------------------------------------------------------------
    println!("\n4. Results");
    let events = service.sink().events();
    let mut per_treatment: HashMap<Treatment, (usize, f64)> = HashMap::new();
    for datum in events.iter().filter(|d| d.treatment.is_some()) {
        if let Some(treatment) = datum.treatment {
            let entry = per_treatment.entry(treatment).or_default();
            entry.0 += 1;
            entry.1 += datum.latency;
        }
    }

    for treatment in Treatment::ALL {
        let (count, latency) = per_treatment.get(&treatment).copied().unwrap_or_default();
        let mean_us = if count == 0 {
            0.0
        } else {
            latency / count as f64 * 1e6
        };
        println!("   {treatment}: {count} recommendations, mean latency {mean_us:.1}us");
    }
    println!("   {} events recorded", events.len());

    println!("\nSimulation completed successfully!");
    Ok(())
}
