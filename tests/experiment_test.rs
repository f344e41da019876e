//! Bucketing quality tests: determinism, uniformity, independence
//!
//! Populations are 100,000 sequential user ids, the worst realistic case for
//! a weak hash.

use botify_core::experiment::{
    bucket, murmur3_32, Experiment, ExperimentRegistry, Split, Treatment, CONTEXTUAL, ULTRA_POWER,
};

const POPULATION: u64 = 100_000;

fn bucket_counts(name: &str, split: Split) -> Vec<u64> {
    let seed = murmur3_32(name.as_bytes(), 0);
    let mut counts = vec![0u64; split.cardinality() as usize];
    for user in 0..POPULATION {
        counts[bucket(seed, user, split) as usize] += 1;
    }
    counts
}

/// Pearson chi-square statistic of a contingency table.
fn chi_square(table: &[Vec<u64>]) -> f64 {
    let total: u64 = table.iter().flatten().sum();
    let rows: Vec<u64> = table.iter().map(|r| r.iter().sum()).collect();
    let cols: Vec<u64> = (0..table[0].len())
        .map(|j| table.iter().map(|r| r[j]).sum())
        .collect();

    let mut chi = 0.0;
    for (i, row) in table.iter().enumerate() {
        for (j, &observed) in row.iter().enumerate() {
            let expected = rows[i] as f64 * cols[j] as f64 / total as f64;
            chi += (observed as f64 - expected).powi(2) / expected;
        }
    }
    chi
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_assignment_is_deterministic() {
    let experiment = Experiment::new(ULTRA_POWER, Split::HalfHalf).unwrap();
    let first: Vec<Treatment> = (0..10_000).map(|u| experiment.assign(u)).collect();
    let second: Vec<Treatment> = (0..10_000).map(|u| experiment.assign(u)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_assignment_survives_restart() {
    // Golden assignments: a rebuilt registry must reproduce them exactly
    let registry = ExperimentRegistry::standard().unwrap();
    let golden = [
        (0, Treatment::Treatment1),
        (1, Treatment::Treatment1),
        (4, Treatment::Control),
        (5, Treatment::Control),
        (6, Treatment::Treatment1),
        (7, Treatment::Control),
        (17, Treatment::Control),
        (18, Treatment::Treatment1),
    ];

    for (user, expected) in golden {
        assert_eq!(registry.assign(ULTRA_POWER, user).unwrap(), expected, "user {user}");
    }
}

// =============================================================================
// Uniformity
// =============================================================================

#[test]
fn test_distribution_within_two_percent() {
    for split in [Split::HalfHalf, Split::FourWay, Split::FiveWay, Split::SevenWay] {
        let counts = bucket_counts(ULTRA_POWER, split);
        let expected = 1.0 / f64::from(split.cardinality());

        for (i, count) in counts.iter().enumerate() {
            let share = *count as f64 / POPULATION as f64;
            assert!(
                (share - expected).abs() <= 0.02,
                "{split}: bucket {i} has share {share:.4}, expected {expected:.4}"
            );
        }
    }
}

#[test]
fn test_treatment_distribution_half_half() {
    let experiment = Experiment::new(CONTEXTUAL, Split::HalfHalf).unwrap();
    let control = (0..POPULATION)
        .filter(|&u| experiment.assign(u) == Treatment::Control)
        .count();

    let share = control as f64 / POPULATION as f64;
    assert!((share - 0.5).abs() <= 0.02, "control share {share:.4}");
}

// =============================================================================
// Independence
// =============================================================================

#[test]
fn test_experiments_are_independent_half_half() {
    let a = Experiment::new(ULTRA_POWER, Split::HalfHalf).unwrap();
    let b = Experiment::new(CONTEXTUAL, Split::HalfHalf).unwrap();

    let mut table = vec![vec![0u64; 2]; 2];
    for user in 0..POPULATION {
        let i = usize::from(a.assign(user) == Treatment::Treatment1);
        let j = usize::from(b.assign(user) == Treatment::Treatment1);
        table[i][j] += 1;
    }

    // 1 degree of freedom, 5% significance
    let chi = chi_square(&table);
    assert!(chi < 3.841, "chi-square {chi:.3} indicates correlation");
}

#[test]
fn test_experiments_are_independent_four_way() {
    let seed_a = murmur3_32(ULTRA_POWER.as_bytes(), 0);
    let seed_b = murmur3_32(CONTEXTUAL.as_bytes(), 0);

    let mut table = vec![vec![0u64; 4]; 4];
    for user in 0..POPULATION {
        let i = bucket(seed_a, user, Split::FourWay) as usize;
        let j = bucket(seed_b, user, Split::FourWay) as usize;
        table[i][j] += 1;
    }

    // 9 degrees of freedom, 5% significance
    let chi = chi_square(&table);
    assert!(chi < 16.919, "chi-square {chi:.3} indicates correlation");
}

#[test]
fn test_similar_names_get_different_seeds() {
    let a = Experiment::new("EXP_1", Split::HalfHalf).unwrap();
    let b = Experiment::new("EXP_2", Split::HalfHalf).unwrap();
    assert_ne!(a.seed(), b.seed());

    // Roughly half the users should land in different treatments
    let differing = (0..10_000u64)
        .filter(|&u| a.assign(u) != b.assign(u))
        .count();
    assert!((4_000..6_000).contains(&differing), "{differing} users differ");
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn test_wide_splits_fail_at_construction() {
    for split in [Split::FourWay, Split::FiveWay, Split::SevenWay] {
        assert!(Experiment::new("WIDE", split).is_err());
    }
}
