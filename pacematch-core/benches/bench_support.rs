//! Benchmark support utilities for the ranking engine.
//!
//! Provides deterministic run generation with clustered geographic
//! distributions for reproducible benchmarks.

use pacematch_core::{AvailabilityLevel, DayOfWeek, PaceGroups, Run, Terrain};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Availability levels to cycle through when filling pace maps.
const LEVELS: [AvailabilityLevel; 4] = [
    AvailabilityLevel::Consistently,
    AvailabilityLevel::Frequently,
    AvailabilityLevel::Sometimes,
    AvailabilityLevel::Rarely,
];

/// Number of cluster centres for run distribution.
const CLUSTER_COUNT: usize = 5;

/// Standard deviation for run distribution around cluster centres (degrees).
/// Approximately 0.05 degrees ~ 3.5 miles at this latitude.
const CLUSTER_SPREAD: f64 = 0.05;

/// Span of the cluster centre distribution (degrees).
/// 0.5 degrees ~ 35 miles north to south.
const AREA_SPAN: f64 = 0.5;

/// South-west corner of the benchmark area (latitude).
const AREA_ORIGIN_LATITUDE: f64 = 39.0;

/// South-west corner of the benchmark area (longitude).
const AREA_ORIGIN_LONGITUDE: f64 = -77.5;

/// Generate a clustered run distribution for benchmarks.
///
/// Creates `count` runs spread across multiple neighbourhood clusters, each
/// with a Gaussian jitter around the cluster centre. Uses a deterministic
/// seeded RNG for reproducibility.
#[must_use]
pub fn generate_clustered_runs(count: usize, seed: u64) -> Vec<Run> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // Generate cluster centres deterministically.
    #[expect(clippy::float_arithmetic, reason = "Required for coordinate offset")]
    let cluster_centres: Vec<(f64, f64)> = (0..CLUSTER_COUNT)
        .map(|_| {
            (
                AREA_ORIGIN_LATITUDE + rng.gen_range(0.0..AREA_SPAN),
                AREA_ORIGIN_LONGITUDE + rng.gen_range(0.0..AREA_SPAN),
            )
        })
        .collect();

    (0..count)
        .map(|i| {
            // Assign to a cluster using round-robin.
            #[expect(
                clippy::integer_division_remainder_used,
                reason = "Modulo for cyclic assignment is intentional"
            )]
            let cluster_idx = i % CLUSTER_COUNT;
            let (centre_latitude, centre_longitude) = cluster_centres
                .get(cluster_idx)
                .copied()
                .unwrap_or((AREA_ORIGIN_LATITUDE, AREA_ORIGIN_LONGITUDE));

            // Jitter the position around the cluster centre.
            #[expect(clippy::float_arithmetic, reason = "Required for coordinate offset")]
            let latitude = centre_latitude + CLUSTER_SPREAD * rng.sample::<f64, _>(StandardNormal);
            #[expect(clippy::float_arithmetic, reason = "Required for coordinate offset")]
            let longitude = centre_longitude + CLUSTER_SPREAD * rng.sample::<f64, _>(StandardNormal);

            // Assign availability cyclically.
            #[expect(
                clippy::integer_division_remainder_used,
                reason = "Modulo for cyclic availability assignment is intentional"
            )]
            let level_idx = i % LEVELS.len();
            let level = LEVELS
                .get(level_idx)
                .copied()
                .unwrap_or(AvailabilityLevel::Sometimes);

            #[expect(clippy::as_conversions, reason = "Safe conversion for small indices")]
            let id = (i + 1) as u64;

            Run {
                id,
                name: format!("Benchmark run {id}"),
                day_of_week: DayOfWeek::Saturday,
                start_time: "7:00 AM".into(),
                location_name: format!("Cluster {cluster_idx} trailhead"),
                latitude,
                longitude,
                typical_distances: "5 miles".into(),
                terrain: Terrain::Road,
                pace_groups: PaceGroups::uniform(level),
                contact_name: None,
                contact_email: None,
                contact_phone: None,
                notes: None,
                is_active: true,
            }
        })
        .collect()
}
