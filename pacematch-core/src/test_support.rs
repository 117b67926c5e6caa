//! Test fixtures shared by this crate's unit tests and by dependent crates.
//!
//! Available to this crate's own tests unconditionally and to consumers via
//! the `test-support` feature.

use crate::pace::AvailabilityLevel;
use crate::run::{DayOfWeek, PaceGroups, Run, Terrain};

/// Build a valid, active run at the given position with the same
/// availability level in every pace bucket.
///
/// The descriptive fields carry fixed fixture values; tests that care about
/// a specific field override it with struct update syntax.
///
/// # Examples
/// ```
/// use pacematch_core::test_support::run_at;
/// use pacematch_core::{AvailabilityLevel, PaceGroups, Run};
///
/// let run = Run {
///     pace_groups: PaceGroups::uniform(AvailabilityLevel::Rarely),
///     ..run_at(1, 39.14, -77.15, AvailabilityLevel::Consistently)
/// };
/// assert!(run.validate().is_ok());
/// ```
#[must_use]
pub fn run_at(id: u64, latitude: f64, longitude: f64, level: AvailabilityLevel) -> Run {
    Run {
        id,
        name: format!("Run {id}"),
        day_of_week: DayOfWeek::Tuesday,
        start_time: "6:30 AM".into(),
        location_name: "Fixture trailhead".into(),
        latitude,
        longitude,
        typical_distances: "4 miles".into(),
        terrain: Terrain::Road,
        pace_groups: PaceGroups::uniform(level),
        contact_name: None,
        contact_email: None,
        contact_phone: None,
        notes: None,
        is_active: true,
    }
}
