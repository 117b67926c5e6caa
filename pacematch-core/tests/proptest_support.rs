//! Proptest strategies for ranking property-based tests.
//!
//! The strategies generate well-formed inputs (coordinates inside their
//! documented ranges, complete pace-availability maps, unique run ids) so
//! the properties exercise the ranking invariants rather than boundary
//! validation.

use geo::Coord;
use pacematch_core::{AvailabilityLevel, DayOfWeek, PaceGroups, PaceRange, Run, Terrain};
use proptest::prelude::*;

/// Strategy for a latitude inside the documented [-90, 90] range.
pub fn latitude_strategy() -> impl Strategy<Value = f64> {
    -90.0_f64..=90.0_f64
}

/// Strategy for a longitude inside the documented [-180, 180] range.
pub fn longitude_strategy() -> impl Strategy<Value = f64> {
    -180.0_f64..=180.0_f64
}

/// Strategy for a coordinate with x = longitude and y = latitude.
pub fn coordinate_strategy() -> impl Strategy<Value = Coord<f64>> {
    (longitude_strategy(), latitude_strategy()).prop_map(|(x, y)| Coord { x, y })
}

/// Strategy for one of the four availability levels.
pub fn availability_strategy() -> impl Strategy<Value = AvailabilityLevel> {
    prop_oneof![
        Just(AvailabilityLevel::Consistently),
        Just(AvailabilityLevel::Frequently),
        Just(AvailabilityLevel::Sometimes),
        Just(AvailabilityLevel::Rarely),
    ]
}

/// Strategy for one of the four pace buckets.
pub fn pace_range_strategy() -> impl Strategy<Value = PaceRange> {
    prop_oneof![
        Just(PaceRange::Sub8),
        Just(PaceRange::EightToNine),
        Just(PaceRange::NineToTen),
        Just(PaceRange::TenPlus),
    ]
}

/// Strategy for a complete pace-availability map.
pub fn pace_groups_strategy() -> impl Strategy<Value = PaceGroups> {
    (
        availability_strategy(),
        availability_strategy(),
        availability_strategy(),
        availability_strategy(),
    )
        .prop_map(
            |(sub_eight, eight_to_nine, nine_to_ten, ten_plus)| PaceGroups {
                sub_eight,
                eight_to_nine,
                nine_to_ten,
                ten_plus,
            },
        )
}

/// Strategy for a set of valid runs with unique ids.
///
/// The count ranges from `min_count` to `max_count`; positions and
/// availability maps vary freely inside their documented domains.
pub fn run_set_strategy(min_count: usize, max_count: usize) -> impl Strategy<Value = Vec<Run>> {
    proptest::collection::vec(
        (latitude_strategy(), longitude_strategy(), pace_groups_strategy()),
        min_count..=max_count,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(idx, (latitude, longitude, pace_groups))| {
                #[expect(
                    clippy::arithmetic_side_effects,
                    reason = "index + 1 cannot overflow for reasonable test sizes"
                )]
                let id = (idx + 1) as u64;
                run_record(id, latitude, longitude, pace_groups)
            })
            .collect()
    })
}

/// Construct a valid run record for property tests.
#[must_use]
pub fn run_record(id: u64, latitude: f64, longitude: f64, pace_groups: PaceGroups) -> Run {
    Run {
        id,
        name: format!("Run {id}"),
        day_of_week: DayOfWeek::Wednesday,
        start_time: "6:00 PM".into(),
        location_name: "Property trailhead".into(),
        latitude,
        longitude,
        typical_distances: "3 miles".into(),
        terrain: Terrain::Trail,
        pace_groups,
        contact_name: None,
        contact_email: None,
        contact_phone: None,
        notes: None,
        is_active: true,
    }
}
