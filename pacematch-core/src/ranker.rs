//! Relevance ranking of runs for a seeker's location and pace.
//!
//! # Examples
//! ```
//! use pacematch_core::{
//!     AvailabilityLevel, DayOfWeek, PaceGroups, PaceRange, Run, SeekerQuery, Terrain, rank,
//! };
//!
//! let template = Run {
//!     id: 0,
//!     name: "Fixture run".into(),
//!     day_of_week: DayOfWeek::Saturday,
//!     start_time: "7:00 AM".into(),
//!     location_name: "Trailhead".into(),
//!     latitude: 39.0840,
//!     longitude: -77.1528,
//!     typical_distances: "5 miles".into(),
//!     terrain: Terrain::Road,
//!     pace_groups: PaceGroups::uniform(AvailabilityLevel::Rarely),
//!     contact_name: None,
//!     contact_email: None,
//!     contact_phone: None,
//!     notes: None,
//!     is_active: true,
//! };
//! let runs = vec![
//!     Run { id: 1, ..template.clone() },
//!     Run {
//!         id: 2,
//!         pace_groups: PaceGroups::uniform(AvailabilityLevel::Consistently),
//!         ..template
//!     },
//! ];
//! let query = SeekerQuery {
//!     latitude: 39.0840,
//!     longitude: -77.1528,
//!     pace_range: PaceRange::NineToTen,
//! };
//!
//! let ranked = rank(&runs, &query);
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked.first().map(|r| r.run.id), Some(2));
//! ```

use geo::Coord;
use thiserror::Error;

use crate::distance::haversine_miles;
use crate::pace::{AvailabilityLevel, PaceRange};
use crate::run::Run;
use crate::scoring::relevance_score;

/// A seeker's position and desired pace bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeekerQuery {
    /// Seeker latitude in degrees, valid range [-90, 90].
    pub latitude: f64,
    /// Seeker longitude in degrees, valid range [-180, 180].
    pub longitude: f64,
    /// Pace bucket to read from each run's availability map.
    pub pace_range: PaceRange,
}

impl SeekerQuery {
    /// The seeker's position as a coordinate (x = longitude, y = latitude).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Check the boundary invariants on this query.
    ///
    /// [`rank`] assumes a validated query; callers run this when the query
    /// crosses into the engine.
    ///
    /// # Errors
    /// Returns the violated constraint for a coordinate outside its
    /// documented range. Non-finite coordinates fail the range checks.
    pub fn validate(&self) -> Result<(), SeekerQueryValidationError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SeekerQueryValidationError::LatitudeOutOfRange {
                latitude: self.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SeekerQueryValidationError::LongitudeOutOfRange {
                longitude: self.longitude,
            });
        }
        Ok(())
    }
}

/// Violations reported by [`SeekerQuery::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeekerQueryValidationError {
    /// Latitude is outside [-90, 90] or not finite.
    #[error("latitude {latitude} is outside the valid range -90..=90")]
    LatitudeOutOfRange {
        /// The rejected latitude in degrees.
        latitude: f64,
    },
    /// Longitude is outside [-180, 180] or not finite.
    #[error("longitude {longitude} is outside the valid range -180..=180")]
    LongitudeOutOfRange {
        /// The rejected longitude in degrees.
        longitude: f64,
    },
}

/// One run annotated with how well it matches a seeker query.
///
/// Borrows the run it describes; nothing is copied or mutated. Results are
/// produced fresh by each [`rank`] call and do not outlive the input list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedRun<'a> {
    /// The matched run.
    pub run: &'a Run,
    /// Weighted blend of pace match and proximity, in (0, 1].
    pub relevance_score: f64,
    /// Great-circle distance from the seeker in statute miles.
    pub distance_miles: f64,
    /// Availability level found under the queried pace bucket.
    pub pace_match: AvailabilityLevel,
}

/// Rank `runs` by relevance to `query`, most relevant first.
///
/// Every input run appears exactly once in the output, annotated with its
/// relevance score, distance from the seeker, and the availability level
/// matched under the queried pace bucket. An empty input yields an empty
/// output.
///
/// Pure and synchronous: no I/O, no mutation of the input, safe to invoke
/// concurrently.
#[must_use]
pub fn rank<'a>(runs: &'a [Run], query: &SeekerQuery) -> Vec<RankedRun<'a>> {
    let origin = query.location();
    let mut ranked: Vec<RankedRun<'a>> = runs
        .iter()
        .map(|run| {
            let distance_miles = haversine_miles(origin, run.location());
            let pace_match = run.pace_groups.availability(query.pace_range);
            RankedRun {
                run,
                relevance_score: relevance_score(pace_match, distance_miles),
                distance_miles,
                pace_match,
            }
        })
        .collect();
    // Stable sort: runs with equal scores keep their input order instead of
    // acquiring an invented secondary tie-break key.
    ranked.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    ranked
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]
mod tests {
    use super::*;
    use crate::run::PaceGroups;
    use crate::test_support::run_at;
    use rstest::rstest;

    const HOME: (f64, f64) = (39.14, -77.15);

    fn query(pace_range: PaceRange) -> SeekerQuery {
        SeekerQuery {
            latitude: HOME.0,
            longitude: HOME.1,
            pace_range,
        }
    }

    #[rstest]
    fn empty_input_yields_empty_output() {
        assert!(rank(&[], &query(PaceRange::Sub8)).is_empty());
    }

    #[rstest]
    fn a_perfect_match_at_the_seeker_location_scores_one() {
        let runs = vec![run_at(1, HOME.0, HOME.1, AvailabilityLevel::Consistently)];

        let ranked = rank(&runs, &query(PaceRange::EightToNine));

        let top = ranked.first().expect("one ranked result");
        assert_eq!(top.relevance_score, 1.0);
        assert_eq!(top.distance_miles, 0.0);
        assert_eq!(top.pace_match, AvailabilityLevel::Consistently);
    }

    #[rstest]
    fn equal_scores_keep_their_input_order() {
        let runs = vec![
            run_at(11, HOME.0, HOME.1, AvailabilityLevel::Sometimes),
            run_at(12, HOME.0, HOME.1, AvailabilityLevel::Sometimes),
            run_at(13, HOME.0, HOME.1, AvailabilityLevel::Consistently),
        ];

        let ranked = rank(&runs, &query(PaceRange::TenPlus));

        let ids: Vec<u64> = ranked.iter().map(|r| r.run.id).collect();
        assert_eq!(ids, vec![13, 11, 12]);
    }

    #[rstest]
    fn the_queried_bucket_determines_the_pace_match() {
        let run = Run {
            pace_groups: PaceGroups {
                sub_eight: AvailabilityLevel::Rarely,
                eight_to_nine: AvailabilityLevel::Sometimes,
                nine_to_ten: AvailabilityLevel::Frequently,
                ten_plus: AvailabilityLevel::Consistently,
            },
            ..run_at(1, HOME.0, HOME.1, AvailabilityLevel::Rarely)
        };
        let runs = vec![run];

        let ranked = rank(&runs, &query(PaceRange::NineToTen));

        let top = ranked.first().expect("one ranked result");
        assert_eq!(top.pace_match, AvailabilityLevel::Frequently);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn ranked_results_serialise_with_the_embedded_run() {
        let runs = vec![run_at(5, HOME.0, HOME.1, AvailabilityLevel::Frequently)];

        let ranked = rank(&runs, &query(PaceRange::Sub8));

        let payload = serde_json::to_string(&ranked).expect("serialize ranked results");
        assert!(payload.contains("\"relevance_score\""));
        assert!(payload.contains("\"distance_miles\""));
        assert!(payload.contains("\"pace_match\":\"frequently\""));
        assert!(payload.contains("\"name\":\"Run 5\""));
    }
}
