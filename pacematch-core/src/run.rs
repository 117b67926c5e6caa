//! Group-run records consumed by the ranking engine.
//!
//! The ranker reads only a run's position and pace-availability map; the
//! remaining fields describe the listing and pass through untouched. The
//! pace-availability map is a fixed-field struct, so the "all four buckets
//! present" invariant holds at compile time and lookups are total.

use geo::Coord;
use thiserror::Error;

use crate::pace::{AvailabilityLevel, PaceRange};

/// Day of the week a run takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayOfWeek {
    /// Return the day's name as a `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Surface a run takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Paved roads and pavements.
    Road,
    /// Unpaved trails.
    Trail,
    /// A mixture of road and trail.
    Mixed,
}

impl Terrain {
    /// Return the terrain as a `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Road => "Road",
            Self::Trail => "Trail",
            Self::Mixed => "Mixed",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability of each pace bucket at a run.
///
/// Every bucket is always present; there is no way to represent a missing or
/// extra key.
///
/// # Examples
/// ```
/// use pacematch_core::{AvailabilityLevel, PaceGroups, PaceRange};
///
/// let groups = PaceGroups {
///     sub_eight: AvailabilityLevel::Rarely,
///     eight_to_nine: AvailabilityLevel::Sometimes,
///     nine_to_ten: AvailabilityLevel::Frequently,
///     ten_plus: AvailabilityLevel::Consistently,
/// };
/// assert_eq!(
///     groups.availability(PaceRange::TenPlus),
///     AvailabilityLevel::Consistently
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaceGroups {
    /// Availability of the under-8:00/mi bucket.
    #[cfg_attr(feature = "serde", serde(rename = "sub_8"))]
    pub sub_eight: AvailabilityLevel,
    /// Availability of the 8:00-9:00/mi bucket.
    #[cfg_attr(feature = "serde", serde(rename = "8_to_9"))]
    pub eight_to_nine: AvailabilityLevel,
    /// Availability of the 9:00-10:00/mi bucket.
    #[cfg_attr(feature = "serde", serde(rename = "9_to_10"))]
    pub nine_to_ten: AvailabilityLevel,
    /// Availability of the over-10:00/mi bucket.
    #[cfg_attr(feature = "serde", serde(rename = "10_plus"))]
    pub ten_plus: AvailabilityLevel,
}

impl PaceGroups {
    /// Look up the availability level for a pace bucket.
    ///
    /// Total by construction: every bucket maps to a field.
    #[must_use]
    pub const fn availability(&self, range: PaceRange) -> AvailabilityLevel {
        match range {
            PaceRange::Sub8 => self.sub_eight,
            PaceRange::EightToNine => self.eight_to_nine,
            PaceRange::NineToTen => self.nine_to_ten,
            PaceRange::TenPlus => self.ten_plus,
        }
    }

    /// Build a map with the same availability level in every bucket.
    #[must_use]
    pub const fn uniform(level: AvailabilityLevel) -> Self {
        Self {
            sub_eight: level,
            eight_to_nine: level,
            nine_to_ten: level,
            ten_plus: level,
        }
    }
}

/// A published group run.
///
/// # Examples
/// ```
/// use pacematch_core::{AvailabilityLevel, DayOfWeek, PaceGroups, Run, Terrain};
///
/// let run = Run {
///     id: 1,
///     name: "KenGar Long Run".into(),
///     day_of_week: DayOfWeek::Sunday,
///     start_time: "8:00 AM".into(),
///     location_name: "KenGar Park".into(),
///     latitude: 39.0321,
///     longitude: -77.0718,
///     typical_distances: "8-14 miles".into(),
///     terrain: Terrain::Mixed,
///     pace_groups: PaceGroups::uniform(AvailabilityLevel::Consistently),
///     contact_name: None,
///     contact_email: None,
///     contact_phone: None,
///     notes: None,
///     is_active: true,
/// };
/// assert!(run.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Stable identifier, unique per run and never reused.
    pub id: u64,
    /// Display name of the run.
    pub name: String,
    /// Day of the week the run takes place.
    pub day_of_week: DayOfWeek,
    /// Local start time, free form (e.g. `"6:30 AM"`).
    pub start_time: String,
    /// Name of the meeting point.
    pub location_name: String,
    /// Latitude of the meeting point in degrees, valid range [-90, 90].
    pub latitude: f64,
    /// Longitude of the meeting point in degrees, valid range [-180, 180].
    pub longitude: f64,
    /// Free-form description of typical distances (e.g. `"4-6 miles"`).
    pub typical_distances: String,
    /// Surface the run takes place on.
    pub terrain: Terrain,
    /// Availability of each pace bucket.
    pub pace_groups: PaceGroups,
    /// Organiser contact name, if published.
    #[cfg_attr(feature = "serde", serde(default))]
    pub contact_name: Option<String>,
    /// Organiser contact email, if published.
    #[cfg_attr(feature = "serde", serde(default))]
    pub contact_email: Option<String>,
    /// Organiser contact phone number, if published.
    #[cfg_attr(feature = "serde", serde(default))]
    pub contact_phone: Option<String>,
    /// Free-form notes for attendees, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
    /// Whether the listing is live. Inactive runs are excluded at the
    /// boundary, never inside the ranker.
    #[cfg_attr(feature = "serde", serde(default = "default_is_active"))]
    pub is_active: bool,
}

#[cfg(feature = "serde")]
const fn default_is_active() -> bool {
    true
}

impl Run {
    /// The meeting point as a coordinate (x = longitude, y = latitude).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Check the boundary invariants on this record.
    ///
    /// The ranker assumes validated input; callers run this when records
    /// cross into the engine (e.g. after deserialisation).
    ///
    /// # Errors
    /// Returns the first violated constraint: an empty `name`, `start_time`,
    /// or `location_name`, or a coordinate outside its documented range.
    /// Non-finite coordinates fail the range checks.
    pub fn validate(&self) -> Result<(), RunValidationError> {
        if self.name.is_empty() {
            return Err(RunValidationError::EmptyName);
        }
        if self.start_time.is_empty() {
            return Err(RunValidationError::EmptyStartTime);
        }
        if self.location_name.is_empty() {
            return Err(RunValidationError::EmptyLocationName);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(RunValidationError::LatitudeOutOfRange {
                latitude: self.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(RunValidationError::LongitudeOutOfRange {
                longitude: self.longitude,
            });
        }
        Ok(())
    }
}

/// Violations reported by [`Run::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunValidationError {
    /// The run name is empty.
    #[error("run name must not be empty")]
    EmptyName,
    /// The start time is empty.
    #[error("start time must not be empty")]
    EmptyStartTime,
    /// The meeting point name is empty.
    #[error("location name must not be empty")]
    EmptyLocationName,
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

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_run() -> Run {
        Run {
            id: 7,
            name: "JobJog".into(),
            day_of_week: DayOfWeek::Monday,
            start_time: "9:30 AM".into(),
            location_name: "Rockville Town Square".into(),
            latitude: 39.078,
            longitude: -77.1382,
            typical_distances: "3-5 miles".into(),
            terrain: Terrain::Road,
            pace_groups: PaceGroups {
                sub_eight: AvailabilityLevel::Rarely,
                eight_to_nine: AvailabilityLevel::Sometimes,
                nine_to_ten: AvailabilityLevel::Frequently,
                ten_plus: AvailabilityLevel::Consistently,
            },
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            notes: None,
            is_active: true,
        }
    }

    #[rstest]
    #[case(PaceRange::Sub8, AvailabilityLevel::Rarely)]
    #[case(PaceRange::EightToNine, AvailabilityLevel::Sometimes)]
    #[case(PaceRange::NineToTen, AvailabilityLevel::Frequently)]
    #[case(PaceRange::TenPlus, AvailabilityLevel::Consistently)]
    fn availability_reads_the_matching_bucket(
        #[case] range: PaceRange,
        #[case] expected: AvailabilityLevel,
    ) {
        let run = sample_run();
        assert_eq!(run.pace_groups.availability(range), expected);
    }

    #[rstest]
    fn uniform_fills_every_bucket() {
        let groups = PaceGroups::uniform(AvailabilityLevel::Sometimes);
        for range in PaceRange::ALL {
            assert_eq!(groups.availability(range), AvailabilityLevel::Sometimes);
        }
    }

    #[rstest]
    fn location_maps_longitude_to_x_and_latitude_to_y() {
        let run = sample_run();
        let location = run.location();
        assert_eq!(location.x, run.longitude);
        assert_eq!(location.y, run.latitude);
    }

    #[rstest]
    fn validate_accepts_a_well_formed_run() {
        assert!(sample_run().validate().is_ok());
    }

    #[rstest]
    #[case(Run { name: String::new(), ..sample_run() }, RunValidationError::EmptyName)]
    #[case(Run { start_time: String::new(), ..sample_run() }, RunValidationError::EmptyStartTime)]
    #[case(
        Run { location_name: String::new(), ..sample_run() },
        RunValidationError::EmptyLocationName
    )]
    #[case(
        Run { latitude: 90.5, ..sample_run() },
        RunValidationError::LatitudeOutOfRange { latitude: 90.5 }
    )]
    #[case(
        Run { latitude: -90.5, ..sample_run() },
        RunValidationError::LatitudeOutOfRange { latitude: -90.5 }
    )]
    #[case(
        Run { longitude: 180.5, ..sample_run() },
        RunValidationError::LongitudeOutOfRange { longitude: 180.5 }
    )]
    #[case(
        Run { longitude: -181.0, ..sample_run() },
        RunValidationError::LongitudeOutOfRange { longitude: -181.0 }
    )]
    fn validate_reports_the_violated_constraint(
        #[case] run: Run,
        #[case] expected: RunValidationError,
    ) {
        let err = run.validate().expect_err("invalid run should be rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn validate_rejects_non_finite_coordinates() {
        let run = Run {
            latitude: f64::NAN,
            ..sample_run()
        };
        assert!(matches!(
            run.validate(),
            Err(RunValidationError::LatitudeOutOfRange { .. })
        ));
    }

    #[cfg(feature = "serde")]
    mod wire_format {
        use super::*;

        #[rstest]
        fn runs_round_trip_through_json() {
            let run = sample_run();
            let encoded = serde_json::to_string(&run).expect("serialize run");
            assert!(encoded.contains("\"sub_8\":\"rarely\""));
            assert!(encoded.contains("\"10_plus\":\"consistently\""));
            let decoded: Run = serde_json::from_str(&encoded).expect("deserialize run");
            assert_eq!(decoded, run);
        }

        #[rstest]
        fn missing_optional_fields_default() {
            let decoded: Run = serde_json::from_str(
                r#"{
                    "id": 3,
                    "name": "Kentlands/Lakelands Run",
                    "day_of_week": "Monday",
                    "start_time": "7:00 PM",
                    "location_name": "Kentlands Market Square",
                    "latitude": 39.1273,
                    "longitude": -77.2316,
                    "typical_distances": "5-7 miles",
                    "terrain": "Road",
                    "pace_groups": {
                        "sub_8": "sometimes",
                        "8_to_9": "frequently",
                        "9_to_10": "consistently",
                        "10_plus": "frequently"
                    }
                }"#,
            )
            .expect("deserialize run without optional fields");
            assert_eq!(decoded.contact_name, None);
            assert_eq!(decoded.notes, None);
            assert!(decoded.is_active);
        }

        #[rstest]
        fn pace_groups_reject_missing_buckets() {
            let err = serde_json::from_str::<PaceGroups>(
                r#"{"sub_8": "rarely", "8_to_9": "rarely", "9_to_10": "rarely"}"#,
            )
            .expect_err("missing bucket should fail");
            assert!(err.to_string().contains("10_plus"));
        }
    }
}
