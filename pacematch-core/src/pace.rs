//! Pace-range and availability vocabularies used by the ranking engine.
//!
//! Both enums are closed: parsing rejects anything outside the four
//! documented values, so a malformed key fails fast at the boundary instead
//! of silently corrupting ranking results downstream.
//!
//! # Examples
//! ```
//! use pacematch_core::{AvailabilityLevel, PaceRange};
//!
//! assert_eq!(PaceRange::Sub8.as_str(), "sub_8");
//! assert_eq!(AvailabilityLevel::Frequently.to_string(), "frequently");
//! ```

/// One of the four minutes-per-mile pace buckets a seeker can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaceRange {
    /// Under 8:00 per mile.
    #[cfg_attr(feature = "serde", serde(rename = "sub_8"))]
    Sub8,
    /// 8:00 to 9:00 per mile.
    #[cfg_attr(feature = "serde", serde(rename = "8_to_9"))]
    EightToNine,
    /// 9:00 to 10:00 per mile.
    #[cfg_attr(feature = "serde", serde(rename = "9_to_10"))]
    NineToTen,
    /// Over 10:00 per mile.
    #[cfg_attr(feature = "serde", serde(rename = "10_plus"))]
    TenPlus,
}

impl PaceRange {
    /// All four buckets in slowest-pace-last order.
    pub const ALL: [Self; 4] = [Self::Sub8, Self::EightToNine, Self::NineToTen, Self::TenPlus];

    /// Return the bucket's wire name as a `&str`.
    ///
    /// # Examples
    /// ```
    /// use pacematch_core::PaceRange;
    ///
    /// assert_eq!(PaceRange::EightToNine.as_str(), "8_to_9");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sub8 => "sub_8",
            Self::EightToNine => "8_to_9",
            Self::NineToTen => "9_to_10",
            Self::TenPlus => "10_plus",
        }
    }
}

impl std::fmt::Display for PaceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaceRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sub_8" => Ok(Self::Sub8),
            "8_to_9" => Ok(Self::EightToNine),
            "9_to_10" => Ok(Self::NineToTen),
            "10_plus" => Ok(Self::TenPlus),
            _ => Err(format!("unknown pace range '{s}'")),
        }
    }
}

/// How often a pace range is represented at a run.
///
/// The levels are ordered by desirability: `consistently` > `frequently` >
/// `sometimes` > `rarely`. The ordering is realised by the score table in
/// [`crate::scoring`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AvailabilityLevel {
    /// The pace range is represented at essentially every run.
    Consistently,
    /// The pace range is represented at most runs.
    Frequently,
    /// The pace range shows up occasionally.
    Sometimes,
    /// The pace range is rarely represented.
    Rarely,
}

impl AvailabilityLevel {
    /// Return the level's wire name as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use pacematch_core::AvailabilityLevel;
    ///
    /// assert_eq!(AvailabilityLevel::Rarely.as_str(), "rarely");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Consistently => "consistently",
            Self::Frequently => "frequently",
            Self::Sometimes => "sometimes",
            Self::Rarely => "rarely",
        }
    }
}

impl std::fmt::Display for AvailabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AvailabilityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "consistently" => Ok(Self::Consistently),
            "frequently" => Ok(Self::Frequently),
            "sometimes" => Ok(Self::Sometimes),
            "rarely" => Ok(Self::Rarely),
            _ => Err(format!("unknown availability level '{s}'")),
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(PaceRange::Sub8, "sub_8")]
    #[case(PaceRange::EightToNine, "8_to_9")]
    #[case(PaceRange::NineToTen, "9_to_10")]
    #[case(PaceRange::TenPlus, "10_plus")]
    fn pace_range_round_trips(#[case] range: PaceRange, #[case] name: &str) {
        assert_eq!(range.as_str(), name);
        assert_eq!(range.to_string(), name);
        assert_eq!(
            PaceRange::from_str(name).expect("known name should parse"),
            range
        );
    }

    #[rstest]
    #[case(AvailabilityLevel::Consistently, "consistently")]
    #[case(AvailabilityLevel::Frequently, "frequently")]
    #[case(AvailabilityLevel::Sometimes, "sometimes")]
    #[case(AvailabilityLevel::Rarely, "rarely")]
    fn availability_round_trips(#[case] level: AvailabilityLevel, #[case] name: &str) {
        assert_eq!(level.as_str(), name);
        assert_eq!(level.to_string(), name);
        assert_eq!(
            AvailabilityLevel::from_str(name).expect("known name should parse"),
            level
        );
    }

    #[rstest]
    fn parsing_rejects_unknown_pace_range() {
        let err = PaceRange::from_str("7_to_8").expect_err("unknown bucket should fail");
        assert!(err.contains("unknown pace range"));
    }

    #[rstest]
    fn parsing_rejects_unknown_availability() {
        let err = AvailabilityLevel::from_str("always").expect_err("unknown level should fail");
        assert!(err.contains("unknown availability level"));
    }

    #[cfg(feature = "serde")]
    mod wire_format {
        use super::*;

        #[rstest]
        #[case(PaceRange::Sub8, "\"sub_8\"")]
        #[case(PaceRange::EightToNine, "\"8_to_9\"")]
        #[case(PaceRange::NineToTen, "\"9_to_10\"")]
        #[case(PaceRange::TenPlus, "\"10_plus\"")]
        fn pace_range_uses_wire_names(#[case] range: PaceRange, #[case] json: &str) {
            let encoded = serde_json::to_string(&range).expect("serialize pace range");
            assert_eq!(encoded, json);
            let decoded: PaceRange = serde_json::from_str(json).expect("deserialize pace range");
            assert_eq!(decoded, range);
        }

        #[rstest]
        fn availability_uses_lowercase_names() {
            let encoded =
                serde_json::to_string(&AvailabilityLevel::Consistently).expect("serialize level");
            assert_eq!(encoded, "\"consistently\"");
            let decoded: AvailabilityLevel =
                serde_json::from_str("\"rarely\"").expect("deserialize level");
            assert_eq!(decoded, AvailabilityLevel::Rarely);
        }

        #[rstest]
        fn unknown_wire_names_are_rejected() {
            let err = serde_json::from_str::<PaceRange>("\"marathon\"")
                .expect_err("unknown bucket should fail");
            assert!(err.to_string().contains("unknown variant"));
        }
    }
}
