//! Score tables and functions combining pace match with proximity.
//!
//! All scoring constants live here so the weighting invariant stays
//! auditable in one place: [`PACE_WEIGHT`] and [`PROXIMITY_WEIGHT`] must sum
//! to exactly 1.0. Tune them together or the relevance range (0, 1] breaks.

use crate::pace::AvailabilityLevel;

/// Weight of the pace-availability component in the relevance blend.
pub const PACE_WEIGHT: f64 = 0.6;

/// Weight of the proximity component in the relevance blend.
pub const PROXIMITY_WEIGHT: f64 = 0.4;

/// Desirability of an availability level.
///
/// The table is fixed: `consistently` 1.0, `frequently` 0.7, `sometimes`
/// 0.4, `rarely` 0.1. Downstream ordering tests depend on these exact
/// values.
///
/// # Examples
/// ```
/// use pacematch_core::{AvailabilityLevel, pace_score};
///
/// assert_eq!(pace_score(AvailabilityLevel::Consistently), 1.0);
/// assert_eq!(pace_score(AvailabilityLevel::Rarely), 0.1);
/// ```
#[must_use]
pub const fn pace_score(level: AvailabilityLevel) -> f64 {
    match level {
        AvailabilityLevel::Consistently => 1.0,
        AvailabilityLevel::Frequently => 0.7,
        AvailabilityLevel::Sometimes => 0.4,
        AvailabilityLevel::Rarely => 0.1,
    }
}

/// Distance-decay desirability of a run `distance_miles` away.
///
/// `proximity_score(d) = 1 / (1 + d / 5)`: exactly 1.0 at zero distance,
/// exactly 0.5 at five miles, strictly decreasing, and approaching (never
/// reaching) zero as the distance grows.
///
/// # Examples
/// ```
/// use pacematch_core::proximity_score;
///
/// assert_eq!(proximity_score(0.0), 1.0);
/// assert_eq!(proximity_score(5.0), 0.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance decay is inherently floating-point math"
)]
pub const fn proximity_score(distance_miles: f64) -> f64 {
    1.0 / (1.0 + distance_miles / 5.0)
}

/// Blend a pace match and a distance into a single relevance score.
///
/// The result lies in (0, 1] for finite non-negative distances; the maximum
/// 1.0 is reached only by a `consistently` match at zero distance, and the
/// score never falls below [`PACE_WEIGHT`] times the pace score however far
/// away the run is.
///
/// # Examples
/// ```
/// use pacematch_core::{AvailabilityLevel, relevance_score};
///
/// assert_eq!(relevance_score(AvailabilityLevel::Consistently, 0.0), 1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the relevance blend is inherently floating-point math"
)]
pub const fn relevance_score(level: AvailabilityLevel, distance_miles: f64) -> f64 {
    PACE_WEIGHT * pace_score(level) + PROXIMITY_WEIGHT * proximity_score(distance_miles)
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare float scores with explicit tolerances"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-10;

    #[rstest]
    fn weights_sum_to_exactly_one() {
        assert_eq!(PACE_WEIGHT + PROXIMITY_WEIGHT, 1.0);
    }

    #[rstest]
    #[case(AvailabilityLevel::Consistently, 1.0)]
    #[case(AvailabilityLevel::Frequently, 0.7)]
    #[case(AvailabilityLevel::Sometimes, 0.4)]
    #[case(AvailabilityLevel::Rarely, 0.1)]
    fn pace_score_matches_the_table(#[case] level: AvailabilityLevel, #[case] expected: f64) {
        assert_eq!(pace_score(level), expected);
    }

    #[rstest]
    fn pace_scores_preserve_the_level_ordering() {
        use AvailabilityLevel::{Consistently, Frequently, Rarely, Sometimes};

        assert!(pace_score(Consistently) > pace_score(Frequently));
        assert!(pace_score(Frequently) > pace_score(Sometimes));
        assert!(pace_score(Sometimes) > pace_score(Rarely));
    }

    #[rstest]
    fn proximity_is_one_at_zero_distance() {
        assert_eq!(proximity_score(0.0), 1.0);
    }

    #[rstest]
    fn proximity_is_half_at_five_miles() {
        assert_eq!(proximity_score(5.0), 0.5);
    }

    #[rstest]
    fn proximity_is_a_third_at_ten_miles() {
        assert!((proximity_score(10.0) - 1.0 / 3.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn proximity_stays_positive_but_small_far_away() {
        let score = proximity_score(10_000.0);
        assert!(score > 0.0 && score < 0.01);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(1.0, 5.0)]
    #[case(5.0, 10.0)]
    #[case(10.0, 100.0)]
    #[case(100.0, 10_000.0)]
    fn proximity_strictly_decreases_with_distance(#[case] near: f64, #[case] far: f64) {
        assert!(proximity_score(near) > proximity_score(far));
    }

    #[rstest]
    fn perfect_match_at_zero_distance_scores_one() {
        assert_eq!(relevance_score(AvailabilityLevel::Consistently, 0.0), 1.0);
    }

    #[rstest]
    #[case(AvailabilityLevel::Rarely, 0.0, 0.46)]
    #[case(AvailabilityLevel::Frequently, 5.0, 0.62)]
    #[case(AvailabilityLevel::Sometimes, 10.0, 0.24 + (1.0 / 3.0) * PROXIMITY_WEIGHT)]
    fn relevance_blends_pace_and_proximity(
        #[case] level: AvailabilityLevel,
        #[case] distance_miles: f64,
        #[case] expected: f64,
    ) {
        assert!((relevance_score(level, distance_miles) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn relevance_never_falls_below_the_weighted_pace_score() {
        let score = relevance_score(AvailabilityLevel::Consistently, 100_000.0);
        assert!(score > PACE_WEIGHT && score < 0.61);
    }
}
