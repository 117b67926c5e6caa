//! Great-circle distance on a spherical Earth model.

use geo::Coord;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance in statute miles between two points.
///
/// Implements the haversine formula over a sphere of radius
/// [`EARTH_RADIUS_MILES`]. Coordinates are degrees, x = longitude and
/// y = latitude.
///
/// The function is total over all real degree inputs: symmetric, exactly
/// zero for identical points, strictly positive for distinct points, and
/// well defined at the poles and for antipodal pairs (where the distance is
/// half the sphere's circumference). Range checking belongs to the boundary
/// (see [`Run::validate`](crate::Run::validate)), not here.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pacematch_core::haversine_miles;
///
/// let bethesda = Coord { x: -77.0941, y: 38.9849 };
/// let rockville = Coord { x: -77.1528, y: 39.0840 };
/// let miles = haversine_miles(bethesda, rockville);
/// assert!(miles > 5.0 && miles < 10.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is inherently floating-point geometry"
)]
pub fn haversine_miles(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let d_lat = (to.y - from.y).to_radians();
    let d_lon = (to.x - from.x).to_radians();
    let lat_from = from.y.to_radians();
    let lat_to = to.y.to_radians();

    // hav(angle) = sin^2(angle / 2)
    let haversine =
        (d_lat / 2.0).sin().powi(2) + lat_from.cos() * lat_to.cos() * (d_lon / 2.0).sin().powi(2);
    // 1 - hav can round just below zero near antipodal pairs.
    let central_angle = 2.0 * haversine.sqrt().atan2((1.0 - haversine).max(0.0).sqrt());
    EARTH_RADIUS_MILES * central_angle
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare distances with explicit tolerances"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-10;

    const ROCKVILLE: Coord<f64> = Coord {
        x: -77.1528,
        y: 39.0840,
    };
    const BETHESDA: Coord<f64> = Coord {
        x: -77.0941,
        y: 38.9849,
    };

    #[rstest]
    fn identical_points_are_zero_miles_apart() {
        assert_eq!(haversine_miles(ROCKVILLE, ROCKVILLE), 0.0);
    }

    #[rstest]
    fn neighbouring_towns_are_a_few_miles_apart() {
        let miles = haversine_miles(BETHESDA, ROCKVILLE);
        assert!(miles > 5.0 && miles < 10.0, "unexpected distance {miles}");
    }

    #[rstest]
    #[case::coast_to_coast(
        Coord { x: -74.006, y: 40.7128 },
        Coord { x: -118.2437, y: 34.0522 },
        2400.0,
        2500.0
    )]
    #[case::across_the_tasman(
        Coord { x: 151.2093, y: -33.8688 },
        Coord { x: 174.7633, y: -36.8485 },
        1300.0,
        1400.0
    )]
    #[case::pole_to_pole(
        Coord { x: 0.0, y: 90.0 },
        Coord { x: 0.0, y: -90.0 },
        12_400.0,
        12_500.0
    )]
    fn known_distances_fall_in_expected_bands(
        #[case] from: Coord<f64>,
        #[case] to: Coord<f64>,
        #[case] low: f64,
        #[case] high: f64,
    ) {
        let miles = haversine_miles(from, to);
        assert!(
            miles > low && miles < high,
            "expected {low}..{high} miles, found {miles}"
        );
    }

    #[rstest]
    fn distance_is_symmetric() {
        let forward = haversine_miles(BETHESDA, ROCKVILLE);
        let backward = haversine_miles(ROCKVILLE, BETHESDA);
        assert!((forward - backward).abs() < TOLERANCE);
    }

    #[rstest]
    fn distinct_points_are_strictly_apart() {
        let nudged = Coord {
            x: ROCKVILLE.x + 1e-6,
            y: ROCKVILLE.y,
        };
        assert!(haversine_miles(ROCKVILLE, nudged) > 0.0);
    }

    #[rstest]
    fn antipodal_distance_is_half_the_circumference() {
        let miles = haversine_miles(
            Coord { x: 0.0, y: 0.0 },
            Coord {
                x: 180.0,
                y: 0.0,
            },
        );
        assert!((miles - EARTH_RADIUS_MILES * std::f64::consts::PI).abs() < 1e-6);
    }
}
