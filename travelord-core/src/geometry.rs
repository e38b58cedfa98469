//! Great-circle geometry on a spherical Earth.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]; bearings use the standard forward-azimuth formula.
//! All functions are total over finite inputs: no latitude or longitude
//! range checks are performed and out-of-range values propagate through the
//! trigonometry as ordinary numbers.

use std::f64::consts::PI;

use geo::Coord;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Convert degrees to radians.
#[must_use]
pub const fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

/// Convert radians to degrees.
#[must_use]
pub const fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Great-circle distance between `a` and `b` in kilometres.
///
/// Symmetric in its arguments and exactly zero for coincident inputs.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use travelord_core::haversine_distance;
///
/// let greenwich = Coord { x: 0.0, y: 51.477 };
/// assert_eq!(haversine_distance(greenwich, greenwich), 0.0);
///
/// // One degree along a meridian spans R * PI / 180 kilometres.
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 0.0, y: 1.0 };
/// let d = haversine_distance(a, b);
/// assert!((d - 111.194_926_644_558_73).abs() < 1e-9);
/// ```
#[must_use]
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = deg_to_rad(b.y - a.y);
    let d_lng = deg_to_rad(b.x - a.x);
    let half_lat = (d_lat / 2.0).sin();
    let half_lng = (d_lng / 2.0).sin();
    let h = half_lat * half_lat
        + deg_to_rad(a.y).cos() * deg_to_rad(b.y).cos() * half_lng * half_lng;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Initial bearing of the great-circle path from `a` to `b`.
///
/// Returned in compass degrees, clockwise from true north, in `[0, 360)`.
/// The bearing is not symmetric: the return path generally sets off on a
/// different azimuth. For coincident inputs the direction is undefined and
/// the function returns `0.0`, the value of `atan2(0, 0)`.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use travelord_core::initial_bearing;
///
/// // Due east along the equator.
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 10.0, y: 0.0 };
/// assert!((initial_bearing(a, b) - 90.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn initial_bearing(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lng = deg_to_rad(b.x - a.x);
    let lat_a = deg_to_rad(a.y);
    let lat_b = deg_to_rad(b.y);
    let y = d_lng.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lng.cos();
    (rad_to_deg(y.atan2(x)) + 360.0) % 360.0
}

/// Smallest angular difference between two compass bearings.
///
/// Differences above 180 degrees wrap to the shorter way round, so the
/// result lies in `[0, 180]`. Commutative.
///
/// # Examples
///
/// ```
/// use travelord_core::bearing_difference;
///
/// assert_eq!(bearing_difference(350.0, 10.0), 20.0);
/// assert_eq!(bearing_difference(10.0, 350.0), 20.0);
/// ```
#[must_use]
pub fn bearing_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 })]
    #[case(Coord { x: -73.985, y: 40.748 })]
    #[case(Coord { x: 151.215, y: -33.857 })]
    fn distance_to_self_is_zero(#[case] point: Coord<f64>) {
        assert_eq!(haversine_distance(point, point), 0.0);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coord { x: 2.352_2, y: 48.856_6 };
        let b = Coord { x: -0.127_8, y: 51.507_4 };
        let forward = haversine_distance(a, b);
        let back = haversine_distance(b, a);
        assert!((forward - back).abs() < TOLERANCE);
    }

    #[rstest]
    fn london_to_paris_distance_is_plausible() {
        let london = Coord { x: -0.127_8, y: 51.507_4 };
        let paris = Coord { x: 2.352_2, y: 48.856_6 };
        let d = haversine_distance(london, paris);
        assert!((330.0..360.0).contains(&d), "got {d} km");
    }

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 10.0 }, 0.0)]
    #[case(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 0.0 }, 90.0)]
    #[case(Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: -10.0 }, 180.0)]
    #[case(Coord { x: 0.0, y: 0.0 }, Coord { x: -10.0, y: 0.0 }, 270.0)]
    fn cardinal_bearings(
        #[case] from: Coord<f64>,
        #[case] to: Coord<f64>,
        #[case] expected: f64,
    ) {
        let bearing = initial_bearing(from, to);
        assert!(
            (bearing - expected).abs() < TOLERANCE,
            "expected {expected}, got {bearing}"
        );
    }

    #[rstest]
    fn bearing_of_coincident_points_is_zero() {
        let point = Coord { x: 20.0, y: 10.0 };
        assert_eq!(initial_bearing(point, point), 0.0);
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0)]
    #[case(90.0, 45.0, 45.0)]
    #[case(350.0, 10.0, 20.0)]
    #[case(0.0, 180.0, 180.0)]
    #[case(359.0, 1.0, 2.0)]
    fn bearing_difference_wraps(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(bearing_difference(a, b), expected);
        assert_eq!(bearing_difference(b, a), expected);
    }

    #[rstest]
    fn degree_radian_round_trip() {
        let deg = 123.456;
        assert!((rad_to_deg(deg_to_rad(deg)) - deg).abs() < TOLERANCE);
    }
}
