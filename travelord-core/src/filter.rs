//! Discard points that stray from the travel line.

use geo::Coord;

use crate::geometry::{bearing_difference, haversine_distance, initial_bearing};

/// Keep the points that lie along the start-to-end travel line.
///
/// A point survives when its bearing from `start` deviates from the travel
/// bearing by at most `threshold` degrees and it sits no farther from
/// `start` than `end` does. Both reference values are computed once per
/// call. The filter is stable: survivors keep their relative input order.
///
/// A point equal to `end` always survives (zero deviation, boundary
/// distance). A point coincident with `start` reports bearing `0.0` under
/// the `atan2(0, 0)` convention, so its deviation equals the travel bearing
/// itself.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use travelord_core::filter_points;
///
/// let start = Coord { x: 0.0, y: 0.0 };
/// let end = Coord { x: 0.0, y: 10.0 };
/// let on_line = Coord { x: 0.0, y: 5.0 };
/// let behind = Coord { x: 0.0, y: -5.0 };
///
/// let kept = filter_points(start, end, &[on_line, behind], 45.0);
/// assert_eq!(kept, vec![on_line]);
/// ```
#[must_use]
pub fn filter_points(
    start: Coord<f64>,
    end: Coord<f64>,
    points: &[Coord<f64>],
    threshold: f64,
) -> Vec<Coord<f64>> {
    let travel_bearing = initial_bearing(start, end);
    let travel_distance = haversine_distance(start, end);
    let kept: Vec<Coord<f64>> = points
        .iter()
        .copied()
        .filter(|&point| {
            let deviation = bearing_difference(initial_bearing(start, point), travel_bearing);
            let distance = haversine_distance(start, point);
            deviation <= threshold && distance <= travel_distance
        })
        .collect();
    log::debug!(
        "kept {} of {} points within {threshold} degrees of bearing {travel_bearing:.1}",
        kept.len(),
        points.len()
    );
    kept
}
