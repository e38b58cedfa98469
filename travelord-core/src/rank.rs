//! Score and order filtered points along the travel line.

use geo::Coord;

use crate::filter::filter_points;
use crate::geometry::{bearing_difference, haversine_distance, initial_bearing};
use crate::normalize::normalize;
use crate::{DEFAULT_BEARING_THRESHOLD, DEFAULT_BEARING_WEIGHT, DEFAULT_DISTANCE_WEIGHT};

/// Bounds of the two scoring signals over a point set.
///
/// Produced by [`min_max_values`] and consumed to parametrise the
/// normalisers in [`sort_points`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxValues {
    /// Smallest distance from the start, in kilometres.
    pub min_distance: f64,
    /// Largest distance from the start, in kilometres.
    pub max_distance: f64,
    /// Smallest bearing deviation from the travel bearing, in degrees.
    pub min_bearing_diff: f64,
    /// Largest bearing deviation from the travel bearing, in degrees.
    pub max_bearing_diff: f64,
}

/// Weights blending the two normalised signals into one score.
///
/// Neither weight is clamped and they are not forced to sum to one;
/// callers own the trade-off between staying close to the start and
/// staying aligned with the travel direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankWeights {
    /// Weight of the normalised distance-from-start signal.
    pub distance: f64,
    /// Weight of the normalised bearing-deviation signal.
    pub bearing: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE_WEIGHT,
            bearing: DEFAULT_BEARING_WEIGHT,
        }
    }
}

/// Tuning knobs for [`rank_points_along_bearing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Signal weights applied during scoring.
    pub weights: RankWeights,
    /// Bearing deviation threshold, in degrees, applied by the filter.
    pub threshold: f64,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            weights: RankWeights::default(),
            threshold: DEFAULT_BEARING_THRESHOLD,
        }
    }
}

/// Extract the min/max of both scoring signals in a single pass.
///
/// On an empty slice the minima stay at `+INFINITY` and the maxima at
/// `NEG_INFINITY`; downstream normalisation then degenerates as described
/// on [`normalize`], which callers must tolerate rather than this function
/// guarding against it.
#[must_use]
pub fn min_max_values(start: Coord<f64>, end: Coord<f64>, points: &[Coord<f64>]) -> MinMaxValues {
    let travel_bearing = initial_bearing(start, end);
    let mut bounds = MinMaxValues {
        min_distance: f64::INFINITY,
        max_distance: f64::NEG_INFINITY,
        min_bearing_diff: f64::INFINITY,
        max_bearing_diff: f64::NEG_INFINITY,
    };
    for &point in points {
        let deviation = bearing_difference(initial_bearing(start, point), travel_bearing);
        let distance = haversine_distance(start, point);
        bounds.min_distance = bounds.min_distance.min(distance);
        bounds.max_distance = bounds.max_distance.max(distance);
        bounds.min_bearing_diff = bounds.min_bearing_diff.min(deviation);
        bounds.max_bearing_diff = bounds.max_bearing_diff.max(deviation);
    }
    bounds
}

/// Order points by their combined distance and bearing score, ascending.
///
/// Each point's score is `weights.distance * norm_distance +
/// weights.bearing * norm_bearing_deviation`, where both signals are
/// min-max normalised over the input set. Lower scores rank earlier.
///
/// The vector is taken by value, sorted in place, and returned. Scores are
/// computed once per point before sorting, and the sort is stable with a
/// total comparator ([`f64::total_cmp`]): equal scores keep their input
/// order and `NaN` scores, which arise when a signal is constant across the
/// whole set, order after every finite score instead of panicking.
#[must_use]
pub fn sort_points(
    start: Coord<f64>,
    end: Coord<f64>,
    points: Vec<Coord<f64>>,
    weights: RankWeights,
) -> Vec<Coord<f64>> {
    let bounds = min_max_values(start, end, &points);
    let travel_bearing = initial_bearing(start, end);
    let norm_distance = normalize(bounds.min_distance, bounds.max_distance);
    let norm_bearing = normalize(bounds.min_bearing_diff, bounds.max_bearing_diff);

    let mut scored: Vec<(f64, Coord<f64>)> = points
        .into_iter()
        .map(|point| {
            let deviation = bearing_difference(initial_bearing(start, point), travel_bearing);
            let distance = haversine_distance(start, point);
            let score = weights.distance * norm_distance(distance)
                + weights.bearing * norm_bearing(deviation);
            (score, point)
        })
        .collect();
    scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    scored.into_iter().map(|(_, point)| point).collect()
}

/// Filter points against the travel line, then rank the survivors.
///
/// Composes [`filter_points`] and [`sort_points`]; this is the sole entry
/// point the CLI depends on. The input slice is never mutated; the ranked
/// points are returned as a new vector.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use travelord_core::{RankOptions, rank_points_along_bearing};
///
/// let start = Coord { x: 20.0, y: 10.0 };
/// let end = Coord { x: 60.0, y: 50.0 };
/// let points = vec![end, start];
///
/// let ranked = rank_points_along_bearing(start, end, &points, &RankOptions::default());
///
/// // The start itself scores lowest: zero distance, and the bearing
/// // signal cannot outweigh it under the default weights.
/// assert_eq!(ranked, vec![start, end]);
/// ```
#[must_use]
pub fn rank_points_along_bearing(
    start: Coord<f64>,
    end: Coord<f64>,
    points: &[Coord<f64>],
    options: &RankOptions,
) -> Vec<Coord<f64>> {
    let survivors = filter_points(start, end, points, options.threshold);
    sort_points(start, end, survivors, options.weights)
}
