//! Core ranking pipeline for ordering points along a travel line.
//!
//! Given a start and an end coordinate, candidate points are scored by two
//! normalised signals: great-circle distance from the start and deviation of
//! their bearing from the start-to-end travel bearing. The signals are
//! blended by a weighted sum; lower scores rank earlier, so the first ranked
//! point is the one closest to the start and best aligned with the travel
//! direction.
//!
//! The pipeline runs in a single pass per stage: filter out points that
//! stray from the travel line, extract the min/max of both signals over the
//! survivors, normalise, score, and sort. All stages are pure functions over
//! in-memory data with no shared state, so concurrent callers need no
//! coordination.
//!
//! Coordinates are WGS84-style [`geo::Coord`] values with `x = longitude`
//! and `y = latitude`, in degrees.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use travelord_core::{RankOptions, rank_points_along_bearing};
//!
//! let start = Coord { x: 20.0, y: 10.0 };
//! let end = Coord { x: 60.0, y: 50.0 };
//! let points = vec![start, Coord { x: 40.0, y: 30.0 }, end];
//!
//! let ranked = rank_points_along_bearing(start, end, &points, &RankOptions::default());
//!
//! assert_eq!(ranked.len(), 3);
//! assert_eq!(ranked.first(), Some(&start));
//! ```

#![forbid(unsafe_code)]

pub mod filter;
pub mod geometry;
pub mod normalize;
pub mod rank;

pub use filter::filter_points;
pub use geometry::{
    EARTH_RADIUS_KM, bearing_difference, deg_to_rad, haversine_distance, initial_bearing,
    rad_to_deg,
};
pub use normalize::normalize;
pub use rank::{
    MinMaxValues, RankOptions, RankWeights, min_max_values, rank_points_along_bearing, sort_points,
};

/// Default weight applied to the normalised distance-from-start signal.
pub const DEFAULT_DISTANCE_WEIGHT: f64 = 0.8;

/// Default weight applied to the normalised bearing-deviation signal.
pub const DEFAULT_BEARING_WEIGHT: f64 = 0.2;

/// Default bound, in degrees, on how far a point's bearing may deviate from
/// the travel bearing before the filter discards it.
pub const DEFAULT_BEARING_THRESHOLD: f64 = 45.0;
