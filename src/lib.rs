//! Facade crate for the travelord ranking engine.
//!
//! Re-exports the core geometry, filtering, and ranking API so downstream
//! callers depend on a single crate. The `travelord` binary lives in the
//! `travelord-cli` workspace member.

#![forbid(unsafe_code)]

pub use travelord_core::{
    DEFAULT_BEARING_THRESHOLD, DEFAULT_BEARING_WEIGHT, DEFAULT_DISTANCE_WEIGHT, EARTH_RADIUS_KM,
    MinMaxValues, RankOptions, RankWeights, bearing_difference, deg_to_rad, filter_points,
    haversine_distance, initial_bearing, min_max_values, normalize, rad_to_deg,
    rank_points_along_bearing, sort_points,
};
