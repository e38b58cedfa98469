//! Shared test harness modules for the travelord CLI.

use super::*;

mod rank_unit;
