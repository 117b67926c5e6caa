//! Facade crate for the PaceMatch run-discovery engine.
//!
//! This crate re-exports the core domain types so applications can depend on
//! a single package while the implementation lives in `pacematch-core`.

#![forbid(unsafe_code)]

pub use pacematch_core::{
    AvailabilityLevel, DayOfWeek, EARTH_RADIUS_MILES, PACE_WEIGHT, PROXIMITY_WEIGHT, PaceGroups,
    PaceRange, RankedRun, Run, RunValidationError, SeekerQuery, SeekerQueryValidationError,
    Terrain, haversine_miles, pace_score, proximity_score, rank, relevance_score,
};
