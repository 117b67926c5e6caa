//! Core domain types and ranking operations for the PaceMatch engine.
//!
//! Runs, the pace vocabularies, the haversine distance calculator, the
//! scoring tables, and the [`rank`] operation live here. Everything is pure
//! library computation: callers supply validated run records and a seeker
//! query, and receive every run annotated with its relevance, distance, and
//! matched availability, most relevant first.

#![forbid(unsafe_code)]

pub mod distance;
pub mod pace;
pub mod ranker;
pub mod run;
pub mod scoring;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::{EARTH_RADIUS_MILES, haversine_miles};
pub use pace::{AvailabilityLevel, PaceRange};
pub use ranker::{RankedRun, SeekerQuery, SeekerQueryValidationError, rank};
pub use run::{DayOfWeek, PaceGroups, Run, RunValidationError, Terrain};
pub use scoring::{PACE_WEIGHT, PROXIMITY_WEIGHT, pace_score, proximity_score, relevance_score};
