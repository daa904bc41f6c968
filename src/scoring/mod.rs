//! Word scoring
//!
//! Maps board letter placements plus bonus-square geometry to a point value.

mod engine;

pub use engine::{ScoreBreakdown, score_breakdown, score_placements};
