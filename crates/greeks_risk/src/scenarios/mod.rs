//! Scenario grids and Greek range analysis.
//!
//! Provides infrastructure for bounding each Greek's plausible near-term
//! range:
//! - `ScenarioGrid`: cross-product of discrete perturbation levels
//! - `GreekRange` / `GreekRangeSet`: per-Greek `{mode, min, max}` envelopes
//! - `RangeAnalyzer`: evaluation and reduction over the grid

mod analyzer;
mod grid;
mod range;

pub use analyzer::RangeAnalyzer;
pub use grid::ScenarioGrid;
pub use range::{GreekRange, GreekRangeSet};
