//! # greeks_risk: Scenario-Range Analytics
//!
//! ## Layer 3 (Risk) Role
//!
//! greeks_risk answers "how much could each Greek move under realistic
//! near-term market shifts" rather than "what is each Greek now". It
//! perturbs a base market snapshot across a fixed price/volatility/time
//! grid, evaluates the analytical calculator at every grid point, and
//! reduces each Greek's distribution to a `{mode, min, max}` envelope:
//! - `ScenarioGrid`: the perturbation axes and their clamps
//! - `RangeAnalyzer`: grid enumeration, parallel evaluation, reduction
//! - `GreekRange` / `GreekRangeSet`: the statistical envelope types
//!
//! Grid evaluation is embarrassingly parallel (each point is independent
//! and read-only on its inputs) and runs through rayon.

pub mod scenarios;

pub use scenarios::{GreekRange, GreekRangeSet, RangeAnalyzer, ScenarioGrid};
