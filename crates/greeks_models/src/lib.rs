//! # greeks_models: Analytical Greeks Calculation
//!
//! ## Layer 2 (Analytics) Role
//!
//! greeks_models sits on top of `greeks_core` and provides the closed-form
//! Black-Scholes sensitivities for European option contracts:
//! - `BlackScholesGreeks`: per-Greek closed forms over one market state
//! - `compute_greeks`: contract-level entry point with input validation and
//!   the expired-contract branch
//! - `AnalyticalError`: structured validation failures
//!
//! The computation is pure and CPU-bound with no suspension points; it may
//! run on any thread, including the caller's.

pub mod analytical;

pub use analytical::{compute_greeks, AnalyticalError, BlackScholesGreeks};
