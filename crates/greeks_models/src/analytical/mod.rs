//! Analytical (closed-form) Greeks calculations.
//!
//! This module provides:
//! - `BlackScholesGreeks`: Black-Scholes sensitivities for European options
//! - `compute_greeks`: contract-level entry point
//! - `AnalyticalError`: validation errors

mod black_scholes;
mod error;

pub use black_scholes::{compute_greeks, BlackScholesGreeks};
pub use error::AnalyticalError;
