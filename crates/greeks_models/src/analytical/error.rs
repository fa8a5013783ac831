//! Error types for analytical Greeks operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to the analytical calculator

use thiserror::Error;

/// Analytical calculation errors.
///
/// Every variant is an invalid-input failure surfaced immediately to the
/// caller; the calculator never retries internally. An expired contract
/// (non-positive time to expiration) is NOT an error: it selects the
/// documented boundary branch of [`compute_greeks`](super::compute_greeks).
///
/// # Variants
/// - `InvalidSpot`: Non-positive underlying price
/// - `InvalidStrike`: Non-positive strike
/// - `InvalidVolatility`: Non-positive implied volatility
///
/// # Examples
/// ```
/// use greeks_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalyticalError {
    /// Invalid underlying price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid implied volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = 0");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidSpot { spot: -1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
