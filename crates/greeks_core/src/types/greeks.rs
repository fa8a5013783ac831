//! Greeks calculation result type.
//!
//! Provides [`GreeksResult<T>`], the immutable bundle of the five
//! first-order sensitivities produced by the analytical calculator.

use chrono::Utc;
use num_traits::Float;

/// The five Black-Scholes sensitivities of one option contract.
///
/// Invariants established by the calculator (for positive time to
/// expiration): `delta ∈ [-1, 1]`, `gamma ≥ 0`, `vega ≥ 0`. Theta follows
/// the per-year convention; no per-day scaling is applied.
///
/// `computed_at` is a UTC millisecond timestamp stamped at construction; it
/// identifies when the values were produced, not any property of the values
/// themselves, and the cache layer relies on its own insertion clock for
/// freshness.
///
/// # Examples
///
/// ```
/// use greeks_core::types::GreeksResult;
///
/// let greeks = GreeksResult::new(0.56_f64, 0.039, -8.9, 19.8, 12.9);
/// assert!(greeks.delta >= -1.0 && greeks.delta <= 1.0);
/// assert!(greeks.computed_at > 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult<T: Float> {
    /// Delta: ∂V/∂S (sensitivity to spot price)
    pub delta: T,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot)
    pub gamma: T,
    /// Theta: ∂V/∂t (time decay, per year)
    pub theta: T,
    /// Vega: ∂V/∂σ (sensitivity to volatility)
    pub vega: T,
    /// Rho: ∂V/∂r (sensitivity to interest rate)
    pub rho: T,
    /// UTC timestamp in milliseconds at which the values were computed
    pub computed_at: i64,
}

impl<T: Float> GreeksResult<T> {
    /// Creates a result from the five sensitivities, stamped with the
    /// current UTC time.
    pub fn new(delta: T, gamma: T, theta: T, vega: T, rho: T) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
            computed_at: Utc::now().timestamp_millis(),
        }
    }

    /// True when every sensitivity is finite.
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.theta.is_finite()
            && self.vega.is_finite()
            && self.rho.is_finite()
    }
}
