//! Market state for option pricing.
//!
//! Provides `MarketSnapshot`, the immutable bundle of market inputs that,
//! paired with an [`OptionContract`](super::contract::OptionContract), fully
//! parameterises a Black-Scholes Greeks computation.

use num_traits::Float;

/// Immutable snapshot of the market inputs to a Greeks computation.
///
/// The perturbation helpers return new snapshots rather than mutating in
/// place; the scenario layer builds its grid out of them.
///
/// # Examples
///
/// ```
/// use greeks_core::types::MarketSnapshot;
///
/// let base = MarketSnapshot::new(100.0_f64, 0.05, 0.20, 0.25);
/// let bumped = base.with_price(105.0);
/// assert_eq!(base.underlying_price, 100.0);
/// assert_eq!(bumped.underlying_price, 105.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot<T: Float> {
    /// Current price of the underlying (S), must be positive
    pub underlying_price: T,
    /// Annualised risk-free interest rate (r)
    pub risk_free_rate: T,
    /// Annualised implied volatility (σ), must be positive
    pub implied_volatility: T,
    /// Time to expiration in years (T); non-positive values select the
    /// expired-contract branch of the calculator
    pub time_to_expiration: T,
}

impl<T: Float> MarketSnapshot<T> {
    /// Creates a new market snapshot.
    ///
    /// # Arguments
    /// * `underlying_price` - Current price of the underlying (S)
    /// * `risk_free_rate` - Annualised risk-free rate (r)
    /// * `implied_volatility` - Annualised implied volatility (σ)
    /// * `time_to_expiration` - Time to expiration in years (T)
    pub fn new(
        underlying_price: T,
        risk_free_rate: T,
        implied_volatility: T,
        time_to_expiration: T,
    ) -> Self {
        Self {
            underlying_price,
            risk_free_rate,
            implied_volatility,
            time_to_expiration,
        }
    }

    /// Returns a copy with a different underlying price.
    #[inline]
    pub fn with_price(&self, underlying_price: T) -> Self {
        Self {
            underlying_price,
            ..*self
        }
    }

    /// Returns a copy with a different implied volatility.
    #[inline]
    pub fn with_volatility(&self, implied_volatility: T) -> Self {
        Self {
            implied_volatility,
            ..*self
        }
    }

    /// Returns a copy with a different time to expiration.
    #[inline]
    pub fn with_time_to_expiration(&self, time_to_expiration: T) -> Self {
        Self {
            time_to_expiration,
            ..*self
        }
    }
}
