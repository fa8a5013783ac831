//! Black-Scholes Greeks for European options.
//!
//! This module provides closed-form first-order sensitivities (delta, gamma,
//! theta, vega, rho) under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//! - Delta: call N(d₁), put N(d₁) - 1
//! - Gamma: φ(d₁) / (S·σ·√T)
//! - Theta: -(S·σ·φ(d₁))/(2√T) ∓ r·K·e^(-rT)·N(±d₂)
//! - Vega: S·√T·φ(d₁)
//! - Rho: call K·T·e^(-rT)·N(d₂), put -K·T·e^(-rT)·N(-d₂)
//!
//! Theta is reported per year; no per-day division is applied.

use num_traits::Float;

use greeks_core::math::distributions::{norm_cdf, norm_pdf};
use greeks_core::types::{GreeksResult, MarketSnapshot, OptionContract};

use super::error::AnalyticalError;

/// Black-Scholes sensitivities over one market state.
///
/// Holds the spot, rate, and volatility; strike and expiry are supplied per
/// call so one model instance can sweep a chain of contracts.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use greeks_models::analytical::BlackScholesGreeks;
///
/// let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_delta = model.delta(100.0, 0.25, true);
/// let put_delta = model.delta(100.0, 0.25, false);
///
/// // Put-call delta parity: Δ_call - Δ_put = 1
/// assert!((call_delta - put_delta - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholesGreeks<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Implied volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholesGreeks<T> {
    /// Creates a new model over one market state.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Implied volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use greeks_models::analytical::BlackScholesGreeks;
    ///
    /// assert!(BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholesGreeks::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholesGreeks::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the implied volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Callers must ensure `expiry > 0`; the public Greek methods branch to
    /// the expiration boundary before reaching this term.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    ///
    /// Callers must ensure `expiry > 0`.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    ///
    /// At or past expiry the contract has collapsed to its exercise payoff:
    /// delta is exactly +1 for calls and -1 for puts, with no remaining
    /// sensitivity to anything else.
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, is_call: bool) -> T {
        let one = T::one();

        if expiry <= T::zero() {
            return if is_call { one } else { -one };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));

        if is_call {
            n_d1
        } else {
            n_d1 - one
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts, always
    /// non-negative. Zero at or past expiry.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if expiry <= T::zero() {
            return T::zero();
        }

        let sqrt_t = expiry.sqrt();
        norm_pdf(self.d1(strike, expiry)) / (self.spot * self.volatility * sqrt_t)
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts, always
    /// non-negative. Zero at or past expiry.
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if expiry <= T::zero() {
            return T::zero();
        }

        let sqrt_t = expiry.sqrt();
        self.spot * sqrt_t * norm_pdf(self.d1(strike, expiry))
    }

    /// Computes Theta (∂V/∂t), per year.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// Usually negative (time decay). Zero at or past expiry.
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, is_call: bool) -> T {
        if expiry <= T::zero() {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = (-self.rate * expiry).exp();
        let two = T::from(2.0).unwrap();

        let decay = -(self.spot * self.volatility * norm_pdf(d1)) / (two * sqrt_t);

        if is_call {
            decay - self.rate * strike * discount * norm_cdf(d2)
        } else {
            decay + self.rate * strike * discount * norm_cdf(-d2)
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    ///
    /// Zero at or past expiry.
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, is_call: bool) -> T {
        if expiry <= T::zero() {
            return T::zero();
        }

        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        if is_call {
            strike * expiry * discount * norm_cdf(d2)
        } else {
            -strike * expiry * discount * norm_cdf(-d2)
        }
    }
}

/// Computes the five Greeks for one contract under one market snapshot.
///
/// This is the contract-level entry point: it validates the numeric
/// preconditions, handles the expired-contract boundary, and assembles a
/// [`GreeksResult`].
///
/// # Expiration boundary
///
/// When `market.time_to_expiration <= 0` the contract has expired and the
/// result is exact: delta = +1 (call) / -1 (put), all other sensitivities 0.
/// This is authoritative expiration behaviour, not a guard against division
/// by zero, and it is not an error. Input validation still runs first, so a
/// non-positive spot or volatility is rejected even for expired contracts.
///
/// # Errors
/// - `AnalyticalError::InvalidSpot` if `market.underlying_price <= 0`
/// - `AnalyticalError::InvalidVolatility` if `market.implied_volatility <= 0`
/// - `AnalyticalError::InvalidStrike` if `contract.strike() <= 0`
///
/// # Examples
/// ```
/// use greeks_core::types::{Date, MarketSnapshot, OptionContract, OptionType};
/// use greeks_models::analytical::compute_greeks;
///
/// let expiry = Date::from_ymd(2026, 12, 18).unwrap();
/// let contract = OptionContract::new("AAPL", 100.0_f64, expiry, OptionType::Call);
/// let market = MarketSnapshot::new(100.0, 0.05, 0.20, 0.25);
///
/// let greeks = compute_greeks(&contract, &market).unwrap();
/// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
/// assert!(greeks.gamma >= 0.0);
/// ```
pub fn compute_greeks<T: Float>(
    contract: &OptionContract<T>,
    market: &MarketSnapshot<T>,
) -> Result<GreeksResult<T>, AnalyticalError> {
    let zero = T::zero();
    let one = T::one();

    let model = BlackScholesGreeks::new(
        market.underlying_price,
        market.risk_free_rate,
        market.implied_volatility,
    )?;

    let strike = contract.strike();
    if strike <= zero {
        return Err(AnalyticalError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(0.0),
        });
    }

    let expiry = market.time_to_expiration;
    let is_call = contract.option_type().is_call();

    if expiry <= zero {
        let delta = if is_call { one } else { -one };
        return Ok(GreeksResult::new(delta, zero, zero, zero, zero));
    }

    Ok(GreeksResult::new(
        model.delta(strike, expiry, is_call),
        model.gamma(strike, expiry),
        model.theta(strike, expiry, is_call),
        model.vega(strike, expiry),
        model.rho(strike, expiry, is_call),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use greeks_core::types::{Date, OptionType};
    use proptest::prelude::*;

    fn contract(strike: f64, option_type: OptionType) -> OptionContract<f64> {
        let expiry = Date::from_ymd(2026, 12, 18).unwrap();
        OptionContract::new("TEST", strike, expiry, option_type)
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(model.spot(), 100.0);
        assert_eq!(model.rate(), 0.05);
        assert_eq!(model.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        let result = BlackScholesGreeks::new(-100.0_f64, 0.05, 0.2);
        assert_eq!(
            result.unwrap_err(),
            AnalyticalError::InvalidSpot { spot: -100.0 }
        );

        assert!(BlackScholesGreeks::new(0.0_f64, 0.05, 0.2).is_err());
    }

    #[test]
    fn test_new_invalid_volatility() {
        let result = BlackScholesGreeks::new(100.0_f64, 0.05, -0.2);
        assert_eq!(
            result.unwrap_err(),
            AnalyticalError::InvalidVolatility { volatility: -0.2 }
        );

        assert!(BlackScholesGreeks::new(100.0_f64, 0.05, 0.0).is_err());
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholesGreeks::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_quarter_year() {
        // S=K=100, r=0.05, σ=0.2, T=0.25:
        // d1 = (0 + (0.05 + 0.02)·0.25) / (0.2·0.5) = 0.175
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(model.d1(100.0, 0.25), 0.175, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_relationship() {
        // d2 = d1 - σ√T
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        let d1 = model.d1(105.0, 0.5);
        let d2 = model.d2(105.0, 0.5);
        assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_d1_sign_follows_moneyness() {
        let itm = BlackScholesGreeks::new(150.0_f64, 0.05, 0.2).unwrap();
        assert!(itm.d1(100.0, 1.0) > 1.0);

        let otm = BlackScholesGreeks::new(50.0_f64, 0.05, 0.2).unwrap();
        assert!(otm.d1(100.0, 1.0) < -1.0);
    }

    // ==========================================================
    // Reference Value Tests
    // ==========================================================
    //
    // S=100, K=100, r=0.05, σ=0.2, T=1: d1 = 0.35, d2 = 0.15,
    // N(0.35) ≈ 0.636831, N(0.15) ≈ 0.559618, φ(0.35) ≈ 0.375240.

    #[test]
    fn test_delta_reference_values() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(model.delta(100.0, 1.0, true), 0.636831, epsilon = 1e-4);
        assert_relative_eq!(model.delta(100.0, 1.0, false), -0.363169, epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_reference_value() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(model.gamma(100.0, 1.0), 0.0187620, epsilon = 1e-5);
    }

    #[test]
    fn test_vega_reference_value() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(model.vega(100.0, 1.0), 37.5240, epsilon = 1e-3);
    }

    #[test]
    fn test_theta_reference_values() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(model.theta(100.0, 1.0, true), -6.41403, epsilon = 1e-3);
        assert_relative_eq!(model.theta(100.0, 1.0, false), -1.65788, epsilon = 1e-3);
    }

    #[test]
    fn test_rho_reference_values() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(model.rho(100.0, 1.0, true), 53.2325, epsilon = 1e-3);
        assert_relative_eq!(model.rho(100.0, 1.0, false), -41.8905, epsilon = 1e-3);
    }

    // ==========================================================
    // Greeks Relationship Tests
    // ==========================================================

    #[test]
    fn test_delta_call_bounds() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let delta = model.delta(strike, 1.0, true);
            assert!((0.0..=1.0).contains(&delta), "call delta out of bounds");
        }
    }

    #[test]
    fn test_delta_put_bounds() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let delta = model.delta(strike, 1.0, false);
            assert!((-1.0..=0.0).contains(&delta), "put delta out of bounds");
        }
    }

    #[test]
    fn test_delta_parity() {
        // Δ_call - Δ_put = 1 since N(d1) - (N(d1) - 1) = 1
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 100.0, 120.0] {
            let call = model.delta(strike, 0.5, true);
            let put = model.delta(strike, 0.5, false);
            assert_relative_eq!(call - put, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        let gamma_atm = model.gamma(100.0, 1.0);
        assert!(gamma_atm >= model.gamma(80.0, 1.0));
        assert!(gamma_atm >= model.gamma(120.0, 1.0));
    }

    #[test]
    fn test_gamma_vs_delta_finite_diff() {
        // Gamma should match the numerical derivative of delta in spot.
        let h = 0.01;
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        let up = BlackScholesGreeks::new(100.0 + h, 0.05, 0.2).unwrap();
        let dn = BlackScholesGreeks::new(100.0 - h, 0.05, 0.2).unwrap();

        let fd = (up.delta(100.0, 1.0, true) - dn.delta(100.0, 1.0, true)) / (2.0 * h);
        assert_relative_eq!(model.gamma(100.0, 1.0), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_theta_call_typically_negative() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(model.theta(100.0, 1.0, true) < 0.0);
    }

    #[test]
    fn test_rho_signs() {
        let model = BlackScholesGreeks::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(model.rho(100.0, 1.0, true) > 0.0);
        assert!(model.rho(100.0, 1.0, false) < 0.0);
    }

    // ==========================================================
    // compute_greeks Tests
    // ==========================================================

    #[test]
    fn test_compute_greeks_atm_call() {
        // Concrete scenario: K=100 call, S=100, r=0.05, σ=0.2, T=0.25.
        // d1 = 0.175 so delta = N(0.175) ≈ 0.5695 and
        // gamma = φ(0.175)/(100·0.2·0.5) ≈ 0.03928.
        let market = MarketSnapshot::new(100.0, 0.05, 0.20, 0.25);
        let greeks = compute_greeks(&contract(100.0, OptionType::Call), &market).unwrap();

        assert_relative_eq!(greeks.delta, 0.5695, epsilon = 1e-3);
        assert_relative_eq!(greeks.gamma, 0.03928, epsilon = 1e-4);
        assert!(greeks.theta < 0.0);
        assert!(greeks.vega > 0.0);
        assert!(greeks.rho > 0.0);
    }

    #[test]
    fn test_compute_greeks_matches_model_methods() {
        let market = MarketSnapshot::new(110.0, 0.03, 0.35, 0.6);
        let greeks = compute_greeks(&contract(105.0, OptionType::Put), &market).unwrap();

        let model = BlackScholesGreeks::new(110.0, 0.03, 0.35).unwrap();
        assert_eq!(greeks.delta, model.delta(105.0, 0.6, false));
        assert_eq!(greeks.gamma, model.gamma(105.0, 0.6));
        assert_eq!(greeks.theta, model.theta(105.0, 0.6, false));
        assert_eq!(greeks.vega, model.vega(105.0, 0.6));
        assert_eq!(greeks.rho, model.rho(105.0, 0.6, false));
    }

    #[test]
    fn test_compute_greeks_expired_call() {
        let market = MarketSnapshot::new(100.0, 0.05, 0.20, 0.0);
        let greeks = compute_greeks(&contract(100.0, OptionType::Call), &market).unwrap();

        assert_eq!(greeks.delta, 1.0);
        assert_eq!(greeks.gamma, 0.0);
        assert_eq!(greeks.theta, 0.0);
        assert_eq!(greeks.vega, 0.0);
        assert_eq!(greeks.rho, 0.0);
    }

    #[test]
    fn test_compute_greeks_expired_put() {
        let market = MarketSnapshot::new(100.0, 0.05, 0.20, -0.1);
        let greeks = compute_greeks(&contract(100.0, OptionType::Put), &market).unwrap();

        assert_eq!(greeks.delta, -1.0);
        assert_eq!(greeks.gamma, 0.0);
    }

    #[test]
    fn test_compute_greeks_near_expiry_moneyness() {
        // At the 0.01y clamp, deep ITM call delta is near 1 and deep OTM
        // near 0; puts mirror with a sign flip.
        let itm = MarketSnapshot::new(150.0, 0.05, 0.20, 0.01);
        let call = compute_greeks(&contract(100.0, OptionType::Call), &itm).unwrap();
        assert!(call.delta > 0.99);

        let otm = MarketSnapshot::new(50.0, 0.05, 0.20, 0.01);
        let call = compute_greeks(&contract(100.0, OptionType::Call), &otm).unwrap();
        assert!(call.delta < 0.01);

        let put = compute_greeks(&contract(100.0, OptionType::Put), &itm).unwrap();
        assert!(put.delta > -0.01);
    }

    #[test]
    fn test_compute_greeks_invalid_inputs() {
        let market = MarketSnapshot::new(100.0, 0.05, 0.20, 0.25);

        let bad_strike = compute_greeks(&contract(-5.0, OptionType::Call), &market);
        assert_eq!(
            bad_strike.unwrap_err(),
            AnalyticalError::InvalidStrike { strike: -5.0 }
        );

        let bad_spot = MarketSnapshot::new(0.0, 0.05, 0.20, 0.25);
        assert!(matches!(
            compute_greeks(&contract(100.0, OptionType::Call), &bad_spot),
            Err(AnalyticalError::InvalidSpot { .. })
        ));

        let bad_vol = MarketSnapshot::new(100.0, 0.05, -0.2, 0.25);
        assert!(matches!(
            compute_greeks(&contract(100.0, OptionType::Call), &bad_vol),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_compute_greeks_validation_beats_expiry_branch() {
        // An expired contract with invalid volatility is still rejected.
        let market = MarketSnapshot::new(100.0, 0.05, 0.0, 0.0);
        assert!(compute_greeks(&contract(100.0, OptionType::Call), &market).is_err());
    }

    #[test]
    fn test_f32_compatibility() {
        let model = BlackScholesGreeks::new(100.0_f32, 0.05_f32, 0.2_f32).unwrap();
        let delta = model.delta(100.0_f32, 1.0_f32, true);
        assert!(delta > 0.0_f32 && delta < 1.0_f32);
    }

    // ==========================================================
    // Property Tests
    // ==========================================================

    proptest! {
        #[test]
        fn prop_greeks_invariants(
            spot in 10.0..500.0_f64,
            strike in 10.0..500.0_f64,
            rate in -0.02..0.10_f64,
            vol in 0.05..1.0_f64,
            expiry in 0.02..2.0_f64,
        ) {
            let market = MarketSnapshot::new(spot, rate, vol, expiry);
            let call = compute_greeks(&contract(strike, OptionType::Call), &market).unwrap();
            let put = compute_greeks(&contract(strike, OptionType::Put), &market).unwrap();

            prop_assert!(call.delta >= 0.0 && call.delta <= 1.0);
            prop_assert!(put.delta >= -1.0 && put.delta <= 0.0);
            prop_assert!(call.gamma >= 0.0);
            prop_assert!(call.vega >= 0.0);

            // Gamma and vega are side-independent
            prop_assert!((call.gamma - put.gamma).abs() < 1e-12);
            prop_assert!((call.vega - put.vega).abs() < 1e-12);

            // Δ_call - Δ_put = 1 within floating tolerance
            prop_assert!((call.delta - put.delta - 1.0).abs() < 1e-6);
        }
    }
}
