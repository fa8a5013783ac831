//! Perturbation grid over market snapshots.
//!
//! Defines the three perturbation axes (price, volatility, time) and the
//! cross-product enumeration that turns one base snapshot into the full
//! scenario set.

use greeks_core::types::time::DAYS_PER_YEAR;
use greeks_core::types::MarketSnapshot;
use num_traits::Float;

/// Cross-product grid of market perturbations.
///
/// The default axes cover realistic near-term moves:
/// - price: {-5%, -2.5%, 0%, +2.5%, +5%}, multiplicative
/// - volatility: {-20%, -10%, 0%, +10%, +20%}, multiplicative
/// - time: {-7, -1, 0, +1, +7} days, additive
///
/// Perturbed volatilities are clamped at a small positive floor so the
/// calculator never sees a non-positive σ, and perturbed expiries are
/// floored at 0.01 years so the expired-contract branch cannot dominate
/// the grid.
///
/// # Examples
///
/// ```
/// use greeks_core::types::MarketSnapshot;
/// use greeks_risk::scenarios::ScenarioGrid;
///
/// let grid = ScenarioGrid::<f64>::default();
/// assert_eq!(grid.len(), 125);
///
/// let base = MarketSnapshot::new(100.0, 0.05, 0.20, 0.25);
/// let scenarios = grid.scenarios(&base);
/// assert_eq!(scenarios.len(), 125);
/// assert!(scenarios.iter().all(|m| m.implied_volatility > 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct ScenarioGrid<T: Float> {
    /// Relative price shifts
    price_shifts: Vec<T>,
    /// Relative volatility shifts
    vol_shifts: Vec<T>,
    /// Additive time shifts, in days
    time_shifts_days: Vec<T>,
    /// Lower clamp for perturbed volatility
    vol_floor: T,
    /// Lower clamp for perturbed expiry, in years
    time_floor: T,
}

impl<T: Float> Default for ScenarioGrid<T> {
    fn default() -> Self {
        let pct = |v: f64| T::from(v).unwrap();
        Self {
            price_shifts: vec![pct(-0.05), pct(-0.025), T::zero(), pct(0.025), pct(0.05)],
            vol_shifts: vec![pct(-0.20), pct(-0.10), T::zero(), pct(0.10), pct(0.20)],
            time_shifts_days: vec![pct(-7.0), pct(-1.0), T::zero(), pct(1.0), pct(7.0)],
            vol_floor: pct(0.01),
            time_floor: pct(0.01),
        }
    }
}

impl<T: Float> ScenarioGrid<T> {
    /// Creates the default grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the relative price shifts.
    pub fn with_price_shifts(mut self, shifts: Vec<T>) -> Self {
        self.price_shifts = shifts;
        self
    }

    /// Replaces the relative volatility shifts.
    pub fn with_vol_shifts(mut self, shifts: Vec<T>) -> Self {
        self.vol_shifts = shifts;
        self
    }

    /// Replaces the additive time shifts (in days).
    pub fn with_time_shifts_days(mut self, shifts: Vec<T>) -> Self {
        self.time_shifts_days = shifts;
        self
    }

    /// Number of scenarios in the cross-product.
    pub fn len(&self) -> usize {
        self.price_shifts.len() * self.vol_shifts.len() * self.time_shifts_days.len()
    }

    /// True when any axis is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies one (price, vol, time) shift triple to the base snapshot.
    fn perturb(&self, base: &MarketSnapshot<T>, dp: T, dv: T, dt_days: T) -> MarketSnapshot<T> {
        let one = T::one();
        let days_per_year = T::from(DAYS_PER_YEAR).unwrap();

        let price = base.underlying_price * (one + dp);
        let vol = (base.implied_volatility * (one + dv)).max(self.vol_floor);
        let expiry = (base.time_to_expiration + dt_days / days_per_year).max(self.time_floor);

        MarketSnapshot::new(price, base.risk_free_rate, vol, expiry)
    }

    /// Enumerates the full cross-product of perturbed snapshots.
    ///
    /// The base risk-free rate carries through unchanged; only price,
    /// volatility, and time are perturbed.
    pub fn scenarios(&self, base: &MarketSnapshot<T>) -> Vec<MarketSnapshot<T>> {
        let mut out = Vec::with_capacity(self.len());
        for &dp in &self.price_shifts {
            for &dv in &self.vol_shifts {
                for &dt in &self.time_shifts_days {
                    out.push(self.perturb(base, dp, dv, dt));
                }
            }
        }
        out
    }
}
