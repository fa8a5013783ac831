//! Range analysis over the scenario grid.

use num_traits::Float;
use rayon::prelude::*;

use greeks_core::types::{GreeksResult, MarketSnapshot, OptionContract};
use greeks_models::analytical::{compute_greeks, AnalyticalError};

use super::grid::ScenarioGrid;
use super::range::{GreekRange, GreekRangeSet};

/// Computes `{mode, min, max}` envelopes for every Greek of one contract.
///
/// The analyzer deliberately bypasses any caching layer: every grid point
/// is a distinct market scenario, so cached single-snapshot results are of
/// no use to it.
///
/// # Examples
///
/// ```
/// use greeks_core::types::{Date, MarketSnapshot, OptionContract, OptionType};
/// use greeks_risk::scenarios::RangeAnalyzer;
///
/// let expiry = Date::from_ymd(2026, 12, 18).unwrap();
/// let contract = OptionContract::new("AAPL", 100.0_f64, expiry, OptionType::Call);
/// let market = MarketSnapshot::new(100.0, 0.05, 0.20, 0.25);
///
/// let analyzer = RangeAnalyzer::new();
/// let ranges = analyzer.analyze(&contract, &market, None).unwrap();
/// assert!(ranges.delta.min <= ranges.delta.mode);
/// assert!(ranges.delta.mode <= ranges.delta.max);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RangeAnalyzer<T: Float> {
    grid: ScenarioGrid<T>,
}

impl<T: Float + Send + Sync> RangeAnalyzer<T> {
    /// Creates an analyzer over the default 5×5×5 grid.
    pub fn new() -> Self {
        Self {
            grid: ScenarioGrid::default(),
        }
    }

    /// Creates an analyzer over a custom grid.
    pub fn with_grid(grid: ScenarioGrid<T>) -> Self {
        Self { grid }
    }

    /// Returns the grid in use.
    pub fn grid(&self) -> &ScenarioGrid<T> {
        &self.grid
    }

    /// Analyzes one contract across the scenario grid.
    ///
    /// `mode` comes from `base_greeks` when the caller already holds the
    /// base-case result (e.g. a fresh cache entry); otherwise it is computed
    /// directly from the unperturbed snapshot. Either way it equals the
    /// plain base-case computation, since the calculator is a pure function
    /// of its inputs.
    ///
    /// Grid evaluation runs in parallel through rayon; each scenario is
    /// independent and read-only on its inputs.
    ///
    /// # Errors
    /// Propagates `AnalyticalError` from the calculator. The grid's clamps
    /// keep perturbed volatility and expiry valid, so an error here always
    /// reflects invalid base inputs.
    pub fn analyze(
        &self,
        contract: &OptionContract<T>,
        base_market: &MarketSnapshot<T>,
        base_greeks: Option<&GreeksResult<T>>,
    ) -> Result<GreekRangeSet<T>, AnalyticalError> {
        let mode = match base_greeks {
            Some(greeks) => greeks.clone(),
            None => compute_greeks(contract, base_market)?,
        };

        let scenarios = self.grid.scenarios(base_market);
        let evaluated: Result<Vec<GreeksResult<T>>, AnalyticalError> = scenarios
            .par_iter()
            .map(|market| compute_greeks(contract, market))
            .collect();
        let evaluated = evaluated?;

        Ok(GreekRangeSet {
            delta: envelope(mode.delta, &evaluated, |g| g.delta),
            gamma: envelope(mode.gamma, &evaluated, |g| g.gamma),
            theta: envelope(mode.theta, &evaluated, |g| g.theta),
            vega: envelope(mode.vega, &evaluated, |g| g.vega),
            rho: envelope(mode.rho, &evaluated, |g| g.rho),
        })
    }
}

/// Reduces one Greek's grid values to a `{mode, min, max}` envelope.
fn envelope<T: Float>(
    mode: T,
    evaluated: &[GreeksResult<T>],
    greek: impl Fn(&GreeksResult<T>) -> T,
) -> GreekRange<T> {
    if evaluated.is_empty() {
        return GreekRange::new(mode, mode, mode);
    }

    let mut min = T::infinity();
    let mut max = T::neg_infinity();
    for result in evaluated {
        let value = greek(result);
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    GreekRange::new(mode, min, max)
}
