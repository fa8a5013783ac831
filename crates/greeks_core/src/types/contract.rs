//! Option contract identity.
//!
//! Provides `OptionContract`, the immutable description of a listed option,
//! and `OptionType` for the call/put distinction. A contract plus a
//! [`MarketSnapshot`](super::market::MarketSnapshot) fully parameterises a
//! Greeks computation.

use num_traits::Float;
use std::fmt;

use super::time::Date;

/// Call/put side of an option contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Returns true for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Canonical upper-case name, as used in contract keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "CALL",
            OptionType::Put => "PUT",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable description of one listed option contract.
///
/// Validation of numeric preconditions (positive strike) happens at the
/// calculator boundary, so a contract can be constructed freely from
/// whatever an upstream feed delivers.
///
/// # Examples
///
/// ```
/// use greeks_core::types::{Date, OptionContract, OptionType};
///
/// let expiry = Date::from_ymd(2026, 12, 18).unwrap();
/// let contract = OptionContract::new("MSFT", 380.0_f64, expiry, OptionType::Put);
/// assert_eq!(contract.underlying_symbol(), "MSFT");
/// assert_eq!(contract.cache_key(), "MSFT-380-2026-12-18-PUT");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract<T: Float> {
    /// Ticker of the underlying instrument
    underlying_symbol: String,
    /// Strike price (K)
    strike: T,
    /// Expiration date
    expiration: Date,
    /// Call or put
    option_type: OptionType,
}

impl<T: Float> OptionContract<T> {
    /// Creates a new option contract.
    ///
    /// # Arguments
    /// * `underlying_symbol` - Ticker of the underlying instrument
    /// * `strike` - Strike price
    /// * `expiration` - Expiration date
    /// * `option_type` - Call or put
    pub fn new(
        underlying_symbol: impl Into<String>,
        strike: T,
        expiration: Date,
        option_type: OptionType,
    ) -> Self {
        Self {
            underlying_symbol: underlying_symbol.into(),
            strike,
            expiration,
            option_type,
        }
    }

    /// Returns the underlying ticker.
    pub fn underlying_symbol(&self) -> &str {
        &self.underlying_symbol
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the expiration date.
    #[inline]
    pub fn expiration(&self) -> Date {
        self.expiration
    }

    /// Returns the call/put side.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Identity string keying this contract in the Greeks cache.
    ///
    /// Format: `{symbol}-{strike}-{expiration}-{type}`. Two contracts with
    /// the same key are the same contract for caching purposes.
    pub fn cache_key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.underlying_symbol,
            self.strike.to_f64().unwrap_or(f64::NAN),
            self.expiration,
            self.option_type
        )
    }
}
