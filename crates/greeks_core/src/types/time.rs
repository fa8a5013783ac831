//! Date type for contract expirations.
//!
//! Provides `Date`, a type-safe wrapper around `chrono::NaiveDate` with
//! ISO 8601 parsing and the day arithmetic needed for expiration handling.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Days per year used when converting calendar distances to year fractions.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Type-safe date wrapper around `chrono::NaiveDate`.
///
/// Provides ISO 8601 serialisation and standard date arithmetic. Contract
/// expirations are calendar dates; time-to-expiration in years is derived
/// from the day distance to a valuation date.
///
/// # Examples
///
/// ```
/// use greeks_core::types::Date;
///
/// let date = Date::from_ymd(2026, 6, 19).unwrap();
/// assert_eq!(date.to_string(), "2026-06-19");
///
/// let parsed: Date = "2026-06-19".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2026, 1, 1).unwrap();
/// assert_eq!(date - start, 169);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2026)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Errors
    /// `DateError::InvalidDate` if the components do not form a valid date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format (YYYY-MM-DD).
    ///
    /// # Errors
    /// `DateError::ParseError` if the string is not a valid ISO 8601 date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Year fraction from `valuation` to this date (ACT/365).
    ///
    /// Negative when the date lies before the valuation date; callers decide
    /// how to treat expired contracts.
    ///
    /// # Examples
    /// ```
    /// use greeks_core::types::Date;
    ///
    /// let valuation = Date::from_ymd(2026, 1, 1).unwrap();
    /// let expiry = Date::from_ymd(2026, 4, 2).unwrap();
    /// let yf = expiry.years_from(valuation);
    /// assert!((yf - 91.0 / 365.0).abs() < 1e-12);
    /// ```
    pub fn years_from(&self, valuation: Date) -> f64 {
        (*self - valuation) as f64 / DAYS_PER_YEAR
    }

    /// Returns the underlying `NaiveDate` for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Number of days from `rhs` to `self`.
    fn sub(self, rhs: Self) -> i64 {
        (self.0 - rhs.0).num_days()
    }
}
