//! # greeks_core: Foundation for the Options Greeks Analytics Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! greeks_core serves as the bottom layer of the 4-layer architecture, providing:
//! - Standard normal distribution primitives (`math::distributions`)
//! - Contract and market value types (`types::contract`, `types::market`)
//! - The Greeks result type (`types::greeks`)
//! - Date handling: `Date` (`types::time`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other greeks_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic and timestamps
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use greeks_core::math::distributions::norm_cdf;
//! use greeks_core::types::{Date, MarketSnapshot, OptionContract, OptionType};
//!
//! // Distribution primitives
//! let p = norm_cdf(0.0_f64);
//! assert!((p - 0.5).abs() < 1e-7);
//!
//! // Contract identity
//! let expiry = Date::from_ymd(2026, 12, 18).unwrap();
//! let contract = OptionContract::new("AAPL", 185.0_f64, expiry, OptionType::Call);
//! assert_eq!(contract.cache_key(), "AAPL-185-2026-12-18-CALL");
//!
//! // Market state
//! let market = MarketSnapshot::new(185.0_f64, 0.05, 0.25, 0.5);
//! assert_eq!(market.with_price(190.0).underlying_price, 190.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
