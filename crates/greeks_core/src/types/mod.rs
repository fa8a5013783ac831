//! Value types shared by the analytics and service layers.
//!
//! All entities here are plain values with no cross-references; the only
//! mutable state in the engine lives in the service layer's cache.

pub mod contract;
pub mod error;
pub mod greeks;
pub mod market;
pub mod time;

pub use contract::{OptionContract, OptionType};
pub use error::DateError;
pub use greeks::GreeksResult;
pub use market::MarketSnapshot;
pub use time::Date;
