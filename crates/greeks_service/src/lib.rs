//! # greeks_service: Service Layer for the Options Greeks Analytics Engine
//!
//! ## Layer 4 (Service) Role
//!
//! greeks_service wraps the pure analytics layers with the runtime concerns
//! the dashboard integration needs:
//! - `GreeksCache`: TTL-keyed cache over the analytical calculator
//! - `UpdateChannel`: synchronous publish/subscribe for fresh results
//! - `FeedSource` + feed pump: reconnecting upstream market data ingestion
//! - `GreeksEngine`: the constructor-injected facade tying it together
//! - `EngineConfig`: runtime configuration with TOML support
//!
//! The engine owns all mutable state; multiple independent instances can
//! coexist, which keeps tests hermetic and rules out global singletons.

pub mod cache;
pub mod channel;
pub mod config;
pub mod engine;
pub mod feed;

pub use cache::GreeksCache;
pub use channel::{ChannelError, ChannelStatistics, Subscription, UpdateChannel};
pub use config::{ConfigError, EngineConfig};
pub use engine::GreeksEngine;
pub use feed::{FeedError, FeedSource, MarketTick};
