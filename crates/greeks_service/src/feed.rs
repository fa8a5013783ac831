//! Upstream market data feed abstraction.
//!
//! The engine treats the external feed as a stream of ticks behind
//! [`FeedSource`]; the concrete transport (websocket, simulator, replay
//! file) lives with the integration, not here.

use async_channel::Receiver;
use async_trait::async_trait;
use thiserror::Error;

use greeks_core::types::{MarketSnapshot, OptionContract};

/// One upstream quote: a contract plus its refreshed market state.
#[derive(Clone, Debug)]
pub struct MarketTick {
    /// The contract this tick refreshes
    pub contract: OptionContract<f64>,
    /// The refreshed market inputs
    pub snapshot: MarketSnapshot<f64>,
}

/// Feed errors.
///
/// These never reach subscribers: the feed pump absorbs them and retries
/// after its backoff delay. To a consumer a broken feed is only visible as
/// an absence of further updates.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The upstream connection could not be established.
    #[error("feed connection failed: {0}")]
    ConnectFailed(String),
}

/// A persistent upstream source of market ticks.
///
/// `connect` yields a receiver of ticks; the stream ending (all senders
/// dropped) models connection loss. The engine's feed pump reconnects
/// indefinitely with a fixed delay, so implementations should make
/// `connect` cheap to retry.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Establishes the upstream connection and starts streaming ticks.
    async fn connect(&self) -> Result<Receiver<MarketTick>, FeedError>;
}
