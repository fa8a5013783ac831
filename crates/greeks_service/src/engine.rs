//! Engine facade over the cache, analyzer, and update channel.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use greeks_core::types::{GreeksResult, MarketSnapshot, OptionContract};
use greeks_models::analytical::AnalyticalError;
use greeks_risk::scenarios::{GreekRangeSet, RangeAnalyzer};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::GreeksCache;
use crate::channel::{Subscription, UpdateChannel};
use crate::config::EngineConfig;
use crate::feed::FeedSource;

struct EngineInner {
    cache: GreeksCache,
    channel: UpdateChannel,
    analyzer: RangeAnalyzer<f64>,
    reconnect_delay: Duration,
    feed_task: Mutex<Option<JoinHandle<()>>>,
}

/// The options Greeks analytics engine.
///
/// All state is constructor-injected: the engine owns its cache and update
/// channel, so independent instances can coexist (one per test, one per
/// deployment). Cloning shares the same instance.
///
/// # Examples
///
/// ```
/// use greeks_core::types::{Date, MarketSnapshot, OptionContract, OptionType};
/// use greeks_service::{EngineConfig, GreeksEngine};
///
/// let engine = GreeksEngine::new(EngineConfig::default());
/// let expiry = Date::from_ymd(2026, 12, 18).unwrap();
/// let contract = OptionContract::new("AAPL", 185.0, expiry, OptionType::Call);
/// let market = MarketSnapshot::new(185.0, 0.05, 0.25, 0.5);
///
/// let greeks = engine.compute_greeks(&contract, &market).unwrap();
/// let ranges = engine.analyze_ranges(&contract, &market).unwrap();
/// assert_eq!(ranges.delta.mode, greeks.delta);
/// ```
#[derive(Clone)]
pub struct GreeksEngine {
    inner: Arc<EngineInner>,
}

impl GreeksEngine {
    /// Creates an engine from the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                cache: GreeksCache::new(config.cache_ttl()),
                channel: UpdateChannel::new(),
                analyzer: RangeAnalyzer::new(),
                reconnect_delay: config.reconnect_delay(),
                feed_task: Mutex::new(None),
            }),
        }
    }

    /// Computes (or serves from cache) the Greeks for one contract.
    ///
    /// # Errors
    /// `AnalyticalError` on invalid market or contract inputs.
    pub fn compute_greeks(
        &self,
        contract: &OptionContract<f64>,
        market: &MarketSnapshot<f64>,
    ) -> Result<GreeksResult<f64>, AnalyticalError> {
        self.inner.cache.get_or_compute(contract, market)
    }

    /// Runs the scenario-range analysis for one contract.
    ///
    /// Bypasses the cache: every grid point is a distinct market scenario.
    ///
    /// # Errors
    /// `AnalyticalError` on invalid base inputs.
    pub fn analyze_ranges(
        &self,
        contract: &OptionContract<f64>,
        market: &MarketSnapshot<f64>,
    ) -> Result<GreekRangeSet<f64>, AnalyticalError> {
        self.inner.analyzer.analyze(contract, market, None)
    }

    /// Registers a listener for freshly computed Greeks.
    pub fn subscribe_to_updates(
        &self,
        listener: impl Fn(&GreeksResult<f64>) + Send + Sync + 'static,
    ) -> Subscription {
        self.inner.channel.subscribe(listener)
    }

    /// Refreshes one contract from new market data and publishes the result.
    ///
    /// This is the feed pump's per-tick path: cache lookup or recompute,
    /// then a publish to all subscribers. A stopped channel is not a
    /// refresh failure; the computed value is still returned.
    ///
    /// # Errors
    /// `AnalyticalError` on invalid inputs; nothing is published then.
    pub fn refresh(
        &self,
        contract: &OptionContract<f64>,
        market: &MarketSnapshot<f64>,
    ) -> Result<GreeksResult<f64>, AnalyticalError> {
        let greeks = self.inner.cache.get_or_compute(contract, market)?;
        let _ = self.inner.channel.publish(&greeks);
        Ok(greeks)
    }

    /// Clears the cache, forcing recomputation on the next lookup.
    pub fn invalidate_cache(&self) {
        self.inner.cache.invalidate_all();
    }

    /// Read access to the cache (counters, TTL).
    pub fn cache(&self) -> &GreeksCache {
        &self.inner.cache
    }

    /// Read access to the update channel (statistics, stop state).
    pub fn channel(&self) -> &UpdateChannel {
        &self.inner.channel
    }

    /// Starts the background feed pump over the given source.
    ///
    /// Must be called within a tokio runtime. On each tick the pump
    /// refreshes the contract and publishes; on connection loss or connect
    /// failure it retries after the configured delay, indefinitely, until
    /// [`shutdown`](GreeksEngine::shutdown). The cache is invalidated on
    /// every successful (re)connect so stale pre-disconnect values cannot
    /// be served against the new stream.
    ///
    /// A second call replaces a previously started pump.
    pub fn start_feed(&self, source: Arc<dyn FeedSource>) {
        let engine = self.clone();
        let delay = self.inner.reconnect_delay;
        let task = tokio::spawn(run_feed(engine, source, delay));

        let mut slot = self.inner.feed_task.lock().expect("feed task slot poisoned");
        if let Some(previous) = slot.replace(task) {
            previous.abort();
        }
    }

    /// Stops the update channel and any running feed pump.
    pub fn shutdown(&self) {
        self.inner.channel.stop();
        if let Some(task) = self
            .inner
            .feed_task
            .lock()
            .expect("feed task slot poisoned")
            .take()
        {
            task.abort();
        }
    }
}

/// Feed pump: consume ticks, refresh, and reconnect forever on failure.
async fn run_feed(engine: GreeksEngine, source: Arc<dyn FeedSource>, delay: Duration) {
    while engine.inner.channel.is_running() {
        match source.connect().await {
            Ok(ticks) => {
                engine.invalidate_cache();
                info!("market data feed connected");
                while let Ok(tick) = ticks.recv().await {
                    if let Err(error) = engine.refresh(&tick.contract, &tick.snapshot) {
                        warn!(%error, "greeks refresh failed");
                    }
                }
                warn!("market data feed disconnected");
            }
            Err(error) => {
                warn!(%error, "feed connection attempt failed");
            }
        }

        if !engine.inner.channel.is_running() {
            break;
        }
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeks_core::types::{Date, OptionType};
    use greeks_models::analytical::compute_greeks;

    fn contract() -> OptionContract<f64> {
        let expiry = Date::from_ymd(2026, 12, 18).unwrap();
        OptionContract::new("AAPL", 185.0, expiry, OptionType::Call)
    }

    fn market() -> MarketSnapshot<f64> {
        MarketSnapshot::new(185.0, 0.05, 0.25, 0.5)
    }

    #[test]
    fn test_compute_greeks_is_cached() {
        let engine = GreeksEngine::new(EngineConfig::default());
        let first = engine.compute_greeks(&contract(), &market()).unwrap();
        let second = engine.compute_greeks(&contract(), &market()).unwrap();

        assert_eq!(engine.cache().computations(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_analyze_ranges_mode_matches_direct_computation() {
        let engine = GreeksEngine::new(EngineConfig::default());
        let ranges = engine.analyze_ranges(&contract(), &market()).unwrap();
        let direct = compute_greeks(&contract(), &market()).unwrap();

        assert_eq!(ranges.delta.mode, direct.delta);
        assert!(ranges.is_ordered());
    }

    #[test]
    fn test_analyze_ranges_bypasses_cache() {
        let engine = GreeksEngine::new(EngineConfig::default());
        engine.analyze_ranges(&contract(), &market()).unwrap();
        assert_eq!(engine.cache().computations(), 0);
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn test_refresh_publishes_to_subscribers() {
        let engine = GreeksEngine::new(EngineConfig::default());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = engine.subscribe_to_updates(move |g| sink.lock().unwrap().push(g.delta));

        let greeks = engine.refresh(&contract(), &market()).unwrap();
        assert_eq!(seen.lock().unwrap().as_slice(), &[greeks.delta]);
    }

    #[test]
    fn test_refresh_with_invalid_inputs_publishes_nothing() {
        let engine = GreeksEngine::new(EngineConfig::default());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = engine.subscribe_to_updates(move |g| sink.lock().unwrap().push(g.delta));

        let bad_market = MarketSnapshot::new(-1.0, 0.05, 0.25, 0.5);
        assert!(engine.refresh(&contract(), &bad_market).is_err());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_independent_instances_do_not_share_state() {
        let a = GreeksEngine::new(EngineConfig::default());
        let b = GreeksEngine::new(EngineConfig::default());

        a.compute_greeks(&contract(), &market()).unwrap();
        assert_eq!(a.cache().computations(), 1);
        assert_eq!(b.cache().computations(), 0);
    }

    #[test]
    fn test_shutdown_stops_channel() {
        let engine = GreeksEngine::new(EngineConfig::default());
        engine.shutdown();
        assert!(!engine.channel().is_running());
    }

    #[test]
    fn test_invalidate_cache() {
        let engine = GreeksEngine::new(EngineConfig::default());
        engine.compute_greeks(&contract(), &market()).unwrap();
        engine.invalidate_cache();
        assert!(engine.cache().is_empty());
    }
}
