//! TTL cache over the analytical Greeks calculator.
//!
//! Avoids redundant recomputation within a refresh window. Entries are
//! expired lazily on lookup; nothing is evicted eagerly.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use greeks_core::types::{GreeksResult, MarketSnapshot, OptionContract};
use greeks_models::analytical::{compute_greeks, AnalyticalError};
use tracing::debug;

/// One cached computation keyed by contract identity.
struct CacheEntry {
    greeks: GreeksResult<f64>,
    inserted_at: Instant,
}

/// TTL-keyed cache mapping contract identity to its latest Greeks.
///
/// Keys come from [`OptionContract::cache_key`]. A fresh entry (younger than
/// the TTL) is returned as-is with no recomputation; a stale or missing
/// entry triggers a computation whose result replaces the entry.
///
/// # Concurrency
///
/// The map sits behind a mutex, but the computation itself runs outside the
/// lock: two threads missing the same key concurrently may both compute.
/// That duplicate work is benign, since the calculator is a pure function
/// of its inputs the results are identical and the last write wins.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use greeks_core::types::{Date, MarketSnapshot, OptionContract, OptionType};
/// use greeks_service::GreeksCache;
///
/// let cache = GreeksCache::new(Duration::from_secs(1));
/// let expiry = Date::from_ymd(2026, 12, 18).unwrap();
/// let contract = OptionContract::new("AAPL", 185.0, expiry, OptionType::Call);
/// let market = MarketSnapshot::new(185.0, 0.05, 0.25, 0.5);
///
/// let first = cache.get_or_compute(&contract, &market).unwrap();
/// let second = cache.get_or_compute(&contract, &market).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(cache.computations(), 1);
/// ```
pub struct GreeksCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    computations: AtomicUsize,
    hits: AtomicUsize,
}

impl GreeksCache {
    /// Creates an empty cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            computations: AtomicUsize::new(0),
            hits: AtomicUsize::new(0),
        }
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached Greeks for the contract, computing on miss.
    ///
    /// A hit is side-effect-free apart from the hit counter. A miss (or a
    /// stale entry) computes via the analytical calculator, stores the
    /// result under the contract key, and returns it.
    ///
    /// # Errors
    /// Propagates `AnalyticalError` from the calculator; failed
    /// computations are never cached.
    pub fn get_or_compute(
        &self,
        contract: &OptionContract<f64>,
        market: &MarketSnapshot<f64>,
    ) -> Result<GreeksResult<f64>, AnalyticalError> {
        let key = contract.cache_key();

        {
            let entries = self.entries.lock().expect("cache mutex poisoned");
            if let Some(entry) = entries.get(&key) {
                if entry.inserted_at.elapsed() < self.ttl {
                    self.hits.fetch_add(1, Ordering::SeqCst);
                    return Ok(entry.greeks.clone());
                }
            }
        }

        // Stale or missing: compute outside the lock. Concurrent misses on
        // the same key may both land here; last write wins.
        let greeks = compute_greeks(contract, market)?;
        self.computations.fetch_add(1, Ordering::SeqCst);
        debug!(key = %key, "greeks cache refresh");

        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(
            key,
            CacheEntry {
                greeks: greeks.clone(),
                inserted_at: Instant::now(),
            },
        );
        Ok(greeks)
    }

    /// Clears all entries, forcing recomputation on the next lookup.
    ///
    /// Used for explicit cache-busting, e.g. after a feed reconnect.
    pub fn invalidate_all(&self) {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .clear();
    }

    /// Number of entries currently stored (fresh or stale).
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of underlying computations performed.
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::SeqCst)
    }

    /// Total number of fresh-entry hits served.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}
