//! Publish/subscribe channel for freshly computed Greeks.
//!
//! Listeners are plain callbacks notified synchronously in registration
//! order; delivery guarantees do not extend across a feed reconnect.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use greeks_core::types::GreeksResult;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Channel errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The channel was stopped; no further publishes are accepted.
    #[error("update channel is stopped")]
    Stopped,
}

type Listener = Arc<dyn Fn(&GreeksResult<f64>) + Send + Sync>;

struct ChannelInner {
    /// Registered listeners in registration order
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
    running: AtomicBool,
    published: AtomicUsize,
}

/// Publish/subscribe channel for Greeks updates.
///
/// Cloning is cheap and shares the subscriber registry, so the engine and
/// its background feed pump can hold the same channel.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use greeks_core::types::GreeksResult;
/// use greeks_service::UpdateChannel;
///
/// let channel = UpdateChannel::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// let subscription = channel.subscribe(move |g: &GreeksResult<f64>| {
///     sink.lock().unwrap().push(g.delta);
/// });
///
/// channel.publish(&GreeksResult::new(0.5, 0.04, -8.0, 20.0, 12.0)).unwrap();
/// assert_eq!(seen.lock().unwrap().as_slice(), &[0.5]);
///
/// subscription.cancel();
/// assert_eq!(channel.subscriber_count(), 0);
/// ```
#[derive(Clone)]
pub struct UpdateChannel {
    inner: Arc<ChannelInner>,
}

impl UpdateChannel {
    /// Creates a running channel with no subscribers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ChannelInner {
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                running: AtomicBool::new(true),
                published: AtomicUsize::new(0),
            }),
        }
    }

    /// Registers a listener invoked with each published result.
    ///
    /// Returns a [`Subscription`] whose [`cancel`](Subscription::cancel)
    /// unregisters the listener. Listeners are notified in registration
    /// order.
    pub fn subscribe(
        &self,
        listener: impl Fn(&GreeksResult<f64>) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        self.inner
            .listeners
            .lock()
            .expect("listener registry poisoned")
            .push((id, Arc::new(listener)));
        info!(
            subscribers = self.subscriber_count(),
            "new greeks subscription"
        );
        Subscription {
            id,
            inner: Arc::clone(&self.inner),
        }
    }

    /// Synchronously notifies all current subscribers in registration order.
    ///
    /// # Errors
    /// `ChannelError::Stopped` after [`stop`](UpdateChannel::stop).
    pub fn publish(&self, result: &GreeksResult<f64>) -> Result<(), ChannelError> {
        if !self.inner.running.load(Ordering::SeqCst) {
            return Err(ChannelError::Stopped);
        }

        self.inner.published.fetch_add(1, Ordering::SeqCst);

        // Snapshot the registry so listeners may subscribe or cancel from
        // inside a callback without deadlocking on the registry lock.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .expect("listener registry poisoned")
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(result);
        }
        Ok(())
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .expect("listener registry poisoned")
            .len()
    }

    /// Total number of successful publishes.
    pub fn published(&self) -> usize {
        self.inner.published.load(Ordering::SeqCst)
    }

    /// Stops the channel; subsequent publishes fail with `Stopped`.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::SeqCst);
        info!("update channel stopped");
    }

    /// True until [`stop`](UpdateChannel::stop) is called.
    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Snapshot of the channel counters.
    pub fn statistics(&self) -> ChannelStatistics {
        ChannelStatistics {
            subscribers: self.subscriber_count(),
            published: self.published(),
            is_running: self.is_running(),
        }
    }
}

impl Default for UpdateChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one registered listener.
///
/// Dropping the handle does NOT unregister the listener; cancellation is
/// explicit so short-lived handles cannot silently tear down a dashboard
/// subscription.
pub struct Subscription {
    id: u64,
    inner: Arc<ChannelInner>,
}

impl Subscription {
    /// Unregisters the listener.
    pub fn cancel(self) {
        self.inner
            .listeners
            .lock()
            .expect("listener registry poisoned")
            .retain(|(id, _)| *id != self.id);
    }
}

/// Channel counters snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelStatistics {
    /// Current subscriber count
    pub subscribers: usize,
    /// Total successful publishes
    pub published: usize,
    /// Running status
    pub is_running: bool,
}
