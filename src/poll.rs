//! Polling consumers.
//!
//! A [`Poller`] drives a fetch function on a fixed interval and holds
//! the latest [`PollSnapshot`] for the presentation layer. The
//! per-consumer state machine is `loading -> (success | error)`,
//! repeating on each tick. On success the payload and timestamp are
//! stored; on error the last-known payload is retained and the error
//! flag set. A manual [`refresh()`](Poller::refresh) re-enters
//! `loading` immediately, bypassing the timer — but not the fetch
//! cache's freshness check underneath.
//!
//! Fetches within one poller run sequentially, so a poller cannot race
//! itself; two pollers sharing a cache key still can (the cache keeps
//! the last resolved result).

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::telemetry;
use crate::Result;

/// Interval for the real-time metrics consumer.
pub const METRICS_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Interval for the air quality consumer.
pub const AIR_QUALITY_POLL_INTERVAL: Duration = Duration::from_secs(300);

/// Latest state held by a polling consumer.
#[derive(Debug, Clone)]
pub struct PollSnapshot<T> {
    /// Most recent successful payload, if any.
    pub data: Option<T>,
    /// Whether the initial fetch or a manual refresh is in flight.
    pub loading: bool,
    /// Error from the most recent fetch, cleared on success.
    pub error: Option<String>,
    /// Wall-clock time of the last successful fetch.
    pub last_updated: Option<DateTime<Utc>>,
}

impl<T> Default for PollSnapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            last_updated: None,
        }
    }
}

/// Timer-driven consumer holding the latest fetch result.
///
/// Dropping the poller aborts the background task.
pub struct Poller<T> {
    state: watch::Receiver<PollSnapshot<T>>,
    refresh_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl<T: Clone + Send + Sync + 'static> Poller<T> {
    /// Spawn a consumer that runs `fetch` immediately and then on every
    /// `interval` tick.
    pub fn spawn<F, Fut>(name: &'static str, interval: Duration, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send,
    {
        let (state_tx, state_rx) = watch::channel(PollSnapshot::default());
        let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                // The first tick completes immediately.
                tokio::select! {
                    _ = ticker.tick() => {}
                    received = refresh_rx.recv() => {
                        if received.is_none() {
                            break;
                        }
                        debug!(consumer = name, "manual refresh requested");
                        state_tx.send_modify(|s| s.loading = true);
                    }
                }
                run_fetch(name, &fetch, &state_tx).await;
            }
        });

        Self {
            state: state_rx,
            refresh_tx,
            handle,
        }
    }

    /// Clone of the latest snapshot.
    pub fn snapshot(&self) -> PollSnapshot<T> {
        self.state.borrow().clone()
    }

    /// Watch handle for change-driven consumers (e.g. a render loop).
    pub fn subscribe(&self) -> watch::Receiver<PollSnapshot<T>> {
        self.state.clone()
    }

    /// Request an immediate re-fetch, bypassing the timer.
    ///
    /// If a refresh is already queued this is a no-op.
    pub fn refresh(&self) {
        let _ = self.refresh_tx.try_send(());
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run_fetch<T, F, Fut>(name: &'static str, fetch: &F, state_tx: &watch::Sender<PollSnapshot<T>>)
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match fetch().await {
        Ok(value) => {
            metrics::counter!(telemetry::POLL_FETCHES_TOTAL,
                "consumer" => name, "status" => "ok")
            .increment(1);
            state_tx.send_modify(|s| {
                s.data = Some(value);
                s.error = None;
                s.last_updated = Some(Utc::now());
                s.loading = false;
            });
        }
        Err(err) => {
            metrics::counter!(telemetry::POLL_FETCHES_TOTAL,
                "consumer" => name, "status" => "error")
            .increment(1);
            warn!(consumer = name, error = %err, "poll fetch failed");
            // Last-known payload is retained; only the flag changes.
            state_tx.send_modify(|s| {
                s.error = Some(err.to_string());
                s.loading = false;
            });
        }
    }
}
