use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::event::ScreenEvent;

/// Periodic task that posts `ScreenEvent::TimerFired` into an event queue.
///
/// The task is aborted when the handle is dropped, so a ticker never fires
/// on behalf of an owner that no longer exists. Must be spawned from inside a
/// tokio runtime.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn(period: Duration, tx: mpsc::Sender<ScreenEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(ScreenEvent::TimerFired).await.is_err() {
                    tracing::debug!("Event queue closed, ticker exiting");
                    break;
                }
            }
        });
        tracing::info!(period_ms = period.as_millis() as u64, "Ticker started");
        Self { period, handle }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("Ticker stopped");
    }
}
