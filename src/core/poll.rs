//! Poll loop - Fixed-interval sampling scheduler

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::monitor::SharedCpuStateMonitor;

/// Default delay between samples.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Free-standing scheduler driving the sample-and-aggregate pipeline.
///
/// `start` refreshes once immediately, then on every interval tick until
/// `stop`. Ticks are never queued; a missed tick is skipped and the latest
/// result wins.
pub struct PollLoop {
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl PollLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            handle: None,
        }
    }

    /// Begin periodic sampling. A second start while running is a no-op.
    pub fn start(&mut self, monitor: SharedCpuStateMonitor) {
        if self.handle.is_some() {
            return;
        }
        let interval = self.interval;
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                monitor.refresh();
            }
        }));
        info!("Poll loop started, sampling every {:?}", self.interval);
    }

    /// Cancel the interval timer. Safe to call repeatedly, or when the
    /// loop was never started; the task is aborted exactly once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Poll loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for PollLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
