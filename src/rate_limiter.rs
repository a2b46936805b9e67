use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::app::ports::{PauseKind, SleeperPort};

/// Spaces calls at least `min_interval` apart, measured from the start of
/// one call to the start of the next.
pub struct MinIntervalLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
    sleeper: Arc<dyn SleeperPort>,
}

impl MinIntervalLimiter {
    pub fn new(min_interval: Duration, sleeper: Arc<dyn SleeperPort>) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
            sleeper,
        }
    }

    /// Wait until the next call is allowed, then mark it as started.
    pub async fn acquire(&self) {
        let mut last = self.last_call.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                self.sleeper
                    .sleep(PauseKind::GeocodeThrottle, self.min_interval - elapsed)
                    .await;
            }
        }
        *last = Some(Instant::now());
    }
}
