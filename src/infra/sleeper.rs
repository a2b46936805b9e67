use async_trait::async_trait;
use std::time::Duration;

use crate::app::ports::{PauseKind, SleeperPort};

/// Real pauses on the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl SleeperPort for TokioSleeper {
    async fn sleep(&self, kind: PauseKind, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        tracing::trace!(?kind, ?duration, "pausing");
        tokio::time::sleep(duration).await;
    }
}
