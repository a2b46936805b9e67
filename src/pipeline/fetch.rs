use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::app::ports::{OverpassPort, PauseKind, SleeperPort};
use crate::config::OverpassConfig;
use crate::error::Result;
use crate::query::render_query;
use crate::regions::Region;
use crate::types::{ElementKind, RawFeature};

/// Fixed-delay retry applied only to rate-limit responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl From<&OverpassConfig> for RetryPolicy {
    fn from(config: &OverpassConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            delay: config.retry_delay(),
        }
    }
}

/// Fetch every splash pad candidate inside `region`.
///
/// Nodes come first, then ways, then relations, each in the order Overpass
/// returned them. Element kinds we do not harvest are dropped.
#[instrument(skip(overpass, sleeper, region, policy), fields(region = region.code))]
pub async fn fetch_region(
    overpass: &dyn OverpassPort,
    sleeper: &dyn SleeperPort,
    region: &Region,
    timeout_secs: u64,
    policy: &RetryPolicy,
) -> Result<Vec<RawFeature>> {
    let query = render_query(region.area_ref, timeout_secs);
    let mut attempt = 1;
    loop {
        match overpass.query(&query).await {
            Ok(response) => return Ok(order_by_kind(response.elements)),
            Err(e) if e.is_rate_limited() && attempt < policy.max_attempts => {
                warn!(
                    "Rate limited on attempt {}/{}; retrying in {:?}",
                    attempt, policy.max_attempts, policy.delay
                );
                sleeper.sleep(PauseKind::RetryBackoff, policy.delay).await;
                attempt += 1;
            }
            Err(e) => {
                debug!("Giving up after attempt {}: {}", attempt, e);
                return Err(e);
            }
        }
    }
}

fn order_by_kind(elements: Vec<RawFeature>) -> Vec<RawFeature> {
    let mut ordered = Vec::with_capacity(elements.len());
    for kind in [ElementKind::Node, ElementKind::Way, ElementKind::Relation] {
        ordered.extend(elements.iter().filter(|e| e.kind() == Some(kind)).cloned());
    }
    ordered
}
