use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::Result;
use crate::types::OverpassResponse;

// Fetch-side ports
#[async_trait]
pub trait OverpassPort: Send + Sync {
    /// Run one Overpass QL query. A 429 must surface as `HarvestError::TooManyRequests`.
    async fn query(&self, query: &str) -> Result<OverpassResponse>;
}

/// Structured `address` object from a reverse lookup (`city`, `town`, `state`, `postcode`, ...).
pub type AddressDetails = HashMap<String, String>;

// Enrichment-side ports
#[async_trait]
pub trait ReverseGeocoderPort: Send + Sync {
    /// `Ok(None)` when the service has no match for the point.
    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<AddressDetails>>;
}

/// Why the harvester is waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseKind {
    /// Fixed delay between attempts after a rate-limit response.
    RetryBackoff,
    /// Politeness pause after each region.
    RegionCooldown,
    /// Spacing between reverse-geocode calls.
    GeocodeThrottle,
}

#[async_trait]
pub trait SleeperPort: Send + Sync {
    async fn sleep(&self, kind: PauseKind, duration: Duration);
}
