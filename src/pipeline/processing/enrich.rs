use std::sync::Arc;
use tracing::debug;

use crate::app::ports::{AddressDetails, ReverseGeocoderPort};
use crate::rate_limiter::MinIntervalLimiter;
use crate::types::{FlatRecord, Locality};

/// Keys tried, in order, for the city column.
const CITY_KEYS: [&str; 3] = ["city", "town", "village"];

fn pick(address: &AddressDetails, key: &str) -> Option<String> {
    address
        .get(key)
        .filter(|v| !v.trim().is_empty())
        .cloned()
}

pub fn locality_from_address(address: &AddressDetails) -> Locality {
    Locality {
        city: CITY_KEYS.iter().find_map(|k| pick(address, k)),
        state: pick(address, "state"),
        zip: pick(address, "postcode"),
    }
}

/// Best-effort reverse geocoding, one throttled call per record.
///
/// Any lookup failure yields an empty `Locality`; nothing here is retried.
pub struct Enricher {
    geocoder: Arc<dyn ReverseGeocoderPort>,
    limiter: MinIntervalLimiter,
}

impl Enricher {
    pub fn new(geocoder: Arc<dyn ReverseGeocoderPort>, limiter: MinIntervalLimiter) -> Self {
        Self { geocoder, limiter }
    }

    pub async fn locate(&self, record: &FlatRecord) -> Locality {
        self.limiter.acquire().await;
        match self.geocoder.reverse(record.lat, record.lon).await {
            Ok(Some(address)) => locality_from_address(&address),
            Ok(None) => {
                debug!("No reverse-geocode match for {}", record.osm_id);
                Locality::default()
            }
            Err(e) => {
                debug!("Reverse geocode failed for {}: {}", record.osm_id, e);
                Locality::default()
            }
        }
    }
}
