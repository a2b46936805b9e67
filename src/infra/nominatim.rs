use async_trait::async_trait;
use serde::Deserialize;

use crate::app::ports::{AddressDetails, ReverseGeocoderPort};
use crate::config::GeocoderConfig;
use crate::error::{HarvestError, Result};

/// Subset of a Nominatim `/reverse` reply we care about.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    #[serde(default)]
    pub address: Option<AddressDetails>,
    /// Nominatim answers misses with `{"error": "Unable to geocode"}`.
    #[serde(default)]
    pub error: Option<String>,
}

pub struct NominatimGeocoder {
    client: reqwest::Client,
    url: String,
}

impl NominatimGeocoder {
    pub fn from_config(config: &GeocoderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.client_identifier())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

pub fn address_from_place(place: NominatimPlace) -> Result<Option<AddressDetails>> {
    if let Some(err) = place.error {
        if err.to_ascii_lowercase().contains("unable to geocode") {
            return Ok(None);
        }
        return Err(HarvestError::Geocode(err));
    }
    Ok(place.address)
}

#[async_trait]
impl ReverseGeocoderPort for NominatimGeocoder {
    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<AddressDetails>> {
        let resp = self
            .client
            .get(&self.url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;
        let place: NominatimPlace = resp.json().await?;
        address_from_place(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_is_extracted() {
        let place: NominatimPlace = serde_json::from_value(json!({
            "place_id": 1,
            "display_name": "Somewhere",
            "address": {"town": "Smallville", "state": "Kansas", "postcode": "66002"}
        }))
        .unwrap();
        let address = address_from_place(place).unwrap().unwrap();
        assert_eq!(address.get("town").map(String::as_str), Some("Smallville"));
    }

    #[test]
    fn test_unable_to_geocode_is_a_miss() {
        let place: NominatimPlace =
            serde_json::from_value(json!({"error": "Unable to geocode"})).unwrap();
        assert!(address_from_place(place).unwrap().is_none());
    }

    #[test]
    fn test_other_service_error_is_an_error() {
        let place: NominatimPlace =
            serde_json::from_value(json!({"error": "Invalid coordinates"})).unwrap();
        assert!(matches!(address_from_place(place), Err(HarvestError::Geocode(_))));
    }
}
