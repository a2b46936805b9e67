use serde_json::Value;

use crate::error::{HarvestError, Result};
use crate::types::{FlatRecord, RawFeature};

/// Turn one Overpass element into a `FlatRecord`.
///
/// Fails when the element has neither direct coordinates nor a center; that
/// means Overpass broke the `out center` contract and the run should stop.
pub fn flatten(raw: &RawFeature) -> Result<FlatRecord> {
    let (osm_id, body) = match (raw.osm_id(), raw.body()) {
        (Some(id), Some(body)) => (id, body),
        _ => {
            return Err(HarvestError::MissingCoordinates {
                osm_id: "unsupported element".to_string(),
            })
        }
    };
    let (lat, lon) = raw
        .coordinates()
        .ok_or_else(|| HarvestError::MissingCoordinates {
            osm_id: osm_id.clone(),
        })?;
    let name = body
        .tags
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let tags = serde_json::to_string(&body.tags)?;

    Ok(FlatRecord {
        osm_id,
        name,
        lat,
        lon,
        tags,
    })
}

pub fn flatten_all(raw: &[RawFeature]) -> Result<Vec<FlatRecord>> {
    raw.iter().map(flatten).collect()
}
