use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of an Overpass JSON response (`[out:json]`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<RawFeature>,
    /// Set by Overpass when the query hit a runtime problem (timeout, memory).
    #[serde(default)]
    pub remark: Option<String>,
}

/// One element as returned by Overpass, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawFeature {
    Node(ElementBody),
    Way(ElementBody),
    Relation(ElementBody),
    /// Any element kind we do not harvest (e.g. `area`).
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ElementBody {
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Present on ways and relations when queried with `out center`.
    #[serde(default)]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

/// Element kind, used to keep identifiers unique across geometry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

impl ElementKind {
    pub fn prefix(self) -> char {
        match self {
            ElementKind::Node => 'N',
            ElementKind::Way => 'W',
            ElementKind::Relation => 'R',
        }
    }
}

impl RawFeature {
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            RawFeature::Node(_) => Some(ElementKind::Node),
            RawFeature::Way(_) => Some(ElementKind::Way),
            RawFeature::Relation(_) => Some(ElementKind::Relation),
            RawFeature::Unsupported => None,
        }
    }

    pub fn body(&self) -> Option<&ElementBody> {
        match self {
            RawFeature::Node(b) | RawFeature::Way(b) | RawFeature::Relation(b) => Some(b),
            RawFeature::Unsupported => None,
        }
    }

    /// Direct coordinates when both are present, otherwise the computed center.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let body = self.body()?;
        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => body.center.map(|c| (c.lat, c.lon)),
        }
    }

    /// `N123`, `W456`, `R789`.
    pub fn osm_id(&self) -> Option<String> {
        let kind = self.kind()?;
        let body = self.body()?;
        Some(format!("{}{}", kind.prefix(), body.id))
    }
}

/// Uniform record produced by flattening one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRecord {
    pub osm_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// JSON-serialized tag mapping, in the order Overpass returned it.
    pub tags: String,
}

/// Address parts pulled from a reverse-geocode lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locality {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteType {
    CommercialWaterPark,
    Hoa,
    School,
    MunicipalPark,
}

impl SiteType {
    pub fn as_str(self) -> &'static str {
        match self {
            SiteType::CommercialWaterPark => "commercial_water_park",
            SiteType::Hoa => "hoa",
            SiteType::School => "school",
            SiteType::MunicipalPark => "municipal_park",
        }
    }
}

impl std::fmt::Display for SiteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    pub osm_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub tags: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub site_type: SiteType,
}

impl EnrichedRecord {
    pub fn new(record: FlatRecord, locality: Locality, site_type: SiteType) -> Self {
        Self {
            osm_id: record.osm_id,
            name: record.name,
            lat: record.lat,
            lon: record.lon,
            tags: record.tags,
            city: locality.city,
            state: locality.state,
            zip: locality.zip,
            site_type,
        }
    }
}
