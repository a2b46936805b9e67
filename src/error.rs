use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown region code: {0}")]
    UnknownRegion(String),

    #[error("Overpass is rate limiting us (429 Too Many Requests)")]
    TooManyRequests,

    #[error("Overpass gateway timeout (server too busy)")]
    GatewayTimeout,

    #[error("Overpass rejected the query: {0}")]
    BadRequest(String),

    #[error("Overpass returned unexpected status {status}")]
    Status { status: u16 },

    #[error("Overpass runtime error: {0}")]
    Remark(String),

    #[error("Element {osm_id} has neither coordinates nor a center")]
    MissingCoordinates { osm_id: String },

    #[error("Geocoder error: {0}")]
    Geocode(String),

    #[error("No data returned – check Overpass status and retry.")]
    NoData,
}

impl HarvestError {
    /// The only failure the fetch stage retries.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, HarvestError::TooManyRequests)
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
