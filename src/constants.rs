//! Default endpoints and tuning values shared across the harvester.
//! Everything here can be overridden through `Config`.

// Endpoints
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass.kumi.systems/api/interpreter";
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

// Overpass pacing
pub const DEFAULT_PER_REGION_TIMEOUT_SECS: u64 = 240;
pub const DEFAULT_PAUSE_BETWEEN_REGIONS_SECS: f64 = 1.0;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 8;

/// Added on top of the query's own `[timeout:..]` for the HTTP client deadline.
pub const OVERPASS_HTTP_GRACE_SECS: u64 = 30;

// Nominatim usage policy: identify yourself and stay at <= 1 req/s
pub const DEFAULT_USER_AGENT: &str = "pw-splashpads-bot/0.1";
pub const DEFAULT_GEOCODER_CONTACT: &str = "splashpads@example.com";
pub const DEFAULT_GEOCODE_MIN_INTERVAL_SECS: f64 = 1.0;
pub const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 3;

// Output
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_FILE_PREFIX: &str = "clean_splashpads";
pub const DEFAULT_CONFIG_FILE: &str = "splashpads.toml";

// Environment variables
pub const ENV_USER_AGENT: &str = "USER_AGENT";
pub const ENV_GEOCODER_EMAIL: &str = "GEOCODER_EMAIL";
pub const ENV_OVERPASS_URL: &str = "OVERPASS_URL";
pub const ENV_NOMINATIM_URL: &str = "NOMINATIM_URL";

/// Overpass area ids for relations are the relation id offset by this value.
pub const OVERPASS_RELATION_AREA_OFFSET: u64 = 3_600_000_000;
