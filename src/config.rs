use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::*;
use crate::error::{HarvestError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub overpass: OverpassConfig,
    pub geocoder: GeocoderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverpassConfig {
    pub url: String,
    pub per_region_timeout_secs: u64,
    pub pause_between_regions_secs: f64,
    pub max_attempts: u32,
    pub retry_delay_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OVERPASS_URL.to_string(),
            per_region_timeout_secs: DEFAULT_PER_REGION_TIMEOUT_SECS,
            pause_between_regions_secs: DEFAULT_PAUSE_BETWEEN_REGIONS_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
        }
    }
}

impl OverpassConfig {
    pub fn pause_between_regions(&self) -> Duration {
        Duration::from_secs_f64(self.pause_between_regions_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    /// HTTP deadline for one query: the server-side timeout plus a grace period.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.per_region_timeout_secs + OVERPASS_HTTP_GRACE_SECS)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub url: String,
    pub user_agent: String,
    pub contact: String,
    pub min_interval_secs: f64,
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            contact: DEFAULT_GEOCODER_CONTACT.to_string(),
            min_interval_secs: DEFAULT_GEOCODE_MIN_INTERVAL_SECS,
            timeout_secs: DEFAULT_GEOCODE_TIMEOUT_SECS,
        }
    }
}

impl GeocoderConfig {
    /// Identifier sent to Nominatim, e.g. `pw-splashpads-bot/0.1 (ops@example.com)`.
    pub fn client_identifier(&self) -> String {
        format!("{} ({})", self.user_agent, self.contact)
    }

    pub fn min_interval(&self) -> Duration {
        Duration::from_secs_f64(self.min_interval_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the TOML file, then environment overrides.
    ///
    /// An explicitly given path must exist. Without one, `splashpads.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            HarvestError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment overrides through `lookup` so callers can inject values.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(ua) = non_empty(ENV_USER_AGENT) {
            self.geocoder.user_agent = ua;
        }
        if let Some(contact) = non_empty(ENV_GEOCODER_EMAIL) {
            self.geocoder.contact = contact;
        }
        if let Some(url) = non_empty(ENV_OVERPASS_URL) {
            self.overpass.url = url;
        }
        if let Some(url) = non_empty(ENV_NOMINATIM_URL) {
            self.geocoder.url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.overpass.max_attempts == 0 {
            return Err(HarvestError::Config(
                "overpass.max_attempts must be at least 1".into(),
            ));
        }
        if self.overpass.url.trim().is_empty() {
            return Err(HarvestError::Config("overpass.url must not be empty".into()));
        }
        if self.geocoder.url.trim().is_empty() {
            return Err(HarvestError::Config("geocoder.url must not be empty".into()));
        }
        if !self.overpass.pause_between_regions_secs.is_finite()
            || self.overpass.pause_between_regions_secs < 0.0
            || !self.geocoder.min_interval_secs.is_finite()
            || self.geocoder.min_interval_secs < 0.0
        {
            return Err(HarvestError::Config(
                "pause and interval settings must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_match_harvest_contract() {
        let config = Config::default();
        assert_eq!(config.overpass.per_region_timeout_secs, 240);
        assert_eq!(config.overpass.max_attempts, 4);
        assert_eq!(config.overpass.retry_delay(), Duration::from_secs(8));
        assert_eq!(config.overpass.pause_between_regions(), Duration::from_secs(1));
        assert_eq!(config.geocoder.min_interval(), Duration::from_secs(1));
        assert_eq!(config.geocoder.timeout(), Duration::from_secs(3));
        assert_eq!(config.output.file_prefix, "clean_splashpads");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_build_client_identifier() {
        let env: HashMap<&str, &str> = [
            ("USER_AGENT", "my-bot/2.0"),
            ("GEOCODER_EMAIL", "ops@example.org"),
            ("OVERPASS_URL", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.geocoder.client_identifier(),
            "my-bot/2.0 (ops@example.org)"
        );
        // Blank values are ignored
        assert_eq!(config.overpass.url, DEFAULT_OVERPASS_URL);
    }

    #[test]
    fn test_default_client_identifier() {
        let config = Config::default();
        assert_eq!(
            config.geocoder.client_identifier(),
            "pw-splashpads-bot/0.1 (splashpads@example.com)"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[overpass]\nper_region_timeout_secs = 60\n\n[output]\ndir = \"out\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.overpass.per_region_timeout_secs, 60);
        assert_eq!(config.overpass.max_attempts, 4);
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.geocoder.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, HarvestError::Config(_)));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let mut config = Config::default();
        config.overpass.max_attempts = 0;
        assert!(config.validate().is_err());
    }
}
