use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::app::ports::{OverpassPort, PauseKind, ReverseGeocoderPort, SleeperPort};
use crate::config::Config;
use crate::error::{HarvestError, Result};
use crate::pipeline::export::write_csv;
use crate::pipeline::fetch::{fetch_region, RetryPolicy};
use crate::pipeline::processing::{classify, dedupe, flatten_all, Enricher};
use crate::rate_limiter::MinIntervalLimiter;
use crate::regions::Region;
use crate::types::{EnrichedRecord, RawFeature};

/// A region whose fetch failed after all allowed attempts.
#[derive(Debug)]
pub struct RegionFailure {
    pub code: &'static str,
    pub error: HarvestError,
}

/// Everything the fetch phase produced, successes and failures alike.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub features: Vec<RawFeature>,
    pub counts: Vec<(&'static str, usize)>,
    pub failures: Vec<RegionFailure>,
}

impl FetchOutcome {
    fn record(&mut self, region: &Region, result: Result<Vec<RawFeature>>) {
        match result {
            Ok(features) => {
                println!("{:>2}  {:4} objects", region.code, features.len());
                info!(region = region.code, count = features.len(), "Region fetched");
                self.counts.push((region.code, features.len()));
                self.features.extend(features);
            }
            Err(error) => {
                eprintln!("{:>2}  ERROR → {}", region.code, error);
                warn!(region = region.code, "Region fetch failed: {}", error);
                self.failures.push(RegionFailure {
                    code: region.code,
                    error,
                });
            }
        }
    }
}

/// Result of a complete harvest run
#[derive(Debug)]
pub struct HarvestSummary {
    pub rows: usize,
    pub output_path: PathBuf,
    pub failed_regions: Vec<&'static str>,
}

/// Pacing and output settings the use case needs, lifted out of `Config`.
#[derive(Debug, Clone)]
pub struct HarvestSettings {
    pub per_region_timeout_secs: u64,
    pub pause_between_regions: Duration,
    pub retry: RetryPolicy,
    pub geocode_min_interval: Duration,
    pub output_dir: PathBuf,
    pub file_prefix: String,
}

impl From<&Config> for HarvestSettings {
    fn from(config: &Config) -> Self {
        Self {
            per_region_timeout_secs: config.overpass.per_region_timeout_secs,
            pause_between_regions: config.overpass.pause_between_regions(),
            retry: RetryPolicy::from(&config.overpass),
            geocode_min_interval: config.geocoder.min_interval(),
            output_dir: config.output.dir.clone(),
            file_prefix: config.output.file_prefix.clone(),
        }
    }
}

/// Fetch → flatten → dedupe → enrich → classify → export, strictly in sequence.
pub struct HarvestUseCase {
    overpass: Arc<dyn OverpassPort>,
    geocoder: Arc<dyn ReverseGeocoderPort>,
    sleeper: Arc<dyn SleeperPort>,
    settings: HarvestSettings,
}

impl HarvestUseCase {
    pub fn new(
        overpass: Arc<dyn OverpassPort>,
        geocoder: Arc<dyn ReverseGeocoderPort>,
        sleeper: Arc<dyn SleeperPort>,
        settings: HarvestSettings,
    ) -> Self {
        Self {
            overpass,
            geocoder,
            sleeper,
            settings,
        }
    }

    /// Query each region in order. One region failing never stops the others.
    pub async fn fetch_regions(&self, regions: &[Region]) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();
        for region in regions {
            let result = fetch_region(
                self.overpass.as_ref(),
                self.sleeper.as_ref(),
                region,
                self.settings.per_region_timeout_secs,
                &self.settings.retry,
            )
            .await;
            outcome.record(region, result);
            self.sleeper
                .sleep(PauseKind::RegionCooldown, self.settings.pause_between_regions)
                .await;
        }
        outcome
    }

    /// Process fetched features into classified rows.
    pub async fn build_rows(&self, features: &[RawFeature]) -> Result<Vec<EnrichedRecord>> {
        let flat = flatten_all(features)?;
        let total = flat.len();
        let unique = dedupe(flat);
        info!("Deduplicated {} records down to {}", total, unique.len());

        println!("→ reverse-geocoding …");
        let limiter = MinIntervalLimiter::new(
            self.settings.geocode_min_interval,
            self.sleeper.clone(),
        );
        let enricher = Enricher::new(self.geocoder.clone(), limiter);

        let mut rows = Vec::with_capacity(unique.len());
        for record in unique {
            let locality = enricher.locate(&record).await;
            let site_type = classify(&record);
            rows.push(EnrichedRecord::new(record, locality, site_type));
        }
        Ok(rows)
    }

    #[instrument(skip(self, regions), fields(regions = regions.len()))]
    pub async fn run(&self, regions: &[Region]) -> Result<HarvestSummary> {
        let outcome = self.fetch_regions(regions).await;
        if outcome.features.is_empty() {
            return Err(HarvestError::NoData);
        }

        let rows = self.build_rows(&outcome.features).await?;
        let unix_ts = chrono::Utc::now().timestamp();
        let output_path = write_csv(
            &rows,
            &self.settings.output_dir,
            &self.settings.file_prefix,
            unix_ts,
        )?;
        info!("Saved {} rows to {}", rows.len(), output_path.display());

        Ok(HarvestSummary {
            rows: rows.len(),
            output_path,
            failed_regions: outcome.failures.iter().map(|f| f.code).collect(),
        })
    }
}
