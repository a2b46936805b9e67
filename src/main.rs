use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use splashpad_harvester::app::harvest_use_case::{HarvestSettings, HarvestUseCase};
use splashpad_harvester::config::Config;
use splashpad_harvester::error::HarvestError;
use splashpad_harvester::infra::http_client::ReqwestOverpass;
use splashpad_harvester::infra::nominatim::NominatimGeocoder;
use splashpad_harvester::infra::sleeper::TokioSleeper;
use splashpad_harvester::logging;
use splashpad_harvester::regions::{all_regions, select_regions};

#[derive(Parser)]
#[command(name = "splashpad_harvester")]
#[command(about = "Harvest US splash pads from OpenStreetMap into a CSV")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a TOML config file (defaults to ./splashpads.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Only harvest these regions (comma-separated codes, e.g. TX,LA)
    #[arg(long, value_delimiter = ',')]
    states: Vec<String>,
    /// Directory the CSV is written to
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }
    let regions = if cli.states.is_empty() {
        all_regions()
    } else {
        select_regions(&cli.states)?
    };
    info!(
        regions = regions.len(),
        overpass = %config.overpass.url,
        "Starting splash pad harvest"
    );

    let use_case = HarvestUseCase::new(
        Arc::new(ReqwestOverpass::from_config(&config.overpass)?),
        Arc::new(NominatimGeocoder::from_config(&config.geocoder)?),
        Arc::new(TokioSleeper),
        HarvestSettings::from(&config),
    );

    match use_case.run(&regions).await {
        Ok(summary) => {
            if !summary.failed_regions.is_empty() {
                println!(
                    "⚠️  {} region(s) failed: {}",
                    summary.failed_regions.len(),
                    summary.failed_regions.join(", ")
                );
            }
            println!(
                "\n✅  Saved {} rows → {}",
                summary.rows,
                summary.output_path.display()
            );
            Ok(())
        }
        Err(HarvestError::NoData) => {
            error!("Fetch phase returned no elements");
            eprintln!("{}", HarvestError::NoData);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
