mod analyzer;
mod config;
mod fetcher;
mod model;
mod regions;
mod report;
mod utils;

use analyzer::{Analyzer, AnalyzerImpl};
use chrono::Utc;
use config::{config_path, load_config, AppConfig};
use fetcher::{PriceFetcher, PriceFetcherImpl};
use futures::future::join_all;
use model::{Region, RegionReport, ReportError};
use regions::{filter_regions, find_region, REGIONS};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let path = config_path();
    let config = match load_config(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", path, e);
            return;
        }
    };

    let fetcher = match PriceFetcherImpl::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.request_timeout_seconds),
    ) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return;
        }
    };
    let analyzer = AnalyzerImpl::new(config.locale.clone(), config.date_format.clone());

    let cli_search = std::env::args().nth(1);
    let search = cli_search.as_deref().unwrap_or(&config.search);

    let listed = filter_regions(&REGIONS, search);
    println!("Electricity Prices Overview\n");
    println!("{}", report::render_region_list(&listed));

    let targets = select_targets(&config, search, &listed);
    if targets.is_empty() {
        info!("No regions selected for details.");
        return;
    }
    info!("Fetching details for {} region(s)...", targets.len());

    let now = Utc::now().timestamp();
    let tasks = targets
        .iter()
        .map(|region| process_region(region, &fetcher, &analyzer, now));
    let results = join_all(tasks).await;

    for (region, result) in targets.iter().zip(results) {
        match result {
            Ok(report) => {
                println!("{}", report::render_report(&report));
                if let Some(dir) = &config.export_dir {
                    match report::export_report(&report, Path::new(dir)) {
                        Ok(file) => info!("Saved report: {}", file.display()),
                        Err(e) => warn!("Failed to export {}: {}", region.code, e),
                    }
                }
            }
            Err(ReportError::Fetch(e)) => {
                error!("Error loading region details for {}: {}", region.code, e);
            }
            Err(ReportError::Format(e)) => {
                error!("Error formatting report for {}: {}", region.code, e);
            }
        }
    }
}

/// Regions shown in detail: the search hits when a term is given, otherwise
/// the codes listed in the config.
fn select_targets(config: &AppConfig, search: &str, listed: &[&Region]) -> Vec<Region> {
    if !search.trim().is_empty() {
        return listed.iter().map(|r| **r).collect();
    }

    config
        .regions
        .iter()
        .filter_map(|code| {
            let region = find_region(code);
            if region.is_none() {
                warn!("Unknown region code in config: {}", code);
            }
            region.copied()
        })
        .collect()
}

/// Fetches one region's prices and runs the analytics over them.
async fn process_region(
    region: &Region,
    fetcher: &dyn PriceFetcher,
    analyzer: &dyn Analyzer,
    now: i64,
) -> Result<RegionReport, ReportError> {
    info!("Processing region: {}", region.code);
    let series = fetcher.fetch(region).await?;
    if series.is_empty() {
        warn!("No price data returned for {}", region.code);
    }
    let report = analyzer.analyze(region, &series, now)?;
    info!(
        "Finished {}: {} hourly, {} daily rows",
        region.code,
        report.hourly.len(),
        report.daily.len()
    );
    Ok(report)
}
