// Text rendering of the region overview and per-region reports
use crate::model::{Region, RegionReport};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_UNIT: &str = "EUR / MWh";

pub fn render_region_list(regions: &[&Region]) -> String {
    let name_width = regions
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("Region".len());

    let mut out = format!("{:<name_width$}  Region Code\n", "Region");
    if regions.is_empty() {
        out.push_str("No Regions Found\n");
        return out;
    }
    for region in regions {
        out.push_str(&format!("{:<name_width$}  {}\n", region.name, region.code));
    }
    out
}

pub fn render_report(report: &RegionReport) -> String {
    let unit = report.unit.as_deref().unwrap_or(DEFAULT_UNIT);
    let mut out = format!(
        "Region Details: {} ({})\n",
        report.region.name, report.region.code
    );
    match report.current_price {
        Some(price) => out.push_str(&format!("Current price: {:.2} {}\n", price, unit)),
        None => out.push_str("Current price: n/a\n"),
    }

    out.push_str(&format!("\nDaily Statistics ({})\n", unit));
    out.push_str(&format!("{:<20} {:>10} {:>10} {:>10}\n", "Date", "Low", "High", "Average"));
    for row in &report.daily {
        out.push_str(&format!(
            "{:<20} {:>10.2} {:>10.2} {:>10.2}\n",
            row.label, row.stat.low, row.stat.high, row.stat.average
        ));
    }

    out.push_str("\nPrice Volatility\n");
    out.push_str(&format!("{:<20} {:>10}\n", "Date", "Change"));
    for row in &report.volatility {
        out.push_str(&format!("{:<20} {:>9.2}%\n", row.label, row.change * 100.0));
    }

    out.push_str(&format!("\nHourly Prices ({})\n", unit));
    out.push_str(&format!("{:<20} {:>10}\n", "Date", "Price"));
    for row in &report.hourly {
        out.push_str(&format!("{:<20} {:>10.2}\n", row.label, row.price));
    }

    out
}

/// Writes the report as `<dir>/<code>.json`. Non-finite values become `null`.
pub fn export_report(report: &RegionReport, dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let filename = dir.join(format!("{}.json", report.region.code));
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&filename, json)?;
    Ok(filename)
}
