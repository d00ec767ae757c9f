// Core structs: Region, PriceSeries, DailyStat, RegionReport
use serde::Serialize;
use thiserror::Error;

/// Samples per daily window (hourly data).
pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub code: &'static str,
}

/// Hourly prices index-aligned with their Unix timestamps (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    timestamps: Vec<i64>,
    prices: Vec<f64>,
    unit: Option<String>,
}

impl PriceSeries {
    pub fn new(timestamps: Vec<i64>, prices: Vec<f64>) -> Result<Self, FetchError> {
        if timestamps.len() != prices.len() {
            return Err(FetchError::LengthMismatch {
                prices: prices.len(),
                timestamps: timestamps.len(),
            });
        }
        Ok(Self {
            timestamps,
            prices,
            unit: None,
        })
    }

    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.unit = unit;
        self
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// First timestamp of every daily window, matching the positional windows
    /// produced by `calculate_daily_stats`.
    pub fn daily_timestamps(&self) -> Vec<i64> {
        self.timestamps
            .iter()
            .step_by(HOURS_PER_DAY)
            .copied()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyStat {
    pub low: f64,
    pub high: f64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub label: String,
    pub timestamp: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRow {
    pub label: String,
    pub timestamp: i64,
    pub stat: DailyStat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatilityRow {
    pub label: String,
    pub timestamp: i64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionReport {
    pub region: Region,
    pub unit: Option<String>,
    pub current_price: Option<f64>,
    pub hourly: Vec<PriceRow>,
    pub daily: Vec<DailyRow>,
    pub volatility: Vec<VolatilityRow>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Error fetching region details: {0}")]
    Status(String),
    #[error("Invalid price payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("Series length mismatch: {prices} prices vs {timestamps} timestamps")]
    LengthMismatch { prices: usize, timestamps: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
    #[error("Invalid date pattern: {0}")]
    InvalidPattern(String),
    #[error("UTC offset out of range: {0} minutes")]
    InvalidOffset(i32),
    #[error("Timestamp out of range: {0}")]
    OutOfRange(i64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while building a region report: either the data never arrived or
/// it could not be formatted.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
