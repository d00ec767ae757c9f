use crate::analyzer::date_format::{DateFormatOptions, DEFAULT_LOCALE};
use crate::fetcher::client::DEFAULT_API_BASE_URL;
use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "PRICE_DASHBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub locale: String,
    pub date_format: DateFormatOptions,
    /// Overview filter; a search term on the command line takes precedence.
    pub search: String,
    /// Region codes to show in detail when no search term is given.
    pub regions: Vec<String>,
    pub export_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_seconds: 10,
            locale: DEFAULT_LOCALE.to_string(),
            date_format: DateFormatOptions::default(),
            search: String::new(),
            regions: Vec::new(),
            export_dir: None,
        }
    }
}

pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Loads the config file; a missing file yields the defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path);
            Ok(AppConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    Ok(config)
}
