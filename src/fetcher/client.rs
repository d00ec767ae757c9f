use crate::fetcher::traits::PriceFetcher;
use crate::model::{FetchError, PriceSeries, Region};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.energy-charts.info/price";

/// Body of the price endpoint. Other fields (license info, deprecation flag)
/// are ignored.
#[derive(Debug, Deserialize)]
struct PriceResponse {
    price: Vec<f64>,
    unix_seconds: Vec<i64>,
    #[serde(default)]
    unit: Option<String>,
}

pub struct PriceFetcherImpl {
    client: Client,
    base_url: String,
}

impl PriceFetcherImpl {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("power-price-dashboard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, region: &Region) -> String {
        format!("{}?bzn={}", self.base_url.trim_end_matches('/'), region.code)
    }
}

/// Parses a price payload and checks that both series line up.
pub fn parse_price_payload(body: &str) -> Result<PriceSeries, FetchError> {
    let payload: PriceResponse = serde_json::from_str(body)?;
    Ok(PriceSeries::new(payload.unix_seconds, payload.price)?.with_unit(payload.unit))
}

#[async_trait::async_trait]
impl PriceFetcher for PriceFetcherImpl {
    async fn fetch(&self, region: &Region) -> Result<PriceSeries, FetchError> {
        let url = self.build_url(region);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Failed to fetch region details for {}: {}", region.code, e);
            FetchError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            warn!("Price API returned {} for {}", status, region.code);
            return Err(FetchError::Status(reason));
        }

        let body = response.text().await?;
        let series = parse_price_payload(&body).inspect_err(|e| {
            warn!("Failed to parse price payload for {}: {}", region.code, e);
        })?;
        debug!("Fetched {} samples for {}", series.len(), region.code);
        Ok(series)
    }
}
