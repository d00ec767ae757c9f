use crate::model::{FetchError, PriceSeries, Region};

#[async_trait::async_trait]
pub trait PriceFetcher: Send + Sync {
    async fn fetch(&self, region: &Region) -> Result<PriceSeries, FetchError>;
}
