pub mod client;
pub mod traits;

pub use client::PriceFetcherImpl;
pub use traits::PriceFetcher;
