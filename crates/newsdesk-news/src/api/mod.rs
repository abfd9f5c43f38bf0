//! API clients for news and symbol providers

pub mod newsapi;
pub mod yahoo;

pub use newsapi::NewsApiClient;
pub use yahoo::YahooTickerResolver;
