pub mod http;
pub mod webdriver;

use crate::config::{FetchBackend, FetchConfig};
use crate::error::FetchError;
use std::future::Future;
use url::Url;

pub use http::HttpFetcher;
pub use webdriver::WebDriverFetcher;

/// Retrieves the raw body of one page
///
/// Implementations perform a single attempt bounded by their timeout and
/// never retry.
pub trait PageFetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>, FetchError>>;
}

/// Fetcher selected by configuration
#[derive(Debug, Clone)]
pub enum Fetcher {
    Http(HttpFetcher),
    WebDriver(WebDriverFetcher),
}

impl Fetcher {
    pub fn from_config(config: &FetchConfig) -> Result<Self, FetchError> {
        match config.backend {
            FetchBackend::Http => Ok(Fetcher::Http(HttpFetcher::new(config)?)),
            FetchBackend::WebDriver => Ok(Fetcher::WebDriver(WebDriverFetcher::new(config))),
        }
    }
}

impl PageFetcher for Fetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        match self {
            Fetcher::Http(fetcher) => fetcher.fetch(url).await,
            Fetcher::WebDriver(fetcher) => fetcher.fetch(url).await,
        }
    }
}
