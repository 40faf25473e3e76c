use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::fetch::PageFetcher;
use fantoccini::ClientBuilder;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Fetches the rendered page source through a WebDriver server
///
/// Opens a fresh session per fetch and closes it afterwards. The whole
/// connect, navigate and read sequence shares one timeout.
#[derive(Debug, Clone)]
pub struct WebDriverFetcher {
    webdriver_url: String,
    timeout: Duration,
}

impl WebDriverFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            timeout: config.timeout(),
        }
    }

    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    async fn render(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let client = ClientBuilder::native()
            .connect(&self.webdriver_url)
            .await
            .inspect_err(|e| {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.webdriver_url,
                    e
                );
                ::log::error!(
                    "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
                );
            })?;
        ::log::debug!("Connected to WebDriver at {}", self.webdriver_url);

        let source = match client.goto(url.as_str()).await {
            Ok(()) => client
                .source()
                .await
                .inspect_err(|e| log_command_error(e, "getting source for", url)),
            Err(e) => {
                log_command_error(&e, "accessing", url);
                Err(e)
            }
        };

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }

        Ok(source?.into_bytes())
    }
}

impl PageFetcher for WebDriverFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        ::log::info!("Rendering {} via WebDriver", url);

        match timeout(self.timeout, self.render(url)).await {
            Ok(result) => result,
            Err(_) => {
                ::log::error!("Timeout rendering: {}", url);
                Err(FetchError::Timeout {
                    secs: self.timeout.as_secs(),
                })
            }
        }
    }
}

fn log_command_error(error: &fantoccini::error::CmdError, context: &str, url: &Url) {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while {} {}", context, url);
    } else {
        ::log::error!("Failed {} {}: {}", context, url, error);
    }
}
