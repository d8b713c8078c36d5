//! HTTP client for GSMArena pages using wreq for browser emulation.

use crate::config::Config;
use crate::error::ScrapeError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;
use wreq_util::Emulation;

/// The single page-loading session of a run - enables mocking for tests.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Loads `url` and returns the page HTML.
    async fn load(&self, url: &str) -> Result<String, ScrapeError>;

    /// Site root used to resolve relative links.
    fn base_url(&self) -> &str;

    /// Address of the manufacturers index.
    fn makers_url(&self) -> String {
        format!("{}/makers.php3", self.base_url().trim_end_matches('/'))
    }
}

/// GSMArena HTTP client impersonating a desktop Chrome session.
pub struct GsmArenaClient {
    client: Client,
    base_url: String,
}

impl GsmArenaClient {
    /// Creates a new client with the given configuration.
    pub async fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None).await
    }

    /// Creates a new client with an optional custom base URL (for testing).
    pub async fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self { client, base_url: base_url.unwrap_or_else(|| config.base_url.clone()) })
    }
}

#[async_trait]
impl PageSource for GsmArenaClient {
    async fn load(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Sec-Fetch-Dest", "document")
            .header("Sec-Fetch-Mode", "navigate")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .map_err(|e| ScrapeError::navigation(url, e))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 429 {
            warn!("Rate limited (429). Consider increasing --rate-limit.");
            return Err(ScrapeError::navigation(url, "rate limited (status 429)"));
        }

        if !status.is_success() {
            return Err(ScrapeError::navigation(url, format!("status {}", status)));
        }

        response.text().await.map_err(|e| ScrapeError::navigation(url, e))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
