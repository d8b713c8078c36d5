//! Scrape command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::gsmarena::{GsmArenaClient, PageSource};
use crate::pipeline::Orchestrator;
use crate::progress::LogProgress;
use anyhow::{Context, Result};
use tracing::info;

/// What a scrape covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeTarget {
    /// One brand, by exact catalog name
    Brand(String),
    All,
}

/// Scrapes one brand or the whole catalog and reports the outcome.
pub struct ScrapeCommand {
    config: Config,
}

impl ScrapeCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the scrape and returns formatted output.
    pub async fn execute(&self, target: &ScrapeTarget) -> Result<String> {
        // Reject bad options before opening a session.
        self.config.pipeline_options().context("Invalid configuration")?;

        let client = GsmArenaClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.execute_with_source(client, target).await
    }

    /// Executes with a provided page source (for testing).
    pub async fn execute_with_source<S: PageSource>(&self, source: S, target: &ScrapeTarget) -> Result<String> {
        let options = self.config.pipeline_options().context("Invalid configuration")?;
        let mut orchestrator = Orchestrator::new(source, options, self.config.layout())
            .await
            .context("Failed to load brand catalog")?
            .with_observer(LogProgress);

        let formatter = Formatter::new(self.config.format);
        match target {
            ScrapeTarget::Brand(name) => {
                let report = orchestrator
                    .scrape_brand(name)
                    .await
                    .with_context(|| format!("Failed to scrape brand {}", name))?;
                Ok(formatter.format_brand_report(&report))
            }
            ScrapeTarget::All => {
                let report = orchestrator.scrape_all().await.context("Failed to scrape all brands")?;
                info!("Run {} finished with {} devices", report.run_id, report.total_devices);
                Ok(formatter.format_run_report(&report))
            }
        }
    }
}
