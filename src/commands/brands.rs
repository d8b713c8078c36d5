//! Brand listing command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::gsmarena::{BrandCatalog, BrandEntry, GsmArenaClient, PageSource};
use anyhow::{Context, Result};
use tracing::info;

/// Lists catalog brands, optionally filtered by a search term.
pub struct BrandsCommand {
    config: Config,
}

impl BrandsCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the catalog and returns formatted output.
    pub async fn execute(&self, search: Option<&str>) -> Result<String> {
        let client = GsmArenaClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.execute_with_source(&client, search).await
    }

    /// Executes with a provided page source (for testing).
    pub async fn execute_with_source(&self, source: &impl PageSource, search: Option<&str>) -> Result<String> {
        let catalog = BrandCatalog::load(source).await.context("Failed to load brand catalog")?;

        let brands: Vec<&BrandEntry> = match search {
            Some(term) => {
                let found = catalog.search(term);
                info!("{} of {} brands match {:?}", found.len(), catalog.len(), term);
                found
            }
            None => catalog.brands().iter().collect(),
        };

        Ok(Formatter::new(self.config.format).format_brands(&brands))
    }
}
