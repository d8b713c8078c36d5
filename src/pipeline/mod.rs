//! The scraping pipeline: device visits, listing pagination and orchestration.

pub mod orchestrator;
pub mod paginator;
pub mod run;
pub mod visitor;

use crate::error::ScrapeError;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub use orchestrator::Orchestrator;
pub use paginator::{ListingEvent, ListingPaginator, PaginationSummary};
pub use run::{Checkpointer, RunContext};
pub use visitor::DeviceVisitor;

/// Validated pipeline options, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    rate_limit: Duration,
    save_interval: Option<usize>,
}

impl PipelineOptions {
    /// Rejects a zero rate limit, and autosave without a positive interval.
    ///
    /// `save_interval` is ignored when autosave is off.
    pub fn new(rate_limit_secs: u64, autosave: bool, save_interval: Option<u32>) -> Result<Self, ScrapeError> {
        if rate_limit_secs == 0 {
            return Err(ScrapeError::Config("rate limit must be at least 1 second".to_string()));
        }

        let save_interval = match (autosave, save_interval) {
            (false, _) => None,
            (true, None) => {
                return Err(ScrapeError::Config(
                    "save interval must be specified when autosave is enabled".to_string(),
                ))
            }
            (true, Some(0)) => {
                return Err(ScrapeError::Config(
                    "save interval must be greater than 0 when autosave is enabled".to_string(),
                ))
            }
            (true, Some(n)) => Some(n as usize),
        };

        Ok(Self { rate_limit: Duration::from_secs(rate_limit_secs), save_interval })
    }

    /// Delay before every device page load.
    pub fn rate_limit(&self) -> Duration {
        self.rate_limit
    }

    pub fn autosave(&self) -> bool {
        self.save_interval.is_some()
    }

    pub fn save_interval(&self) -> Option<usize> {
        self.save_interval
    }
}

/// Result of scraping one brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandReport {
    /// Catalog name, also used for the output file name
    pub brand: String,
    /// Name taken from the listing heading, written to the manufacturer column
    pub canonical_name: String,
    pub pages: usize,
    pub devices: usize,
    pub output: PathBuf,
}

/// Result of scraping every brand in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub brands: Vec<BrandReport>,
    pub total_devices: usize,
    pub output: PathBuf,
    pub checkpoints: Vec<PathBuf>,
}
