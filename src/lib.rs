//! gsm-crawler - GSMArena device specification scraper
//!
//! Walks the manufacturer catalog, paginates each brand's listing and
//! extracts one fixed-schema row per device page into CSV files.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod gsmarena;
pub mod output;
pub mod pipeline;
pub mod progress;

pub use config::Config;
pub use error::ScrapeError;
pub use gsmarena::{BrandCatalog, BrandEntry, Dataset, DeviceRecord, GsmArenaClient, PageSource};
pub use pipeline::{Orchestrator, PipelineOptions};
