//! Error types for the scraping pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the catalog, visitor, paginator and orchestrator.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Invalid pipeline options, rejected before anything is constructed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The requested manufacturer is not in the catalog.
    #[error("brand not found in catalog: {0}")]
    BrandNotFound(String),

    /// A page failed to load.
    #[error("failed to load {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    pub fn navigation(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Navigation { url: url.into(), reason: reason.to_string() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// A specification field whose selector matched nothing on the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{column}` not found on page")]
pub struct FieldNotFound {
    pub column: &'static str,
}
