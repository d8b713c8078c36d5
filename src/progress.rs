//! Progress reporting for long-running scrapes.
//!
//! Frontends implement [`ProgressObserver`] to surface status to users. All
//! hooks default to no-ops.

use crate::gsmarena::BrandEntry;
use crate::pipeline::BrandReport;
use serde::Serialize;
use tracing::info;

/// Emitted after every successfully visited device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    /// Catalog name of the brand being scraped
    pub brand: String,
    /// Zero-based position of the brand in this scrape
    pub brand_index: usize,
    /// Number of brands in this scrape
    pub brand_count: usize,
    /// Devices visited so far for this brand
    pub brand_visited: usize,
    /// Device count advertised by the catalog for this brand
    pub brand_total: u64,
    /// Devices visited so far in this scrape
    pub run_visited: usize,
    /// Advertised device count across all brands in this scrape
    pub run_total: u64,
}

pub trait ProgressObserver: Send {
    fn brand_started(&mut self, _brand: &BrandEntry, _index: usize, _count: usize) {}

    /// `page` is one-based.
    fn page_started(&mut self, _brand: &str, _page: usize, _pages: usize) {}

    fn device_visited(&mut self, _event: &ProgressEvent) {}

    fn brand_finished(&mut self, _report: &BrandReport) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl ProgressObserver for NullProgress {}

/// Reports progress as log lines.
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn brand_started(&mut self, brand: &BrandEntry, index: usize, count: usize) {
        info!("Brand {}/{}: {} ({} devices)", index + 1, count, brand.name, brand.device_count);
    }

    fn page_started(&mut self, brand: &str, page: usize, pages: usize) {
        info!("PAGE {}/{} for brand {}", page, pages, brand);
    }

    fn device_visited(&mut self, event: &ProgressEvent) {
        if event.brand_count > 1 {
            info!(
                "Scraping {} (Brand {}/{}): {}/{} total devices",
                event.brand,
                event.brand_index + 1,
                event.brand_count,
                event.run_visited,
                event.run_total
            );
        } else {
            info!("Scraping {}: {}/{} devices", event.brand, event.brand_visited, event.brand_total);
        }
    }

    fn brand_finished(&mut self, report: &BrandReport) {
        info!(
            "Finished {}: {} devices over {} pages -> {}",
            report.brand,
            report.devices,
            report.pages,
            report.output.display()
        );
    }
}
