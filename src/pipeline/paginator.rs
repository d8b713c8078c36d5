//! Walks a brand's listing pages and forwards each page's devices to the visitor.

use crate::error::ScrapeError;
use crate::gsmarena::{Dataset, DeviceRecord, ListingPage, PageSource};
use crate::pipeline::run::RunContext;
use crate::pipeline::visitor::DeviceVisitor;
use tracing::{debug, info};

/// Device and page counts for one brand's listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationSummary {
    pub pages: usize,
    pub devices: usize,
}

/// Emitted while walking a listing.
#[derive(Debug, Clone, Copy)]
pub enum ListingEvent<'r> {
    /// About to visit the devices of `page` (one-based) out of `pages`
    Page { page: usize, pages: usize },
    /// A device row was appended
    Device(&'r DeviceRecord),
}

pub struct ListingPaginator<'a, S: ?Sized> {
    source: &'a S,
    visitor: &'a DeviceVisitor<'a, S>,
}

impl<'a, S: PageSource + ?Sized> ListingPaginator<'a, S> {
    pub fn new(source: &'a S, visitor: &'a DeviceVisitor<'a, S>) -> Self {
        Self { source, visitor }
    }

    /// Loads and parses one listing page.
    pub async fn open(&self, url: &str) -> Result<ListingPage, ScrapeError> {
        let html = self.source.load(url).await?;
        let page = ListingPage::parse(&html, self.source.base_url());
        debug!("Listing {} has {} devices", url, page.device_urls.len());
        Ok(page)
    }

    /// Loads `first_page_url`, then visits every device across all pages.
    pub async fn paginate_and_visit(
        &self,
        first_page_url: &str,
        manufacturer: &str,
        dataset: &mut Dataset,
        run: &mut RunContext,
        on_event: &mut (dyn FnMut(ListingEvent<'_>) + Send),
    ) -> Result<PaginationSummary, ScrapeError> {
        let first = self.open(first_page_url).await?;
        self.visit_listing(first, manufacturer, dataset, run, on_event).await
    }

    /// Visits the devices of an already loaded first page, then loads and
    /// visits each derived page in ascending order.
    pub async fn visit_listing(
        &self,
        first: ListingPage,
        manufacturer: &str,
        dataset: &mut Dataset,
        run: &mut RunContext,
        on_event: &mut (dyn FnMut(ListingEvent<'_>) + Send),
    ) -> Result<PaginationSummary, ScrapeError> {
        let remaining = first.remaining_pages();
        let pages = remaining.len() + 1;
        info!("{}: {} listing pages", manufacturer, pages);

        on_event(ListingEvent::Page { page: 1, pages });
        let mut devices = self
            .visitor
            .visit(&first.device_urls, manufacturer, dataset, run, &mut |record: &DeviceRecord| {
                on_event(ListingEvent::Device(record))
            })
            .await?;

        for (i, url) in remaining.iter().enumerate() {
            on_event(ListingEvent::Page { page: i + 2, pages });
            let page = self.open(url).await?;
            devices += self
                .visitor
                .visit(&page.device_urls, manufacturer, dataset, run, &mut |record: &DeviceRecord| {
                    on_event(ListingEvent::Device(record))
                })
                .await?;
        }

        Ok(PaginationSummary { pages, devices })
    }
}
