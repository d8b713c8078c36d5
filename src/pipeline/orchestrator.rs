//! Drives one brand or the whole catalog and persists the results.

use crate::error::ScrapeError;
use crate::gsmarena::{BrandCatalog, BrandEntry, Dataset, PageSource};
use crate::output::{write_csv, OutputLayout};
use crate::pipeline::paginator::{ListingEvent, ListingPaginator};
use crate::pipeline::run::{Checkpointer, RunContext};
use crate::pipeline::visitor::DeviceVisitor;
use crate::pipeline::{BrandReport, PipelineOptions, RunReport};
use crate::progress::{NullProgress, ProgressEvent, ProgressObserver};
use tracing::{info, warn};

/// Owns the page source, the catalog and the run's dataset.
///
/// The dataset only grows: scraping several brands with one orchestrator
/// accumulates all of their rows.
pub struct Orchestrator<S> {
    source: S,
    options: PipelineOptions,
    layout: OutputLayout,
    checkpointer: Option<Checkpointer>,
    catalog: BrandCatalog,
    dataset: Dataset,
    run: RunContext,
    observer: Box<dyn ProgressObserver>,
}

impl<S: PageSource> Orchestrator<S> {
    /// Loads the catalog from `source` and starts a new run.
    pub async fn new(source: S, options: PipelineOptions, layout: OutputLayout) -> Result<Self, ScrapeError> {
        let catalog = BrandCatalog::load(&source).await?;
        Ok(Self::with_catalog(source, options, layout, catalog))
    }

    /// Starts a new run over an already loaded catalog.
    pub fn with_catalog(source: S, options: PipelineOptions, layout: OutputLayout, catalog: BrandCatalog) -> Self {
        let checkpointer = options.save_interval().map(|n| Checkpointer::new(n, layout.clone()));
        Self {
            source,
            options,
            layout,
            checkpointer,
            catalog,
            dataset: Dataset::new(),
            run: RunContext::new(),
            observer: Box::new(NullProgress),
        }
    }

    pub fn with_observer(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Replaces the run context, e.g. to pin the checkpoint directory.
    pub fn with_run(mut self, run: RunContext) -> Self {
        self.run = run;
        self
    }

    pub fn catalog(&self) -> &BrandCatalog {
        &self.catalog
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn run(&self) -> &RunContext {
        &self.run
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Scrapes one brand and writes its rows to `OUTPUT/<name>.csv`.
    pub async fn scrape_brand(&mut self, name: &str) -> Result<BrandReport, ScrapeError> {
        let entry = self.catalog.lookup(name)?.clone();
        let run_total = entry.device_count;
        self.scrape_entry(&entry, 0, 1, run_total, 0).await
    }

    /// Scrapes every brand in catalog order, then writes the whole dataset
    /// to `OUTPUT/!GSMARENA-DATASET.csv`. Stops at the first failing brand.
    pub async fn scrape_all(&mut self) -> Result<RunReport, ScrapeError> {
        let brands = self.catalog.brands().to_vec();
        let run_total = self.catalog.total_devices();
        info!("Scraping all {} brands ({} devices advertised)", brands.len(), run_total);

        let mut reports = Vec::with_capacity(brands.len());
        let mut run_visited = 0;
        for (index, entry) in brands.iter().enumerate() {
            let report = self.scrape_entry(entry, index, brands.len(), run_total, run_visited).await?;
            run_visited += report.devices;
            reports.push(report);
        }

        let output = self.layout.aggregate_path();
        write_csv(&output, self.dataset.rows())?;
        info!("Wrote {} rows to {}", self.dataset.len(), output.display());

        Ok(RunReport {
            run_id: self.run.run_id().to_string(),
            brands: reports,
            total_devices: run_visited,
            output,
            checkpoints: self.run.checkpoints().to_vec(),
        })
    }

    async fn scrape_entry(
        &mut self,
        entry: &BrandEntry,
        index: usize,
        count: usize,
        run_total: u64,
        run_visited: usize,
    ) -> Result<BrandReport, ScrapeError> {
        let Self { source, options, layout, checkpointer, dataset, run, observer, .. } = self;
        observer.brand_started(entry, index, count);

        let visitor = DeviceVisitor::new(&*source, options.rate_limit(), checkpointer.as_ref());
        let paginator = ListingPaginator::new(&*source, &visitor);

        let first = paginator.open(&entry.url).await?;
        let canonical_name = match first.heading.clone() {
            Some(name) => name,
            None => {
                warn!("No brand heading on {}, using catalog name {}", entry.url, entry.name);
                entry.name.clone()
            }
        };

        let start = dataset.len();
        let brand_total = entry.device_count;
        let mut brand_visited = 0;
        let mut on_event = |event: ListingEvent<'_>| match event {
            ListingEvent::Page { page, pages } => observer.page_started(&entry.name, page, pages),
            ListingEvent::Device(_) => {
                brand_visited += 1;
                observer.device_visited(&ProgressEvent {
                    brand: entry.name.clone(),
                    brand_index: index,
                    brand_count: count,
                    brand_visited,
                    brand_total,
                    run_visited: run_visited + brand_visited,
                    run_total,
                });
            }
        };

        let summary = paginator.visit_listing(first, &canonical_name, dataset, run, &mut on_event).await?;

        let output = layout.brand_path(&entry.name);
        write_csv(&output, dataset.since(start))?;

        let report = BrandReport {
            brand: entry.name.clone(),
            canonical_name,
            pages: summary.pages,
            devices: summary.devices,
            output,
        };
        observer.brand_finished(&report);
        Ok(report)
    }
}
