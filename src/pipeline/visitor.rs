//! Sequential device page visits.

use crate::error::ScrapeError;
use crate::gsmarena::{extractor, Dataset, DeviceRecord, PageSource};
use crate::pipeline::run::{Checkpointer, RunContext};
use scraper::Html;
use std::time::Duration;
use tracing::debug;

/// Loads device pages one at a time and appends one row per page.
pub struct DeviceVisitor<'a, S: ?Sized> {
    source: &'a S,
    delay: Duration,
    checkpointer: Option<&'a Checkpointer>,
}

impl<'a, S: PageSource + ?Sized> DeviceVisitor<'a, S> {
    pub fn new(source: &'a S, delay: Duration, checkpointer: Option<&'a Checkpointer>) -> Self {
        Self { source, delay, checkpointer }
    }

    /// Visits `urls` in order, appending a row with `manufacturer` for each.
    ///
    /// Sleeps the fixed delay before every load. `on_visit` receives each row
    /// once it is in the dataset. A failed load stops the sequence and is returned; rows
    /// already appended stay in the dataset.
    pub async fn visit(
        &self,
        urls: &[String],
        manufacturer: &str,
        dataset: &mut Dataset,
        run: &mut RunContext,
        on_visit: &mut (dyn FnMut(&DeviceRecord) + Send),
    ) -> Result<usize, ScrapeError> {
        if let Some(checkpointer) = self.checkpointer {
            checkpointer.save_initial(run, dataset)?;
        }

        for url in urls {
            tokio::time::sleep(self.delay).await;

            let html = self.source.load(url).await?;
            let record = extractor::extract(&Html::parse_document(&html), manufacturer);
            debug!("Extracted {} ({} fields missing)", record.phone_name, record.missing_fields());

            dataset.push(record);
            if let Some(row) = dataset.rows().last() {
                on_visit(row);
            }

            run.record_visit();
            if let Some(checkpointer) = self.checkpointer {
                checkpointer.save_if_due(run, dataset)?;
            }
        }

        Ok(urls.len())
    }
}
