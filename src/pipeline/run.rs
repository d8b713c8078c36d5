//! Per-run state: run identifier, visit counter and checkpoint cadence.

use crate::error::ScrapeError;
use crate::gsmarena::Dataset;
use crate::output::{write_csv, OutputLayout};
use chrono::Local;
use std::path::PathBuf;
use tracing::debug;

/// State of one execution of the pipeline, fixed at construction.
#[derive(Debug, Clone)]
pub struct RunContext {
    run_id: String,
    visits: usize,
    checkpoints: Vec<PathBuf>,
}

impl RunContext {
    /// Starts a run identified by the current local time (`%Y-%m-%d-%H%M`).
    pub fn new() -> Self {
        Self::with_run_id(Local::now().format("%Y-%m-%d-%H%M").to_string())
    }

    pub fn with_run_id(run_id: impl Into<String>) -> Self {
        Self { run_id: run_id.into(), visits: 0, checkpoints: Vec::new() }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Devices visited so far in this run.
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// Counts one visit and returns the new total.
    pub fn record_visit(&mut self) -> usize {
        self.visits += 1;
        self.visits
    }

    /// Checkpoint files written so far, oldest first.
    pub fn checkpoints(&self) -> &[PathBuf] {
        &self.checkpoints
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes full dataset snapshots every `interval` visits.
#[derive(Debug, Clone)]
pub struct Checkpointer {
    interval: usize,
    layout: OutputLayout,
}

impl Checkpointer {
    pub fn new(interval: usize, layout: OutputLayout) -> Self {
        Self { interval, layout }
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Writes the visit-0 snapshot if this run has not written one yet.
    pub fn save_initial(&self, run: &mut RunContext, dataset: &Dataset) -> Result<(), ScrapeError> {
        if run.visits == 0 && run.checkpoints.is_empty() {
            self.save(run, dataset)?;
        }
        Ok(())
    }

    /// Writes a snapshot when the run's visit count is a multiple of the interval.
    pub fn save_if_due(&self, run: &mut RunContext, dataset: &Dataset) -> Result<bool, ScrapeError> {
        if self.interval == 0 || run.visits % self.interval != 0 {
            return Ok(false);
        }
        self.save(run, dataset)?;
        Ok(true)
    }

    fn save(&self, run: &mut RunContext, dataset: &Dataset) -> Result<(), ScrapeError> {
        let path = self.layout.checkpoint_path(&run.run_id, run.visits);
        write_csv(&path, dataset.rows())?;
        debug!("Checkpoint {} ({} rows)", path.display(), dataset.len());
        run.checkpoints.push(path);
        Ok(())
    }
}
