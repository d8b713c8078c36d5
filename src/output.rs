//! CSV persistence for per-brand results, the aggregate dataset and checkpoints.

use crate::error::ScrapeError;
use crate::gsmarena::models::{DeviceRecord, COLUMNS};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the all-brands dataset.
pub const AGGREGATE_FILE: &str = "!GSMARENA-DATASET.csv";

/// Where result and checkpoint files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub output_dir: PathBuf,
    pub temp_dir: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new("OUTPUT", "TEMP")
    }
}

impl OutputLayout {
    pub fn new(output_dir: impl Into<PathBuf>, temp_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), temp_dir: temp_dir.into() }
    }

    /// `OUTPUT/<brand>.csv`
    pub fn brand_path(&self, brand: &str) -> PathBuf {
        self.output_dir.join(format!("{}.csv", brand))
    }

    /// `OUTPUT/!GSMARENA-DATASET.csv`
    pub fn aggregate_path(&self) -> PathBuf {
        self.output_dir.join(AGGREGATE_FILE)
    }

    /// `TEMP/<run_id>/<visits>.csv`
    pub fn checkpoint_path(&self, run_id: &str, visits: usize) -> PathBuf {
        self.temp_dir.join(run_id).join(format!("{}.csv", visits))
    }
}

/// Writes `rows` under the fixed header, creating parent directories.
/// An existing file is replaced.
pub fn write_csv(path: &Path, rows: &[DeviceRecord]) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ScrapeError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| ScrapeError::io(path, e))?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(row.values())?;
    }
    writer.flush().map_err(|e| ScrapeError::io(path, e))?;

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
