//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::error::ScrapeError;
use crate::output::OutputLayout;
use crate::pipeline::PipelineOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Fixed delay before every device page load, in seconds
    #[serde(default = "default_rate_limit_secs")]
    pub rate_limit_secs: u64,

    /// Write periodic dataset snapshots during a run
    #[serde(default)]
    pub autosave: bool,

    /// Visits between snapshots when autosave is on
    #[serde(default = "default_save_interval")]
    pub save_interval: Option<u32>,

    /// Directory for per-brand and aggregate CSV files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory for autosave snapshots
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Terminal report format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_base_url() -> String {
    "https://www.gsmarena.com".to_string()
}

fn default_rate_limit_secs() -> u64 {
    20
}

fn default_save_interval() -> Option<u32> {
    Some(20)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("OUTPUT")
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from("TEMP")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            proxy: None,
            rate_limit_secs: default_rate_limit_secs(),
            autosave: false,
            save_interval: default_save_interval(),
            output_dir: default_output_dir(),
            temp_dir: default_temp_dir(),
            timeout_secs: default_timeout_secs(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("gsm-crawler").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides. Unparsable values are ignored.
    pub fn with_env(mut self) -> Self {
        if let Ok(proxy) = std::env::var("GSM_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Some(secs) = env_parse("GSM_RATE_LIMIT") {
            self.rate_limit_secs = secs;
        }

        if let Some(autosave) = env_parse("GSM_AUTOSAVE") {
            self.autosave = autosave;
        }

        if let Some(interval) = env_parse("GSM_SAVE_INTERVAL") {
            self.save_interval = Some(interval);
        }

        if let Ok(dir) = std::env::var("GSM_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("GSM_TEMP_DIR") {
            self.temp_dir = PathBuf::from(dir);
        }

        self
    }

    /// Validated pipeline options for this configuration.
    pub fn pipeline_options(&self) -> Result<PipelineOptions, ScrapeError> {
        PipelineOptions::new(self.rate_limit_secs, self.autosave, self.save_interval)
    }

    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.output_dir, &self.temp_dir)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.parse().ok()
}

/// Output format for terminal reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}
