//! gsm-crawler - GSMArena device specification scraper CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use gsm_crawler::commands::{BrandsCommand, ScrapeCommand, ScrapeTarget};
use gsm_crawler::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gsm-crawler",
    version,
    about = "Scrape device specifications from GSMArena into CSV files",
    long_about = "Walks GSMArena brand listings one device page at a time and writes one CSV row per device."
)]
struct Cli {
    /// Seconds to wait before every device page load
    #[arg(long, global = true)]
    rate_limit: Option<u64>,

    /// Write periodic dataset snapshots to the temp directory
    #[arg(long, global = true)]
    autosave: bool,

    /// Devices between snapshots when autosave is on
    #[arg(long, global = true)]
    save_interval: Option<u32>,

    /// Directory for result CSV files
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Directory for autosave snapshots
    #[arg(long, global = true)]
    temp_dir: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true, env = "GSM_CONFIG")]
    config: Option<PathBuf>,

    /// Output format for reports
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog brands
    #[command(alias = "b")]
    Brands {
        /// Only show brands whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Scrape every device of one brand
    Brand {
        /// Brand name exactly as listed by `brands`
        name: String,
    },

    /// Scrape every brand in the catalog
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(secs) = cli.rate_limit {
        config.rate_limit_secs = secs;
    }
    if cli.autosave {
        config.autosave = true;
    }
    if let Some(interval) = cli.save_interval {
        config.save_interval = Some(interval);
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(dir) = cli.temp_dir {
        config.temp_dir = dir;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let output = match cli.command {
        Commands::Brands { search } => BrandsCommand::new(config).execute(search.as_deref()).await?,
        Commands::Brand { name } => ScrapeCommand::new(config).execute(&ScrapeTarget::Brand(name)).await?,
        Commands::All => ScrapeCommand::new(config).execute(&ScrapeTarget::All).await?,
    };

    println!("{}", output);
    Ok(())
}
