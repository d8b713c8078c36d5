//! Terminal output for catalogs and scrape reports (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::gsmarena::BrandEntry;
use crate::pipeline::{BrandReport, RunReport};

/// Formats command results for the terminal.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats catalog entries.
    pub fn format_brands(&self, brands: &[&BrandEntry]) -> String {
        if brands.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => to_csv(&BRAND_HEADER, &[]).unwrap_or_default(),
                _ => "No brands found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(brands).unwrap_or_else(|_| "[]".to_string()),
            OutputFormat::Table => self.table_brands(brands),
            OutputFormat::Markdown => self.markdown_brands(brands),
            OutputFormat::Csv => {
                let rows: Vec<_> = brands.iter().map(|b| brand_row(b)).collect();
                to_csv(&BRAND_HEADER, &rows).unwrap_or_default()
            }
        }
    }

    /// Formats the outcome of a single-brand scrape.
    pub fn format_brand_report(&self, report: &BrandReport) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string()),
            OutputFormat::Table => {
                let lines = [
                    format!("Brand:    {}", report.brand),
                    format!("Heading:  {}", report.canonical_name),
                    format!("Pages:    {}", report.pages),
                    format!("Devices:  {}", report.devices),
                    format!("Output:   {}", report.output.display()),
                ];
                lines.join("\n")
            }
            OutputFormat::Markdown => {
                let mut lines = vec![format!("## {}", report.brand), String::new()];
                lines.push(format!("- **Heading:** {}", report.canonical_name));
                lines.push(format!("- **Pages:** {}", report.pages));
                lines.push(format!("- **Devices:** {}", report.devices));
                lines.push(format!("- **Output:** `{}`", report.output.display()));
                lines.join("\n")
            }
            OutputFormat::Csv => to_csv(&REPORT_HEADER, &[report_row(report)]).unwrap_or_default(),
        }
    }

    /// Formats the outcome of a whole-catalog scrape.
    pub fn format_run_report(&self, report: &RunReport) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string()),
            OutputFormat::Table => self.table_run(report),
            OutputFormat::Markdown => self.markdown_run(report),
            OutputFormat::Csv => {
                let rows: Vec<_> = report.brands.iter().map(report_row).collect();
                to_csv(&REPORT_HEADER, &rows).unwrap_or_default()
            }
        }
    }

    fn table_brands(&self, brands: &[&BrandEntry]) -> String {
        let name_width = brands.iter().map(|b| b.name.len()).max().unwrap_or(0).max(5);
        let count_width = 7;

        let mut lines = Vec::new();
        lines.push(format!("{:<name_width$}  {:>count_width$}  URL", "Brand", "Devices"));
        lines.push(format!("{:-<name_width$}  {:-<count_width$}  {:-<3}", "", "", ""));

        for brand in brands {
            lines.push(format!(
                "{:<name_width$}  {:>count_width$}  {}",
                brand.name, brand.device_count, brand.url
            ));
        }

        let devices: u64 = brands.iter().map(|b| b.device_count).sum();
        lines.push(String::new());
        lines.push(format!("Total: {} brands, {} devices", brands.len(), devices));
        lines.join("\n")
    }

    fn markdown_brands(&self, brands: &[&BrandEntry]) -> String {
        let mut lines = Vec::new();
        lines.push("| Brand | Devices |".to_string());
        lines.push("|-------|---------|".to_string());
        for brand in brands {
            lines.push(format!("| [{}]({}) | {} |", brand.name, brand.url, brand.device_count));
        }
        lines.push(String::new());
        lines.push(format!("*{} brands*", brands.len()));
        lines.join("\n")
    }

    fn table_run(&self, report: &RunReport) -> String {
        let name_width = report.brands.iter().map(|b| b.brand.len()).max().unwrap_or(0).max(5);

        let mut lines = Vec::new();
        lines.push(format!("{:<name_width$}  {:>5}  {:>7}  Output", "Brand", "Pages", "Devices"));
        lines.push(format!("{:-<name_width$}  {:-<5}  {:-<7}  {:-<6}", "", "", "", ""));
        for brand in &report.brands {
            lines.push(format!(
                "{:<name_width$}  {:>5}  {:>7}  {}",
                brand.brand,
                brand.pages,
                brand.devices,
                brand.output.display()
            ));
        }

        lines.push(String::new());
        lines.push(format!("Run:          {}", report.run_id));
        lines.push(format!("Devices:      {}", report.total_devices));
        lines.push(format!("Dataset:      {}", report.output.display()));
        lines.push(format!("Checkpoints:  {}", report.checkpoints.len()));
        lines.join("\n")
    }

    fn markdown_run(&self, report: &RunReport) -> String {
        let mut lines = vec![format!("## Run {}", report.run_id), String::new()];
        lines.push("| Brand | Pages | Devices |".to_string());
        lines.push("|-------|-------|---------|".to_string());
        for brand in &report.brands {
            lines.push(format!("| {} | {} | {} |", brand.brand, brand.pages, brand.devices));
        }
        lines.push(String::new());
        lines.push(format!(
            "*{} devices written to `{}`*",
            report.total_devices,
            report.output.display()
        ));
        lines.join("\n")
    }
}

const BRAND_HEADER: [&str; 3] = ["brand", "devices", "url"];
const REPORT_HEADER: [&str; 5] = ["brand", "canonical_name", "pages", "devices", "output"];

fn brand_row(brand: &BrandEntry) -> Vec<String> {
    vec![brand.name.clone(), brand.device_count.to_string(), brand.url.clone()]
}

fn report_row(report: &BrandReport) -> Vec<String> {
    vec![
        report.brand.clone(),
        report.canonical_name.clone(),
        report.pages.to_string(),
        report.devices.to_string(),
        report.output.display().to_string(),
    ]
}

fn to_csv(header: &[&str], rows: &[Vec<String>]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?.trim_end().to_string())
}
