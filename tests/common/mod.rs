//! In-memory site used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use gsm_crawler::{PageSource, ScrapeError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BASE: &str = "http://gsm.test";

/// Serves fixed pages keyed by absolute URL and records every load.
#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
    loads: Arc<Mutex<Vec<String>>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `html` under `BASE/<path>`.
    pub fn page(mut self, path: &str, html: impl Into<String>) -> Self {
        self.pages.insert(format!("{}/{}", BASE, path), html.into());
        self
    }

    /// Shared handle on the load log, usable after the source is moved.
    pub fn load_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.loads)
    }
}

#[async_trait]
impl PageSource for FixtureSource {
    async fn load(&self, url: &str) -> Result<String, ScrapeError> {
        self.loads.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| ScrapeError::navigation(url, "status 404"))
    }

    fn base_url(&self) -> &str {
        BASE
    }
}

/// Makers index listing `(name, listing path, advertised count)`.
pub fn makers_html(brands: &[(&str, &str, usize)]) -> String {
    let cells: String = brands
        .iter()
        .map(|(name, path, count)| {
            format!(r#"<td><a href="{path}">{name}<br><span>{count} devices</span></a></td>"#)
        })
        .collect();
    format!(r#"<html><body><div class="st-text"><table><tr>{cells}</tr></table></div></body></html>"#)
}

/// Listing page with an optional heading and optional navigation
/// `(current, last, last-page path)`.
pub fn listing_html(heading: Option<&str>, devices: &[&str], nav: Option<(u32, u32, &str)>) -> String {
    let heading = heading
        .map(|h| format!(r#"<div class="article-info"><h1 class="article-info-name">{h}</h1></div>"#))
        .unwrap_or_default();
    let tiles: String = devices
        .iter()
        .map(|d| format!(r#"<li><a href="{d}"><img src="x.jpg"><strong><span>{d}</span></strong></a></li>"#))
        .collect();
    let nav = nav
        .map(|(current, last, path)| {
            let mut numbers = String::new();
            for i in 1..=last {
                if i == current {
                    numbers.push_str(&format!("<strong>{i}</strong>\n"));
                } else if i == last {
                    numbers.push_str(&format!("<a href=\"{path}\">{i}</a>\n"));
                } else {
                    numbers.push_str(&format!("<a href=\"#\">{i}</a>\n"));
                }
            }
            format!(r#"<div class="review-nav-v2"><div class="nav-pages">{numbers}</div></div>"#)
        })
        .unwrap_or_default();

    format!(
        r#"<html><body>{heading}<div id="review-body"><div class="makers"><ul>{tiles}</ul></div></div>{nav}</body></html>"#
    )
}

/// Device page carrying a name and a price.
pub fn device_html(name: &str) -> String {
    format!(
        r#"<html><body><div id="body"><div class="main-review">
            <h1 class="specs-phone-name-title">{name}</h1>
            <table><tr><td data-spec="price">About 100 EUR</td></tr></table>
        </div></div></body></html>"#
    )
}

/// A site where every brand has a single listing page. Devices are named
/// `"<brand> <n>"` and live at `<brand>-<n>.php`.
pub fn single_page_site(brands: &[(&str, usize)]) -> FixtureSource {
    let catalog: Vec<(String, String, usize)> = brands
        .iter()
        .map(|(name, count)| (name.to_string(), format!("{}-phones.php", name.to_lowercase()), *count))
        .collect();
    let rows: Vec<(&str, &str, usize)> =
        catalog.iter().map(|(n, p, c)| (n.as_str(), p.as_str(), *c)).collect();

    let mut source = FixtureSource::new().page("makers.php3", makers_html(&rows));
    for (name, path, count) in &catalog {
        let devices: Vec<String> = (1..=*count).map(|i| format!("{}-{}.php", name.to_lowercase(), i)).collect();
        let device_refs: Vec<&str> = devices.iter().map(String::as_str).collect();
        source = source.page(path, listing_html(Some(&format!("{} phones", name)), &device_refs, None));
        for (i, device) in devices.iter().enumerate() {
            source = source.page(device, device_html(&format!("{} {}", name, i + 1)));
        }
    }
    source
}

pub const HEADER: &str = "manufacturer,phonename,releasedate,os,batsize,battype,scrsize,scrtype,nettech,chipset,cpu,gpu,internal,maincammodule,maincamvid,selfcammodule,selfcamvid,price";

/// First line of a CSV file.
pub fn csv_header(path: &std::path::Path) -> String {
    let content = std::fs::read_to_string(path).unwrap();
    content.lines().next().unwrap_or_default().to_string()
}

/// Data lines of a CSV file, header excluded.
pub fn csv_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.records().map(|r| r.unwrap().iter().map(str::to_string).collect()).collect()
}
