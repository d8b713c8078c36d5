//! Manufacturer catalog loaded once from the makers index.

use crate::error::ScrapeError;
use crate::gsmarena::client::PageSource;
use crate::gsmarena::models::BrandEntry;
use crate::gsmarena::page::{absolute_url, digits, element_text};
use crate::gsmarena::selectors::makers;
use scraper::Html;
use tracing::{debug, info, warn};

/// All manufacturers in index order. Immutable after loading.
#[derive(Debug, Clone, Default)]
pub struct BrandCatalog {
    brands: Vec<BrandEntry>,
}

impl BrandCatalog {
    pub fn new(brands: Vec<BrandEntry>) -> Self {
        Self { brands }
    }

    /// Loads and parses the makers index from `source`.
    pub async fn load<S: PageSource + ?Sized>(source: &S) -> Result<Self, ScrapeError> {
        let url = source.makers_url();
        info!("Loading manufacturer catalog from {}", url);

        let html = source.load(&url).await?;
        let catalog = Self::parse(&html, source.base_url());

        info!("Catalog has {} brands ({} devices)", catalog.len(), catalog.total_devices());
        Ok(catalog)
    }

    /// Parses the makers index HTML. Cells that do not carry a
    /// `"<name>\n<count> devices"` link are skipped.
    pub fn parse(html: &str, base_url: &str) -> Self {
        let document = Html::parse_document(html);
        let mut brands = Vec::new();

        for cell in document.select(&makers::BRAND_CELL) {
            let Some(link) = cell.select(&makers::BRAND_LINK).next() else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                warn!("Brand link without href, skipping");
                continue;
            };

            let text = element_text(link);
            match parse_brand_label(&text) {
                Some((name, device_count)) => brands.push(BrandEntry {
                    name,
                    device_count,
                    url: absolute_url(base_url, href),
                }),
                None => warn!("Unrecognised brand label {:?}, skipping", text),
            }
        }

        debug!("Parsed {} brand entries", brands.len());
        Self { brands }
    }

    /// Finds a brand by its exact catalog name.
    pub fn lookup(&self, name: &str) -> Result<&BrandEntry, ScrapeError> {
        self.brands
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| ScrapeError::BrandNotFound(name.to_string()))
    }

    /// Brands whose name contains `term`, case-insensitive.
    pub fn search(&self, term: &str) -> Vec<&BrandEntry> {
        let term = term.to_lowercase();
        self.brands.iter().filter(|b| b.name.to_lowercase().contains(&term)).collect()
    }

    pub fn brands(&self) -> &[BrandEntry] {
        &self.brands
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Sum of the advertised device counts.
    pub fn total_devices(&self) -> u64 {
        self.brands.iter().map(|b| b.device_count).sum()
    }
}

/// Splits `"Acme\n150 devices"` into `("Acme", 150)`.
pub fn parse_brand_label(text: &str) -> Option<(String, u64)> {
    let (name, count) = text.split_once('\n')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), digits(count)?))
}
