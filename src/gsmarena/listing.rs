//! Parsing of a brand's device listing pages.

use crate::gsmarena::page::{absolute_url, digits, element_text};
use crate::gsmarena::selectors::listing;
use regex_lite::{NoExpand, Regex};
use scraper::Html;
use std::sync::LazyLock;
use tracing::debug;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Page-number token in listing URLs, e.g. `samsung-phones-f-9-0-p2.php`.
static PAGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"p\d+").unwrap());

/// Parsed page navigation control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNav {
    pub current: u64,
    pub last: u64,
    /// Absolute URL of the last-page link, used as the address template.
    pub template: String,
}

impl PageNav {
    /// Addresses of pages `current+1 ..= last`, in ascending order.
    pub fn page_urls(&self) -> Vec<String> {
        (self.current..self.last).map(|i| page_url(&self.template, i + 1)).collect()
    }
}

/// Substitutes every `pNN` token in `template` with `p{page}`.
pub fn page_url(template: &str, page: u64) -> String {
    let token = format!("p{}", page);
    PAGE_TOKEN.replace_all(template, NoExpand(&token)).into_owned()
}

/// Everything the paginator needs from one listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    pub nav: Option<PageNav>,
    pub device_urls: Vec<String>,
    pub heading: Option<String>,
}

impl ListingPage {
    pub fn parse(html: &str, base_url: &str) -> Self {
        let document = Html::parse_document(html);
        Self {
            nav: parse_page_nav(&document, base_url),
            device_urls: device_urls(&document, base_url),
            heading: canonical_brand_name(&document),
        }
    }

    /// Derived addresses of the remaining pages; empty for single-page brands.
    pub fn remaining_pages(&self) -> Vec<String> {
        self.nav.as_ref().map(PageNav::page_urls).unwrap_or_default()
    }
}

/// Reads the navigation control: first and last integers in its text, and
/// the href of its last link.
///
/// Returns `None` when the control is absent, carries no digits, or has no
/// link, all of which mean "single page".
pub fn parse_page_nav(document: &Html, base_url: &str) -> Option<PageNav> {
    let nav = document.select(&listing::NAV_PAGES).next()?;

    let text = element_text(nav);
    let numbers: Vec<u64> = NUMBER.find_iter(&text).filter_map(|m| digits(m.as_str())).collect();
    let (Some(&current), Some(&last)) = (numbers.first(), numbers.last()) else {
        debug!("Page navigation text {:?} has no page numbers", text);
        return None;
    };

    let href = nav.select(&listing::NAV_LINK).last()?.value().attr("href")?;

    Some(PageNav { current, last, template: absolute_url(base_url, href) })
}

/// Device page addresses, one per tile, in DOM order.
pub fn device_urls(document: &Html, base_url: &str) -> Vec<String> {
    document
        .select(&listing::DEVICE_TILE)
        .filter_map(|tile| tile.select(&listing::DEVICE_LINK).next())
        .filter_map(|link| link.value().attr("href"))
        .map(|href| absolute_url(base_url, href))
        .collect()
}

/// First whitespace-delimited token of the brand heading ("Samsung phones"
/// gives "Samsung").
pub fn canonical_brand_name(document: &Html) -> Option<String> {
    let heading = document
        .select(&listing::HEADING)
        .next()
        .or_else(|| document.select(&listing::ANY_HEADING).next())?;

    element_text(heading).split_whitespace().next().map(str::to_string)
}
