//! CSS selectors for GSMArena HTML parsing.
//!
//! Every selector the crawler uses is declared here. When the site layout
//! changes, update the selector, then update the matching fixture under
//! `tests/fixtures/`.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for the manufacturers index (`makers.php3`).
pub mod makers {
    use super::*;

    /// One table cell per manufacturer.
    pub static BRAND_CELL: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.st-text td").unwrap());

    /// Link inside a cell; its text is `"<name>\n<count> devices"`.
    pub static BRAND_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
}

/// Selectors for a brand's paginated device listing.
pub mod listing {
    use super::*;

    /// Device tiles, in page order.
    pub static DEVICE_TILE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#review-body > div.makers > ul > li").unwrap());

    pub static DEVICE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

    /// Page navigation control; absent on single-page brands.
    pub static NAV_PAGES: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.review-nav-v2 div.nav-pages").unwrap());

    pub static NAV_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

    /// Brand heading, e.g. "Samsung phones".
    pub static HEADING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("h1.article-info-name").unwrap());

    pub static ANY_HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
}

/// Selectors for a single device specification page.
pub mod device {
    use super::*;

    /// Specification box that scopes every field lookup.
    pub static SPEC_BOX: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#body > div:first-of-type").unwrap());

    pub static PHONE_NAME: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("h1.specs-phone-name-title").unwrap());

    pub static RELEASE_DATE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span[data-spec='released-hl']").unwrap());

    pub static OS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span[data-spec='os-hl']").unwrap());

    pub static BATTERY_SIZE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span[data-spec='batsize-hl']").unwrap());

    pub static BATTERY_TYPE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div[data-spec='battype-hl']").unwrap());

    pub static SCREEN_SIZE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div[data-spec='displayres-hl']").unwrap());

    pub static SCREEN_TYPE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='displaytype']").unwrap());

    pub static NETWORK_TECH: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("a[data-spec='nettech']").unwrap());

    pub static CHIPSET: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='chipset']").unwrap());

    pub static CPU: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='cpu']").unwrap());

    pub static GPU: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='gpu']").unwrap());

    pub static INTERNAL: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='internalmemory']").unwrap());

    pub static MAIN_CAM_MODULE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='cam1modules']").unwrap());

    pub static MAIN_CAM_VIDEO: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='cam1video']").unwrap());

    pub static SELFIE_CAM_MODULE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='cam2modules']").unwrap());

    pub static SELFIE_CAM_VIDEO: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='cam2video']").unwrap());

    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("td[data-spec='price']").unwrap());
}
