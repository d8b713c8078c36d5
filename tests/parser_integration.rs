//! Integration tests for the page parsers using fixture files.

use gsm_crawler::gsmarena::{extractor, ListingPage};
use gsm_crawler::{BrandCatalog, DeviceRecord};
use scraper::Html;

const BASE: &str = "https://www.gsmarena.com";

const MAKERS_FIXTURE: &str = include_str!("fixtures/makers.html");
const LISTING_PAGED_FIXTURE: &str = include_str!("fixtures/listing_paged.html");
const LISTING_SINGLE_FIXTURE: &str = include_str!("fixtures/listing_single.html");
const DEVICE_FIXTURE: &str = include_str!("fixtures/device.html");
const DEVICE_NO_PRICE_FIXTURE: &str = include_str!("fixtures/device_no_price.html");

fn extract(html: &str, manufacturer: &str) -> DeviceRecord {
    extractor::extract(&Html::parse_document(html), manufacturer)
}

#[test]
fn test_parse_makers_index() {
    let catalog = BrandCatalog::parse(MAKERS_FIXTURE, BASE);

    // "Coming soon" has no device count and is skipped
    assert_eq!(catalog.len(), 5);
    let names: Vec<_> = catalog.brands().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Acer", "alcatel", "Apple", "Samsung", "Sony Ericsson"]);

    let samsung = catalog.lookup("Samsung").unwrap();
    assert_eq!(samsung.device_count, 1412);
    assert_eq!(samsung.url, "https://www.gsmarena.com/samsung-phones-9.php");
    assert_eq!(catalog.total_devices(), 100 + 411 + 128 + 1412 + 188);
}

#[test]
fn test_parse_paged_listing() {
    let page = ListingPage::parse(LISTING_PAGED_FIXTURE, BASE);

    assert_eq!(page.heading.as_deref(), Some("Samsung"));
    assert_eq!(page.device_urls.len(), 3);
    assert_eq!(page.device_urls[0], "https://www.gsmarena.com/samsung_galaxy_s24_ultra-12771.php");

    let nav = page.nav.as_ref().unwrap();
    assert_eq!((nav.current, nav.last), (1, 4));
    assert_eq!(
        page.remaining_pages(),
        vec![
            "https://www.gsmarena.com/samsung-phones-f-9-0-p2.php",
            "https://www.gsmarena.com/samsung-phones-f-9-0-p3.php",
            "https://www.gsmarena.com/samsung-phones-f-9-0-p4.php",
        ]
    );
}

#[test]
fn test_parse_single_listing() {
    let page = ListingPage::parse(LISTING_SINGLE_FIXTURE, BASE);

    assert_eq!(page.heading.as_deref(), Some("Sony"));
    assert!(page.nav.is_none());
    assert!(page.remaining_pages().is_empty());
    assert_eq!(
        page.device_urls,
        vec![
            "https://www.gsmarena.com/sony_ericsson_xperia_arc_s-4173.php",
            "https://www.gsmarena.com/sony_ericsson_k800-1525.php",
        ]
    );
}

#[test]
fn test_extract_device_page() {
    let record = extract(DEVICE_FIXTURE, "Samsung");

    assert_eq!(record.manufacturer, "Samsung");
    assert_eq!(record.phone_name, "Samsung Galaxy S24 Ultra");
    assert_eq!(record.release_date, "2024, January 24");
    assert_eq!(record.os, "Android 14, up to 7 major upgrades, One UI 7");
    assert_eq!(record.battery_size, "5000");
    assert_eq!(record.battery_type, "Li-Ion");
    assert_eq!(record.screen_size, "1440x3120");
    assert_eq!(record.screen_type, "Dynamic LTPO AMOLED 2X, 120Hz, HDR10+, 2600 nits (peak)");
    assert_eq!(record.network_tech, "GSM / CDMA / HSPA / EVDO / LTE / 5G");
    assert_eq!(record.chipset, "Qualcomm SM8650-AC Snapdragon 8 Gen 3 (4 nm)");
    assert!(record.cpu.starts_with("Octa-core (1x3.39GHz Cortex-X4 & "));
    assert_eq!(record.gpu, "Adreno 750 (1 GHz)");
    assert_eq!(record.internal, "256GB 12GB RAM, 512GB 12GB RAM, 1TB 12GB RAM");
    assert_eq!(record.main_cam_module.lines().count(), 4);
    assert!(record.main_cam_module.starts_with("200 MP, f/1.7, 24mm (wide)\n10 MP"));
    assert_eq!(record.main_cam_video, "8K@24/30fps, 4K@30/60/120fps, 1080p@30/60/240fps");
    assert_eq!(record.selfie_cam_module, "12 MP, f/2.2, 26mm (wide)");
    assert_eq!(record.selfie_cam_video, "4K@30/60fps, 1080p@30fps");
    // The sidebar price outside the specification box is ignored
    assert_eq!(record.price, "1040 EUR");
    assert_eq!(record.missing_fields(), 0);
}

#[test]
fn test_extract_sparse_device_page() {
    let record = extract(DEVICE_NO_PRICE_FIXTURE, "Sony");

    assert_eq!(record.phone_name, "Sony Ericsson K800");
    assert_eq!(record.release_date, "2006, July");
    assert_eq!(record.screen_size, "240x320");
    assert_eq!(record.main_cam_module, "3.15 MP, autofocus");

    // empty os span, and fields the page does not have
    for value in [&record.os, &record.chipset, &record.cpu, &record.gpu, &record.selfie_cam_module, &record.price] {
        assert_eq!(value, "Na");
    }
    assert_eq!(record.missing_fields(), 7);
}

#[test]
fn test_listing_page_is_not_a_device_page() {
    let record = extract(LISTING_SINGLE_FIXTURE, "Sony");
    assert_eq!(record.manufacturer, "Sony");
    assert_eq!(record.missing_fields(), 17);
}
