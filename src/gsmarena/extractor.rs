//! Field extraction from a loaded device specification page.
//!
//! Each field is one fixed lookup ([`FieldSpec`]). Lookups are independent:
//! a missing element yields [`FieldNotFound`] for that field only, and the
//! record assembly folds it to [`SENTINEL`].

use crate::error::FieldNotFound;
use crate::gsmarena::models::{DeviceRecord, SENTINEL};
use crate::gsmarena::page::element_text;
use crate::gsmarena::selectors::device;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::trace;

/// Cleanup applied to a field's text after lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    None,
    Prefix(&'static str),
    Suffix(&'static str),
}

impl Trim {
    fn apply<'a>(&self, text: &'a str) -> &'a str {
        match *self {
            Trim::None => text,
            Trim::Prefix(p) => text.strip_prefix(p).unwrap_or(text),
            Trim::Suffix(s) => text.strip_suffix(s).unwrap_or(text),
        }
    }
}

/// A single specification field: column name, selector and trim rule.
pub struct FieldSpec {
    pub column: &'static str,
    pub selector: &'static LazyLock<Selector>,
    pub trim: Trim,
}

pub mod fields {
    use super::*;

    pub static PHONE_NAME: FieldSpec =
        FieldSpec { column: "phonename", selector: &device::PHONE_NAME, trim: Trim::None };
    pub static RELEASE_DATE: FieldSpec = FieldSpec {
        column: "releasedate",
        selector: &device::RELEASE_DATE,
        trim: Trim::Prefix("Released "),
    };
    pub static OS: FieldSpec = FieldSpec { column: "os", selector: &device::OS, trim: Trim::None };
    pub static BATTERY_SIZE: FieldSpec =
        FieldSpec { column: "batsize", selector: &device::BATTERY_SIZE, trim: Trim::None };
    pub static BATTERY_TYPE: FieldSpec =
        FieldSpec { column: "battype", selector: &device::BATTERY_TYPE, trim: Trim::None };
    pub static SCREEN_SIZE: FieldSpec = FieldSpec {
        column: "scrsize",
        selector: &device::SCREEN_SIZE,
        trim: Trim::Suffix(" pixels"),
    };
    pub static SCREEN_TYPE: FieldSpec =
        FieldSpec { column: "scrtype", selector: &device::SCREEN_TYPE, trim: Trim::None };
    pub static NETWORK_TECH: FieldSpec =
        FieldSpec { column: "nettech", selector: &device::NETWORK_TECH, trim: Trim::None };
    pub static CHIPSET: FieldSpec =
        FieldSpec { column: "chipset", selector: &device::CHIPSET, trim: Trim::None };
    pub static CPU: FieldSpec = FieldSpec { column: "cpu", selector: &device::CPU, trim: Trim::None };
    pub static GPU: FieldSpec = FieldSpec { column: "gpu", selector: &device::GPU, trim: Trim::None };
    pub static INTERNAL: FieldSpec =
        FieldSpec { column: "internal", selector: &device::INTERNAL, trim: Trim::None };
    pub static MAIN_CAM_MODULE: FieldSpec = FieldSpec {
        column: "maincammodule",
        selector: &device::MAIN_CAM_MODULE,
        trim: Trim::None,
    };
    pub static MAIN_CAM_VIDEO: FieldSpec =
        FieldSpec { column: "maincamvid", selector: &device::MAIN_CAM_VIDEO, trim: Trim::None };
    pub static SELFIE_CAM_MODULE: FieldSpec = FieldSpec {
        column: "selfcammodule",
        selector: &device::SELFIE_CAM_MODULE,
        trim: Trim::None,
    };
    pub static SELFIE_CAM_VIDEO: FieldSpec =
        FieldSpec { column: "selfcamvid", selector: &device::SELFIE_CAM_VIDEO, trim: Trim::None };
    pub static PRICE: FieldSpec =
        FieldSpec { column: "price", selector: &device::PRICE, trim: Trim::Prefix("About ") };

    /// All page-derived fields, in column order (manufacturer excluded).
    pub static ALL: [&FieldSpec; 17] = [
        &PHONE_NAME,
        &RELEASE_DATE,
        &OS,
        &BATTERY_SIZE,
        &BATTERY_TYPE,
        &SCREEN_SIZE,
        &SCREEN_TYPE,
        &NETWORK_TECH,
        &CHIPSET,
        &CPU,
        &GPU,
        &INTERNAL,
        &MAIN_CAM_MODULE,
        &MAIN_CAM_VIDEO,
        &SELFIE_CAM_MODULE,
        &SELFIE_CAM_VIDEO,
        &PRICE,
    ];
}

/// Looks up one field inside `scope`.
///
/// An element with no text after trimming counts as not found.
pub fn extract_field(scope: ElementRef, spec: &FieldSpec) -> Result<String, FieldNotFound> {
    let missing = FieldNotFound { column: spec.column };
    let element = scope.select(spec.selector).next().ok_or_else(|| missing.clone())?;

    let text = element_text(element);
    let value = spec.trim.apply(&text).trim();
    if value.is_empty() {
        return Err(missing);
    }
    Ok(value.to_string())
}

/// Builds a record from a device page.
///
/// `manufacturer` comes from the caller, not the page. Never fails: every
/// field is either page text or the sentinel.
pub fn extract(document: &Html, manufacturer: &str) -> DeviceRecord {
    let scope = document.select(&device::SPEC_BOX).next().unwrap_or_else(|| {
        trace!("Specification box not found, searching whole document");
        document.root_element()
    });

    let field = |spec: &FieldSpec| {
        extract_field(scope, spec).unwrap_or_else(|missing| {
            trace!("{}", missing);
            SENTINEL.to_string()
        })
    };

    DeviceRecord {
        manufacturer: manufacturer.to_string(),
        phone_name: field(&fields::PHONE_NAME),
        release_date: field(&fields::RELEASE_DATE),
        os: field(&fields::OS),
        battery_size: field(&fields::BATTERY_SIZE),
        battery_type: field(&fields::BATTERY_TYPE),
        screen_size: field(&fields::SCREEN_SIZE),
        screen_type: field(&fields::SCREEN_TYPE),
        network_tech: field(&fields::NETWORK_TECH),
        chipset: field(&fields::CHIPSET),
        cpu: field(&fields::CPU),
        gpu: field(&fields::GPU),
        internal: field(&fields::INTERNAL),
        main_cam_module: field(&fields::MAIN_CAM_MODULE),
        main_cam_video: field(&fields::MAIN_CAM_VIDEO),
        selfie_cam_module: field(&fields::SELFIE_CAM_MODULE),
        selfie_cam_video: field(&fields::SELFIE_CAM_VIDEO),
        price: field(&fields::PRICE),
    }
}
