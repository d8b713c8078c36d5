//! Data models for brands, device records and the accumulated dataset.

use serde::{Deserialize, Serialize};

/// Placeholder for a specification field that had no value on the page.
pub const SENTINEL: &str = "Na";

/// Dataset columns, in output order.
pub const COLUMNS: [&str; 18] = [
    "manufacturer",
    "phonename",
    "releasedate",
    "os",
    "batsize",
    "battype",
    "scrsize",
    "scrtype",
    "nettech",
    "chipset",
    "cpu",
    "gpu",
    "internal",
    "maincammodule",
    "maincamvid",
    "selfcammodule",
    "selfcamvid",
    "price",
];

/// A manufacturer from the makers index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandEntry {
    /// Manufacturer name as shown in the index
    pub name: String,
    /// Device count advertised next to the name
    pub device_count: u64,
    /// Absolute URL of the first listing page
    pub url: String,
}

/// One row of the dataset: the specification fields of a single device.
///
/// Every field holds page text or [`SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub manufacturer: String,
    pub phone_name: String,
    pub release_date: String,
    pub os: String,
    pub battery_size: String,
    pub battery_type: String,
    pub screen_size: String,
    pub screen_type: String,
    pub network_tech: String,
    pub chipset: String,
    pub cpu: String,
    pub gpu: String,
    pub internal: String,
    pub main_cam_module: String,
    pub main_cam_video: String,
    pub selfie_cam_module: String,
    pub selfie_cam_video: String,
    pub price: String,
}

impl DeviceRecord {
    /// Field values in [`COLUMNS`] order.
    pub fn values(&self) -> [&str; 18] {
        [
            &self.manufacturer,
            &self.phone_name,
            &self.release_date,
            &self.os,
            &self.battery_size,
            &self.battery_type,
            &self.screen_size,
            &self.screen_type,
            &self.network_tech,
            &self.chipset,
            &self.cpu,
            &self.gpu,
            &self.internal,
            &self.main_cam_module,
            &self.main_cam_video,
            &self.selfie_cam_module,
            &self.selfie_cam_video,
            &self.price,
        ]
    }

    /// Number of fields that fell back to the sentinel.
    pub fn missing_fields(&self) -> usize {
        self.values().iter().filter(|v| **v == SENTINEL).count()
    }
}

/// Append-only table of device records in visit order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<DeviceRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DeviceRecord) {
        self.rows.push(record);
    }

    pub fn rows(&self) -> &[DeviceRecord] {
        &self.rows
    }

    /// Rows appended at or after `start`.
    pub fn since(&self, start: usize) -> &[DeviceRecord] {
        self.rows.get(start..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
