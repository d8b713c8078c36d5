//! GSMArena-specific modules for page loading, parsing, and data models.

pub mod catalog;
pub mod client;
pub mod extractor;
pub mod listing;
pub mod models;
pub mod page;
pub mod selectors;

pub use catalog::BrandCatalog;
pub use client::{GsmArenaClient, PageSource};
pub use listing::{ListingPage, PageNav};
pub use models::{BrandEntry, Dataset, DeviceRecord, COLUMNS, SENTINEL};
