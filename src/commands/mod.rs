//! CLI command implementations.

pub mod brands;
pub mod scrape;

pub use brands::BrandsCommand;
pub use scrape::{ScrapeCommand, ScrapeTarget};
