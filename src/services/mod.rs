//! Filesystem services
//!
//! - Manifest loading and parsing
//! - Font payload lookup in the cache
//! - Export of selected fonts
//! - Per-platform file visibility fixes

pub mod export;
pub mod locator;
pub mod manifest;
pub mod visibility;

pub use export::Exporter;
pub use locator::FontLocator;
pub use manifest::load_manifest;
pub use visibility::{platform_visibility, FileVisibility};
