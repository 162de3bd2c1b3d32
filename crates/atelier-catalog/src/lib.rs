//! # atelier-catalog
//!
//! Everything that reads raw catalog records: the keyword classifier, the
//! product-only image matcher, and the HTTP clients for live catalog search
//! and image resolution.

pub mod classifier;
pub mod image_pattern;
pub mod resolver;
pub mod search;

pub use classifier::{classify, is_clothing, is_outerwear_family, slot_items, SlottedItems};
pub use image_pattern::ProductImageMatcher;
pub use resolver::{HttpImageResolver, NoImageResolver};
pub use search::HttpCatalogSearch;
