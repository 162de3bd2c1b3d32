//! Shared fixtures and in-process fakes for atelier tests.
//!
//! JSON fixtures live next to this crate's manifest. The fakes stand in for
//! the live catalog search and the image resolution service.

pub mod builders;
pub mod fakes;

pub use builders::{item, look, ItemBuilder};
pub use fakes::{StaticCatalogSearch, StaticImageResolver};

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use atelier_core::models::{CatalogItem, TestCase};

/// Fixture files sit beside this crate's manifest, wherever the caller lives.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative_path)
}

/// Load and deserialize a JSON fixture. Panics on a missing or malformed file.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("parse fixture {}: {e}", path.display()))
}

/// The sample catalog: tops, bottoms, shoes of both opennesses, a dress,
/// outerwear, accessories, and two items with model photos only.
pub fn sample_catalog() -> Vec<CatalogItem> {
    load_fixture("catalog/sample_catalog.json")
}

/// A handful of harness scenarios with hand-checked expectations.
pub fn sample_test_cases() -> Vec<TestCase> {
    load_fixture("harness/test_cases.json")
}
