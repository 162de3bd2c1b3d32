use serde::{Deserialize, Serialize};

use super::catalog_item::CatalogItem;
use super::degradation_event::DegradationEvent;
use super::profile::StyleProfile;

/// A scored, described bundle of catalog items forming one outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Look {
    pub id: String,
    pub items: Vec<CatalogItem>,
    pub style: String,
    pub occasion: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_approved: Option<bool>,
}

impl Look {
    pub fn new(
        items: Vec<CatalogItem>,
        style: impl Into<String>,
        occasion: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            items,
            style: style.into(),
            occasion: occasion.into(),
            description: description.into(),
            quality_score: None,
            supervisor_approved: None,
        }
    }

    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.id.as_str())
    }

    /// Lowercase concatenation of item names and the look description.
    pub fn text(&self) -> String {
        let mut text = self
            .items
            .iter()
            .map(|i| i.display_name.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        text.push(' ');
        text.push_str(&self.description);
        text.to_lowercase()
    }
}

/// One complete top/bottom/shoes outfit assembled by the styling stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub top: CatalogItem,
    pub bottom: CatalogItem,
    pub shoes: CatalogItem,
    /// Random presentation score in [70, 100).
    pub score: u32,
    pub description: String,
    pub recommendations: Vec<String>,
    pub occasion: String,
    /// Fallbacks taken while assembling this outfit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degradations: Vec<DegradationEvent>,
}

impl Outfit {
    pub fn items(&self) -> [&CatalogItem; 3] {
        [&self.top, &self.bottom, &self.shoes]
    }

    pub fn item_ids(&self) -> [&str; 3] {
        [&self.top.id, &self.bottom.id, &self.shoes.id]
    }

    /// Convert into a look carrying the given style label.
    pub fn into_look(self, style: impl Into<String>) -> Look {
        Look::new(
            vec![self.top, self.bottom, self.shoes],
            style,
            self.occasion,
            self.description,
        )
    }
}

/// Where the personalization seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    ExternalCatalog,
    LocalStore,
}

/// Resolved profile plus an initial candidate look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSeed {
    pub user_id: String,
    pub profile: StyleProfile,
    pub looks: Vec<Look>,
    pub reasoning: String,
    pub source: SeedSource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degradations: Vec<DegradationEvent>,
}
