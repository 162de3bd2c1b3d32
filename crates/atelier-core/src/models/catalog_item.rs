use std::fmt;

use serde::{Deserialize, Serialize};

/// Slot a catalog item fills in an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Dress,
    Outerwear,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Shoes,
        Category::Dress,
        Category::Outerwear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Shoes => "shoes",
            Category::Dress => "dress",
            Category::Outerwear => "outerwear",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of image references attached to a catalog record.
///
/// Catalog rows carry images in several shapes: a JSON-encoded string array,
/// a bare URL string, a JSON array, or an object with a `url` field.
/// [`ImageSet::from_value`] normalizes all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSet(Vec<String>);

impl ImageSet {
    pub fn new(images: Vec<String>) -> Self {
        Self(images.into_iter().filter(|s| !s.trim().is_empty()).collect())
    }

    pub fn from_value(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::String(s) => match serde_json::from_str::<Value>(s) {
                Ok(parsed @ Value::Array(_)) => Self::from_value(&parsed),
                _ => Self::new(vec![s.clone()]),
            },
            Value::Array(entries) => Self::new(
                entries
                    .iter()
                    .filter_map(|e| match e {
                        Value::String(s) => Some(s.clone()),
                        Value::Object(map) => map.get("url").and_then(|u| u.as_str()).map(String::from),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::Object(map) => map
                .get("url")
                .and_then(|u| u.as_str())
                .map(|u| Self::new(vec![u.to_string()]))
                .unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A single product from the external catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub subfamily: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub images: ImageSet,
    /// Occasion bucket the catalog files this item under, if any.
    #[serde(default)]
    pub occasion: Option<String>,
    /// Computed by the classifier; absent on raw catalog rows.
    #[serde(default)]
    pub category: Option<Category>,
    /// Resolved display image, set by styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_image: Option<String>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: String::new(),
            family: None,
            subfamily: None,
            color: None,
            price: None,
            images: ImageSet::default(),
            occasion: None,
            category: None,
            display_image: None,
        }
    }

    /// Lowercase concatenation of every classification-relevant text field.
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.display_name.len() + self.description.len() + 32,
        );
        text.push_str(&self.display_name);
        text.push(' ');
        text.push_str(&self.description);
        for tag in [&self.family, &self.subfamily].into_iter().flatten() {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }

    /// Lowercase family and subfamily tags joined by a space.
    pub fn family_text(&self) -> String {
        [&self.family, &self.subfamily]
            .into_iter()
            .flatten()
            .map(|s| s.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The image shown to the user: the resolved display image, else the first reference.
    pub fn image(&self) -> Option<&str> {
        self.display_image.as_deref().or_else(|| self.images.first())
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_set_parses_json_encoded_array() {
        let set = ImageSet::from_value(&json!("[\"https://cdn/a/6_1_1.jpg\",\"https://cdn/a/2.jpg\"]"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some("https://cdn/a/6_1_1.jpg"));
    }

    #[test]
    fn image_set_accepts_plain_string_array_and_object() {
        assert_eq!(ImageSet::from_value(&json!("https://cdn/x.jpg")).first(), Some("https://cdn/x.jpg"));
        assert_eq!(ImageSet::from_value(&json!(["a.jpg", "b.jpg"])).len(), 2);
        assert_eq!(ImageSet::from_value(&json!({"url": "c.jpg"})).first(), Some("c.jpg"));
        assert!(ImageSet::from_value(&json!(42)).is_empty());
    }

    #[test]
    fn search_text_is_lowercase_and_includes_tags() {
        let mut item = CatalogItem::new("1", "Linen SHIRT");
        item.family = Some("CAMISA".into());
        let text = item.search_text();
        assert!(text.contains("linen shirt"));
        assert!(text.contains("camisa"));
    }
}
