//! Terse constructors for catalog items and looks.

use atelier_core::models::{CatalogItem, Category, ImageSet, Look};

/// Product-only image URL for `id`.
pub fn product_image(id: &str) -> String {
    format!("https://static.example.com/photos/{id}/6_1_1.jpg")
}

pub fn item(id: &str, name: &str) -> ItemBuilder {
    ItemBuilder {
        item: CatalogItem::new(id, name),
    }
}

pub struct ItemBuilder {
    item: CatalogItem,
}

impl ItemBuilder {
    pub fn family(mut self, family: &str) -> Self {
        self.item.family = Some(family.to_string());
        self
    }

    pub fn subfamily(mut self, subfamily: &str) -> Self {
        self.item.subfamily = Some(subfamily.to_string());
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.item.color = Some(color.to_string());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.item.price = Some(price);
        self
    }

    pub fn occasion(mut self, occasion: &str) -> Self {
        self.item.occasion = Some(occasion.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.item.description = description.to_string();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.item.category = Some(category);
        self
    }

    /// A single product-only image.
    pub fn product_image(mut self) -> Self {
        self.item.images = ImageSet::new(vec![product_image(&self.item.id)]);
        self
    }

    pub fn images(mut self, images: &[&str]) -> Self {
        self.item.images = ImageSet::new(images.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn display_image(mut self, url: &str) -> Self {
        self.item.display_image = Some(url.to_string());
        self
    }

    pub fn build(self) -> CatalogItem {
        self.item
    }
}

/// A look over items named after their ids, with a product image and a price each.
pub fn look(ids: &[&str]) -> Look {
    let items = ids
        .iter()
        .map(|id| item(id, &format!("item {id}")).product_image().price(20.0).build())
        .collect();
    Look::new(items, "classic", "work", "test look")
}
