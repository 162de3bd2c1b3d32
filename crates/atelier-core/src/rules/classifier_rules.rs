use serde::{Deserialize, Serialize};

use super::KeywordSet;

/// Keyword tables for the catalog item classifier.
///
/// Categories are tested in the order top, bottom, shoes, dress, outerwear;
/// the first list that matches wins. Catalog family codes sit alongside
/// the English terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// Any match marks the record as non-clothing.
    pub exclusions: KeywordSet,
    pub top: KeywordSet,
    pub bottom: KeywordSet,
    pub shoes: KeywordSet,
    pub dress: KeywordSet,
    pub outerwear: KeywordSet,
    /// Coat-like families that may never fill the top slot.
    pub outerwear_families: KeywordSet,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            exclusions: KeywordSet::new([
                "bag", "backpack", "wallet", "purse", "clutch", "jewel", "necklace", "earring",
                "bracelet", "sunglasses", "perfume", "fragrance", "cosmetic", "makeup", "phone",
                "laptop", "tablet", "headphone", "charger", "electronic", "keychain", "umbrella",
                "candle", "cushion", "bolso", "mochila", "cartera", "pendientes", "pulsera",
                "gafas", "colonia",
            ]),
            top: KeywordSet::new([
                "shirt", "blouse", "tee", "top", "sweater", "cardigan", "sweatshirt", "hoodie",
                "polo", "tank", "camisole", "bodysuit", "jumper", "pullover", "turtleneck",
                "camisa", "camiseta", "jersey", "sudadera",
            ]),
            bottom: KeywordSet::new([
                "pants", "trouser", "jeans", "skirt", "shorts", "legging", "jogger", "culotte",
                "chino", "pantalon", "falda", "bermuda",
            ]),
            shoes: KeywordSet::new([
                "shoe", "sandal", "boot", "sneaker", "heel", "loafer", "pump", "mule",
                "espadrille", "trainer", "flip-flop", "ballet flat", "zapato", "sandalia",
                "bota", "zapatilla",
            ]),
            dress: KeywordSet::new(["dress", "gown", "jumpsuit", "playsuit", "vestido"]),
            outerwear: KeywordSet::new([
                "jacket", "coat", "blazer", "parka", "trench", "gilet", "waistcoat", "vest",
                "chaqueta", "abrigo", "chaleco", "cazadora", "americana",
            ]),
            outerwear_families: KeywordSet::new([
                "blazer", "chaqueta", "abrigo", "chaleco", "cazadora", "americana", "coat",
                "jacket", "parka", "trench", "outerwear",
            ]),
        }
    }
}
