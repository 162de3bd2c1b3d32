//! Candidate pools for the three outfit slots.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use atelier_catalog::is_outerwear_family;
use atelier_core::models::{CatalogItem, Category};
use atelier_core::rules::ClassifierRules;

/// Slot pools built from the valid sample. Always non-empty once built.
#[derive(Debug, Clone, Default)]
pub struct Pools {
    pub tops: Vec<CatalogItem>,
    pub bottoms: Vec<CatalogItem>,
    pub shoes: Vec<CatalogItem>,
    /// Slots that had to be seeded from the valid pool.
    pub seeded: Vec<Category>,
}

impl Pools {
    /// Partition classified items. An empty slot is seeded from its third of
    /// the valid pool (or the whole pool when that third is empty). Coat-like
    /// families never enter the top pool.
    pub fn partition(valid: &[CatalogItem], rules: &ClassifierRules) -> Self {
        let mut pools = Pools::default();
        for item in valid {
            match item.category {
                Some(Category::Top) if !is_outerwear_family(item, rules) => {
                    pools.tops.push(item.clone())
                }
                Some(Category::Bottom) => pools.bottoms.push(item.clone()),
                Some(Category::Shoes) => pools.shoes.push(item.clone()),
                _ => {}
            }
        }

        let third = valid.len().div_ceil(3).max(1);
        let slots = [
            (Category::Top, &mut pools.tops),
            (Category::Bottom, &mut pools.bottoms),
            (Category::Shoes, &mut pools.shoes),
        ];
        let mut seeded = Vec::new();
        for (index, (category, pool)) in slots.into_iter().enumerate() {
            if !pool.is_empty() {
                continue;
            }
            let eligible = |item: &&CatalogItem| {
                category != Category::Top || !is_outerwear_family(item, rules)
            };
            let slice: Vec<CatalogItem> = valid
                .iter()
                .skip(index * third)
                .take(third)
                .filter(eligible)
                .cloned()
                .collect();
            *pool = if slice.is_empty() {
                valid.iter().filter(eligible).cloned().collect()
            } else {
                slice
            };
            seeded.push(category);
        }
        pools.seeded = seeded;
        pools
    }

    pub fn empty_slot(&self) -> Option<Category> {
        [
            (Category::Top, &self.tops),
            (Category::Bottom, &self.bottoms),
            (Category::Shoes, &self.shoes),
        ]
        .into_iter()
        .find(|(_, pool)| pool.is_empty())
        .map(|(category, _)| category)
    }
}

/// Drop skipped ids unless that would empty the pool.
pub fn without_excluded<F>(pool: Vec<CatalogItem>, skipped: F) -> Vec<CatalogItem>
where
    F: Fn(&str) -> bool,
{
    let kept: Vec<CatalogItem> = pool
        .iter()
        .filter(|item| !skipped(item.id.as_str()))
        .cloned()
        .collect();
    if kept.is_empty() {
        tracing::debug!(pool = pool.len(), "every candidate excluded, keeping full pool");
        pool
    } else {
        kept
    }
}

/// Uniform pick, restricted to preferred ids when any are present.
pub fn pick<'a, R: Rng + ?Sized>(
    pool: &'a [CatalogItem],
    preferred: &HashSet<&str>,
    rng: &mut R,
) -> Option<&'a CatalogItem> {
    let favored: Vec<&CatalogItem> = pool
        .iter()
        .filter(|item| preferred.contains(item.id.as_str()))
        .collect();
    if favored.is_empty() {
        pool.choose(rng)
    } else {
        favored.choose(rng).copied()
    }
}
