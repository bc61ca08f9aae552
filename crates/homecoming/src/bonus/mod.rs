//! Social value calculator: grouped line items summed into a bonus, then tiered.

mod catalog;
mod item;
mod tier;

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

pub use item::{BonusLineItem, CatalogError, LineItemError, LineItemKind};
pub use tier::{combined_score, CombinedScore, Tier, TierView};

/// Named group of line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusCategory {
    pub key: &'static str,
    pub name: &'static str,
    pub items: Vec<BonusLineItem>,
}

impl BonusCategory {
    pub fn total(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.value)).sum()
    }

    pub fn item(&self, key: &str) -> Option<&BonusLineItem> {
        self.items.iter().find(|item| item.key == key)
    }
}

/// Per-category subtotal for summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub key: &'static str,
    pub name: &'static str,
    pub total: i64,
}

/// Caller-owned line item values. Every item is independent; there is no shared budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusScorer {
    categories: Vec<BonusCategory>,
}

impl BonusScorer {
    /// The published catalog with every item at its default.
    pub fn standard() -> Self {
        Self {
            categories: catalog::standard_categories(),
        }
    }

    pub fn new(categories: Vec<BonusCategory>) -> Result<Self, CatalogError> {
        let mut category_keys = BTreeSet::new();
        let mut item_keys = BTreeSet::new();
        for category in &categories {
            if !category_keys.insert(category.key) {
                return Err(CatalogError::DuplicateKey(category.key.to_string()));
            }
            for item in &category.items {
                if !item_keys.insert(item.key) {
                    return Err(CatalogError::DuplicateKey(item.key.to_string()));
                }
                item.validate()?;
            }
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[BonusCategory] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&BonusCategory> {
        self.categories.iter().find(|category| category.key == key)
    }

    /// Stores a corrected value and returns it. Rejections leave the item untouched.
    pub fn set_line_item(
        &mut self,
        category: &str,
        item: &str,
        raw: i64,
    ) -> Result<i32, LineItemError> {
        let entry = self
            .categories
            .iter_mut()
            .find(|entry| entry.key == category)
            .ok_or_else(|| LineItemError::UnknownCategory(category.to_string()))?;

        let line = entry
            .items
            .iter_mut()
            .find(|line| line.key == item)
            .ok_or_else(|| LineItemError::UnknownItem {
                category: category.to_string(),
                item: item.to_string(),
            })?;

        let value = line.normalize(raw)?;
        if i64::from(value) != raw {
            debug!(category, item, raw, value, "line item corrected");
        }
        line.value = value;
        Ok(value)
    }

    pub fn category_total(&self, category: &str) -> Option<i64> {
        self.category(category).map(BonusCategory::total)
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        self.categories
            .iter()
            .map(|category| CategoryTotal {
                key: category.key,
                name: category.name,
                total: category.total(),
            })
            .collect()
    }

    pub fn bonus_total(&self) -> i64 {
        self.categories.iter().map(BonusCategory::total).sum()
    }

    /// Puts every item back to its default.
    pub fn reset(&mut self) {
        for item in self
            .categories
            .iter_mut()
            .flat_map(|category| category.items.iter_mut())
        {
            item.value = item.default;
        }
    }

    pub fn combined_with(&self, base_total: i64) -> CombinedScore {
        combined_score(base_total, self.bonus_total())
    }
}

impl Default for BonusScorer {
    fn default() -> Self {
        Self::standard()
    }
}
