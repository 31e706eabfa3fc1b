//! The stocked item and its quality bounds.

use serde::Serialize;

use crate::category::ItemCategory;

/// Lowest quality any non-legendary item can reach.
pub const QUALITY_MIN: i32 = 0;

/// Highest quality any non-legendary item can reach.
pub const QUALITY_MAX: i32 = 50;

/// The fixed quality of the legendary Sulfuras item.
pub const SULFURAS_QUALITY: i32 = 80;

/// A single item in the shop's inventory.
///
/// `sell_in` counts the days remaining before the sell-by date and may go
/// arbitrarily negative. `quality` stays between [`QUALITY_MIN`] and
/// [`QUALITY_MAX`] for every category except Sulfuras, which is fixed at
/// [`SULFURAS_QUALITY`].
///
/// The category is classified from the name once, at construction, and
/// cached for the item's lifetime. The name is never consulted again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Display name, used only for classification at construction time.
    pub name: String,
    /// Days remaining before the sell-by date (negative once it has passed).
    pub sell_in: i32,
    /// Desirability score, mutated by the daily update rules.
    pub quality: i32,
    /// Cached category, derived from the name at construction.
    category: ItemCategory,
}

impl Item {
    /// Construct an item, classifying its category from the name.
    ///
    /// No bounds are checked here; validation happens when the item is
    /// accepted into an inventory.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::classify(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    /// The category classified from this item's name at construction.
    pub const fn category(&self) -> ItemCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn construction_caches_category() {
        let item = Item::new("Aged Brie", 5, 10);
        assert_eq!(item.category(), ItemCategory::AgedBrie);
    }

    #[test]
    fn construction_does_not_validate_bounds() {
        // Out-of-range quality is caught at inventory acceptance, not here.
        let item = Item::new("Basic Item", 10, 99);
        assert_eq!(item.quality, 99);
    }

    #[test]
    fn serializes_with_cached_category() {
        let item = Item::new("Conjured Mana Cake", 3, 6);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Conjured Mana Cake");
        assert_eq!(json["sell_in"], 3);
        assert_eq!(json["quality"], 6);
        assert_eq!(json["category"], "Conjured");
    }
}
