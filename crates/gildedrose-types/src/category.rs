//! Item categories and name-based classification.
//!
//! Every item belongs to exactly one category, derived from its name by
//! case-sensitive substring matching. Classification happens once, when the
//! item is constructed; the result is cached on the item and never re-derived
//! during updates.
//!
//! The substring checks run in a fixed precedence order (Aged Brie, then
//! Backstage passes, then Conjured, then Sulfuras), first match wins. Names
//! containing several markers are not expected in practice, but the fixed
//! order keeps classification deterministic when they occur.

use serde::{Deserialize, Serialize};

/// Name marker for the Aged Brie category.
const AGED_BRIE_MARKER: &str = "Aged Brie";

/// Name marker for the backstage pass category.
const BACKSTAGE_PASSES_MARKER: &str = "Backstage passes";

/// Name marker for the conjured category.
const CONJURED_MARKER: &str = "Conjured";

/// Name marker for the legendary category.
const SULFURAS_MARKER: &str = "Sulfuras";

/// The category an item belongs to, which selects its daily update rule.
///
/// This is a closed set: there is no runtime registration of new categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Cheese that improves with age: quality rises as sell-by approaches
    /// and passes.
    AgedBrie,
    /// Concert passes: quality rises faster as the concert nears, then
    /// drops to zero once it has passed.
    BackstagePasses,
    /// Conjured goods: quality degrades twice as fast as ordinary stock.
    Conjured,
    /// Legendary item: never has to be sold, never loses quality.
    Sulfuras,
    /// Everything else: quality degrades by one per day, twice that once
    /// the sell-by date has passed.
    Ordinary,
}

impl ItemCategory {
    /// Classify an item name into its category.
    ///
    /// Pure function of the name: case-sensitive substring tests in the
    /// fixed precedence order Aged Brie, Backstage passes, Conjured,
    /// Sulfuras. A name matching none of the markers is [`Self::Ordinary`].
    pub fn classify(name: &str) -> Self {
        if name.contains(AGED_BRIE_MARKER) {
            Self::AgedBrie
        } else if name.contains(BACKSTAGE_PASSES_MARKER) {
            Self::BackstagePasses
        } else if name.contains(CONJURED_MARKER) {
            Self::Conjured
        } else if name.contains(SULFURAS_MARKER) {
            Self::Sulfuras
        } else {
            Self::Ordinary
        }
    }

    /// Whether this category is exempt from both the sell-by decrement and
    /// quality mutation.
    pub const fn is_legendary(self) -> bool {
        matches!(self, Self::Sulfuras)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_aged_brie() {
        assert_eq!(ItemCategory::classify("Aged Brie"), ItemCategory::AgedBrie);
    }

    #[test]
    fn classifies_backstage_passes() {
        assert_eq!(
            ItemCategory::classify("Backstage passes to a TAFKAL80ETC concert"),
            ItemCategory::BackstagePasses
        );
    }

    #[test]
    fn classifies_conjured() {
        assert_eq!(
            ItemCategory::classify("Conjured Mana Cake"),
            ItemCategory::Conjured
        );
    }

    #[test]
    fn classifies_sulfuras() {
        assert_eq!(
            ItemCategory::classify("Sulfuras, Hand of Ragnaros"),
            ItemCategory::Sulfuras
        );
    }

    #[test]
    fn classifies_unknown_names_as_ordinary() {
        assert_eq!(ItemCategory::classify("Basic Item"), ItemCategory::Ordinary);
        assert_eq!(ItemCategory::classify(""), ItemCategory::Ordinary);
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(ItemCategory::classify("aged brie"), ItemCategory::Ordinary);
        assert_eq!(
            ItemCategory::classify("Backstage Passes"),
            ItemCategory::Ordinary
        );
    }

    #[test]
    fn marker_matches_anywhere_in_name() {
        assert_eq!(
            ItemCategory::classify("Wheel of Aged Brie, extra mature"),
            ItemCategory::AgedBrie
        );
    }

    #[test]
    fn precedence_is_deterministic_for_combined_names() {
        // The markers are checked in a fixed order, so a name carrying
        // several of them always resolves the same way.
        assert_eq!(
            ItemCategory::classify("Conjured Sulfuras replica"),
            ItemCategory::Conjured
        );
        assert_eq!(
            ItemCategory::classify("Aged Brie, Conjured"),
            ItemCategory::AgedBrie
        );
        assert_eq!(
            ItemCategory::classify("Backstage passes signed by Aged Brie"),
            ItemCategory::AgedBrie
        );
    }

    #[test]
    fn only_sulfuras_is_legendary() {
        assert!(ItemCategory::Sulfuras.is_legendary());
        assert!(!ItemCategory::AgedBrie.is_legendary());
        assert!(!ItemCategory::BackstagePasses.is_legendary());
        assert!(!ItemCategory::Conjured.is_legendary());
        assert!(!ItemCategory::Ordinary.is_legendary());
    }
}
