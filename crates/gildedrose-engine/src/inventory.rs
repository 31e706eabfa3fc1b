//! The inventory collection and the day cycle.
//!
//! An [`Inventory`] is the engine's working set: an ordered collection of
//! items accepted as a single batch. Validation runs once, at acceptance;
//! from then on [`Inventory::advance_one_day`] is the only operation, and
//! it cannot fail.

use gildedrose_types::{Item, ItemCategory, QUALITY_MAX, QUALITY_MIN, SULFURAS_QUALITY};
use tracing::{debug, trace};

use crate::error::InventoryError;
use crate::rules;

/// An ordered collection of items advanced together, one day at a time.
///
/// Items keep their insertion order for the life of the inventory; the
/// daily update mutates each item in place and never adds, removes, or
/// reorders entries. Per-item updates are independent: each reads and
/// writes only its own fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// The working set, in the order the caller supplied it.
    items: Vec<Item>,

    /// Number of simulated days elapsed since acceptance.
    day: u64,
}

impl Inventory {
    /// Accept a batch of items, validating each against its quality bounds.
    ///
    /// Items are checked in order; the first violation rejects the whole
    /// batch. No partial collection is ever accepted.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidSulfurasQuality`] if an item
    /// classified as Sulfuras has a quality other than 80, or
    /// [`InventoryError::QualityOutOfRange`] if any other item's quality
    /// lies outside [0, 50].
    pub fn new(items: Vec<Item>) -> Result<Self, InventoryError> {
        for item in &items {
            validate_item(item)?;
        }
        Ok(Self { items, day: 0 })
    }

    /// The items, in their original order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of simulated days elapsed since the batch was accepted.
    pub const fn day(&self) -> u64 {
        self.day
    }

    /// Advance every item by exactly one simulated day.
    ///
    /// Applies each item's category rule in place, preserving order and
    /// length, and returns the updated collection. Calling this N times
    /// simulates N days. The transition is total: it never fails, and no
    /// non-legendary quality can leave [0, 50].
    pub fn advance_one_day(&mut self) -> &[Item] {
        self.day = self.day.saturating_add(1);

        for item in &mut self.items {
            rules::apply_daily_rule(item);
            trace!(
                day = self.day,
                name = %item.name,
                sell_in = item.sell_in,
                quality = item.quality,
                "item updated"
            );
        }

        debug!(day = self.day, items = self.items.len(), "day advanced");
        &self.items
    }
}

/// Check one item against the bounds its category requires.
fn validate_item(item: &Item) -> Result<(), InventoryError> {
    if item.category() == ItemCategory::Sulfuras {
        if item.quality != SULFURAS_QUALITY {
            return Err(InventoryError::InvalidSulfurasQuality {
                name: item.name.clone(),
                quality: item.quality,
            });
        }
        return Ok(());
    }

    if !(QUALITY_MIN..=QUALITY_MAX).contains(&item.quality) {
        return Err(InventoryError::QualityOutOfRange {
            name: item.name.clone(),
            quality: item.quality,
        });
    }

    Ok(())
}
