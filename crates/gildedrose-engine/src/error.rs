//! Error types for the gildedrose-engine crate.
//!
//! Validation runs once, when a batch of items is accepted into an
//! [`Inventory`]. The daily update itself never fails, so these are the
//! only errors the engine can produce.
//!
//! [`Inventory`]: crate::inventory::Inventory

/// Errors raised when a batch of items fails construction-time validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// A legendary item was constructed with a quality other than 80.
    #[error("Sulfuras quality must be 80")]
    InvalidSulfurasQuality {
        /// Name of the offending item.
        name: String,
        /// The quality the item was constructed with.
        quality: i32,
    },

    /// A non-legendary item was constructed with a quality outside [0, 50].
    #[error("Quality must be between 0 and 50 for {name}")]
    QualityOutOfRange {
        /// Name of the offending item.
        name: String,
        /// The quality the item was constructed with.
        quality: i32,
    },
}
