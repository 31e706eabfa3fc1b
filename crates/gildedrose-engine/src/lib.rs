//! Daily quality update engine for the Gilded Rose inventory simulation.
//!
//! This crate owns the day cycle that drives the simulation: an
//! [`Inventory`] accepts a batch of items (rejecting the whole batch if any
//! item violates its quality bounds), then advances the entire collection by
//! exactly one day per call, applying each item's category rule in place.
//!
//! # Modules
//!
//! - [`error`] -- Validation errors raised when a batch is accepted.
//! - [`inventory`] -- The [`Inventory`] collection and the day cycle.
//! - [`rules`] -- The per-category update rules and clamp arithmetic.
//!
//! The day transition itself is total: once a batch has been accepted, no
//! update can fail and no quality can leave its bounds.

pub mod error;
pub mod inventory;
pub mod rules;

pub use error::InventoryError;
pub use inventory::Inventory;
