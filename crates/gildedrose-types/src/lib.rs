//! Shared type definitions for the Gilded Rose inventory simulation.
//!
//! This crate is the single source of truth for the types shared across the
//! workspace: the stocked [`Item`], its cached [`ItemCategory`], and the
//! quality bounds every update rule must respect.
//!
//! # Modules
//!
//! - [`category`] -- The closed category enum and name-based classification.
//! - [`item`] -- The [`Item`] struct and quality bound constants.

pub mod category;
pub mod item;

pub use category::ItemCategory;
pub use item::{Item, QUALITY_MAX, QUALITY_MIN, SULFURAS_QUALITY};
