//! Shop simulation entry point.
//!
//! The runner loads a YAML shop manifest, validates the opening stock into
//! an [`Inventory`], then advances the whole collection one day at a time,
//! logging each day's state. It is a thin shell around
//! `gildedrose-engine`; all the rules live there.
//!
//! Run with an optional manifest path (defaults to
//! `gildedrose-config.yaml` in the working directory):
//!
//! ```bash
//! cargo run -p gildedrose-runner -- path/to/manifest.yaml
//! ```

mod config;

use std::path::PathBuf;

use gildedrose_engine::Inventory;
use gildedrose_types::Item;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::ShopConfig;

/// Manifest path used when no command-line argument is given.
const DEFAULT_MANIFEST: &str = "gildedrose-config.yaml";

/// Application entry point.
///
/// Initializes logging, loads the shop manifest, validates the inventory,
/// and simulates the configured number of days.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or the opening stock
/// fails validation.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_MANIFEST), PathBuf::from);
    info!(path = %path.display(), "loading shop manifest");

    let shop = ShopConfig::load(&path)?;
    let stock: Vec<Item> = shop
        .items
        .iter()
        .map(|entry| Item::new(entry.name.clone(), entry.sell_in, entry.quality))
        .collect();

    let mut inventory = Inventory::new(stock)?;
    info!(
        items = inventory.items().len(),
        days = shop.simulation.days,
        "inventory accepted"
    );

    for _ in 0..shop.simulation.days {
        inventory.advance_one_day();
        for item in inventory.items() {
            debug!(
                day = inventory.day(),
                name = %item.name,
                category = ?item.category(),
                sell_in = item.sell_in,
                quality = item.quality,
                "end of day"
            );
        }
    }

    info!(day = inventory.day(), "simulation complete");
    Ok(())
}
