//! Adapters from configuration to the concrete inventory store

use std::path::PathBuf;

use zaiko_store::Inventory;
use zaiko_types::Result;

use crate::config::Config;

/// Open the inventory at the configured location
pub fn open_inventory(config: &Config) -> Result<Inventory> {
    let path = config.inventory_path()?;
    Inventory::open(path)
}

/// Open the inventory at a custom file path
pub fn open_inventory_at(path: PathBuf) -> Result<Inventory> {
    Inventory::open(path)
}
