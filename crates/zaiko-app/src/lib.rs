//! Application layer: persisted configuration and inventory adapters

mod config;
mod repository;

pub use config::Config;
pub use repository::{open_inventory, open_inventory_at};
