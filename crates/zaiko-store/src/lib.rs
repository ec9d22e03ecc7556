//! File-backed inventory store
//!
//! Owns the in-memory list of [`Car`](zaiko_types::Car) records and its CSV
//! persistence. Every mutation rewrites the whole backing file before
//! returning.

mod filter;
mod inventory;

pub use filter::SearchFilter;
pub use inventory::Inventory;
