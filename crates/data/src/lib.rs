//! Dataset store for the REE Explorer.
//!
//! Loads the four CSV tables (elements, alloys, minerals, supply) into typed
//! in-memory relations and provides substring filtering for the browse
//! commands.

pub mod filter;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use filter::{filter_rows, Searchable};
pub use store::DatasetStore;
pub use types::{AlloyRecord, ElementRecord, MineralRecord, SupplyRecord};
