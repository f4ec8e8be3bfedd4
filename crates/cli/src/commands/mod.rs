//! Command handlers for the REE Explorer CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod browse;
pub mod stats;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use browse::{AlloysCommand, ElementsCommand, MineralsCommand, SupplyCommand};
pub use stats::StatsCommand;
