//! Dataset row type definitions.
//!
//! Field names double as the CSV header contract: a table whose header lacks
//! one of the non-defaulted columns fails deserialization and is surfaced as
//! `DataUnavailable` by the store.

use serde::{Deserialize, Serialize};

/// One row of the elements table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Element name (e.g., "Neodymium")
    pub element: String,

    /// Chemical symbol (e.g., "Nd")
    pub symbol: String,

    /// Principal applications, free text
    pub key_applications: String,

    /// Free-form notes
    pub notes: String,
}

/// One row of the alloys table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlloyRecord {
    /// Alloy or compound name (e.g., "NdFeB")
    pub alloy: String,

    /// Nominal composition, free text
    #[serde(default)]
    pub composition: String,

    /// Principal applications, free text
    pub key_applications: String,

    /// Free-form notes
    pub notes: String,
}

/// One row of the minerals table (deposit occurrences).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MineralRecord {
    /// Deposit name
    pub deposit_name: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Principal rare earths present at the deposit
    #[serde(rename = "key_REEs")]
    pub key_rees: String,

    /// Ore grade in percent
    pub grade_pct: f64,
}

/// One row of the supply table (production by element and country).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyRecord {
    /// Element name
    pub element: String,

    /// Producing country
    pub country: String,

    /// Annual production in tonnes
    pub production_tonnes: f64,
}
