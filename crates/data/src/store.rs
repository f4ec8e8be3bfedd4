//! Dataset loading and in-memory storage.

use crate::types::{AlloyRecord, ElementRecord, MineralRecord, SupplyRecord};
use ree_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::path::Path;

/// In-memory store of the four datasets.
///
/// Loaded once at startup and read-only afterwards. Loading is
/// all-or-nothing: any missing or malformed table aborts the whole load so
/// no command ever runs against a partial store.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    pub elements: Vec<ElementRecord>,
    pub alloys: Vec<AlloyRecord>,
    pub minerals: Vec<MineralRecord>,
    pub supply: Vec<SupplyRecord>,
}

impl DatasetStore {
    /// Load all four tables from `data_dir`.
    pub fn load(data_dir: &Path) -> AppResult<Self> {
        let elements = load_table(&data_dir.join("elements.csv"), "elements")?;
        let alloys = load_table(&data_dir.join("alloys.csv"), "alloys")?;
        let minerals = load_table(&data_dir.join("minerals.csv"), "minerals")?;
        let supply = load_table(&data_dir.join("supply.csv"), "supply")?;

        let store = Self {
            elements,
            alloys,
            minerals,
            supply,
        };

        tracing::info!(
            "Loaded datasets: {} elements, {} alloys, {} minerals, {} supply rows",
            store.elements.len(),
            store.alloys.len(),
            store.minerals.len(),
            store.supply.len()
        );

        Ok(store)
    }

    /// Supply rows for one element (case-insensitive).
    pub fn supply_for(&self, element: &str) -> Vec<&SupplyRecord> {
        self.supply
            .iter()
            .filter(|r| r.element.eq_ignore_ascii_case(element))
            .collect()
    }

    /// Look up an element row by name (case-insensitive).
    pub fn find_element(&self, name: &str) -> Option<&ElementRecord> {
        self.elements
            .iter()
            .find(|r| r.element.eq_ignore_ascii_case(name))
    }

    /// Look up an alloy row by name (case-insensitive).
    pub fn find_alloy(&self, name: &str) -> Option<&AlloyRecord> {
        self.alloys
            .iter()
            .find(|r| r.alloy.eq_ignore_ascii_case(name))
    }
}

/// Read one CSV table into typed rows.
///
/// Header names are matched against the row struct's fields; a missing
/// column or an unparsable cell is reported as `DataUnavailable` with the
/// table name and offending row.
fn load_table<T: DeserializeOwned>(path: &Path, table: &str) -> AppResult<Vec<T>> {
    if !path.exists() {
        return Err(AppError::DataUnavailable(format!(
            "{} table not found at {:?}",
            table, path
        )));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        AppError::DataUnavailable(format!("Failed to open {} table: {}", table, e))
    })?;

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let row: T = result.map_err(|e| {
            AppError::DataUnavailable(format!(
                "Malformed {} table at row {}: {}",
                table,
                i + 1,
                e
            ))
        })?;
        rows.push(row);
    }

    tracing::debug!("Loaded {} rows from {} table", rows.len(), table);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_valid_tables(dir: &Path) {
        std::fs::write(
            dir.join("elements.csv"),
            "element,symbol,key_applications,notes\n\
             Neodymium,Nd,Permanent magnets,Strongest magnets known\n\
             Lanthanum,La,Catalysts,Used in fluid cracking\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("alloys.csv"),
            "alloy,composition,key_applications,notes\n\
             NdFeB,Nd2Fe14B,Motors and turbines,High coercivity\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("minerals.csv"),
            "deposit_name,latitude,longitude,key_REEs,grade_pct\n\
             Mountain Pass,35.47,-115.53,Ce La Nd,7.98\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("supply.csv"),
            "element,country,production_tonnes\n\
             Neodymium,China,30000\n\
             Neodymium,Australia,4000\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_valid_store() {
        let temp = TempDir::new().unwrap();
        write_valid_tables(temp.path());

        let store = DatasetStore::load(temp.path()).unwrap();
        assert_eq!(store.elements.len(), 2);
        assert_eq!(store.alloys.len(), 1);
        assert_eq!(store.minerals.len(), 1);
        assert_eq!(store.supply.len(), 2);
        assert_eq!(store.elements[0].symbol, "Nd");
        assert!((store.minerals[0].latitude - 35.47).abs() < 1e-9);
    }

    #[test]
    fn test_missing_table_is_data_unavailable() {
        let temp = TempDir::new().unwrap();
        write_valid_tables(temp.path());
        std::fs::remove_file(temp.path().join("supply.csv")).unwrap();

        let err = DatasetStore::load(temp.path()).unwrap_err();
        match err {
            AppError::DataUnavailable(msg) => assert!(msg.contains("supply")),
            other => panic!("Expected DataUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_is_data_unavailable() {
        let temp = TempDir::new().unwrap();
        write_valid_tables(temp.path());
        // Drop the notes column from elements
        std::fs::write(
            temp.path().join("elements.csv"),
            "element,symbol,key_applications\nNeodymium,Nd,Permanent magnets\n",
        )
        .unwrap();

        let err = DatasetStore::load(temp.path()).unwrap_err();
        match err {
            AppError::DataUnavailable(msg) => assert!(msg.contains("elements")),
            other => panic!("Expected DataUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_unparsable_cell_is_data_unavailable() {
        let temp = TempDir::new().unwrap();
        write_valid_tables(temp.path());
        std::fs::write(
            temp.path().join("minerals.csv"),
            "deposit_name,latitude,longitude,key_REEs,grade_pct\n\
             Mountain Pass,not-a-number,-115.53,Ce La Nd,7.98\n",
        )
        .unwrap();

        let err = DatasetStore::load(temp.path()).unwrap_err();
        match err {
            AppError::DataUnavailable(msg) => {
                assert!(msg.contains("minerals"));
                assert!(msg.contains("row 1"));
            }
            other => panic!("Expected DataUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let temp = TempDir::new().unwrap();
        write_valid_tables(temp.path());
        std::fs::write(
            temp.path().join("supply.csv"),
            "element,country,production_tonnes,year\nNeodymium,China,30000,2024\n",
        )
        .unwrap();

        let store = DatasetStore::load(temp.path()).unwrap();
        assert_eq!(store.supply.len(), 1);
    }

    #[test]
    fn test_supply_for_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        write_valid_tables(temp.path());
        let store = DatasetStore::load(temp.path()).unwrap();

        let rows = store.supply_for("neodymium");
        assert_eq!(rows.len(), 2);
        assert!(store.supply_for("Dysprosium").is_empty());
    }

    #[test]
    fn test_find_element_and_alloy() {
        let temp = TempDir::new().unwrap();
        write_valid_tables(temp.path());
        let store = DatasetStore::load(temp.path()).unwrap();

        assert_eq!(store.find_element("lanthanum").unwrap().symbol, "La");
        assert_eq!(store.find_alloy("ndfeb").unwrap().composition, "Nd2Fe14B");
        assert!(store.find_element("Unobtainium").is_none());
    }
}
