//! Substring filtering over dataset rows.
//!
//! The filter matches each textual field independently. Matching per field
//! (rather than against one stringified row) means a query can never match a
//! fragment spanning two adjacent cells.

use crate::types::{AlloyRecord, ElementRecord, MineralRecord, SupplyRecord};

/// Rows that can be searched by the browse commands.
pub trait Searchable {
    /// The row's fields as display text, in column order.
    fn fields(&self) -> Vec<String>;

    /// Case-insensitive substring match against any single field.
    fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for ElementRecord {
    fn fields(&self) -> Vec<String> {
        vec![
            self.element.clone(),
            self.symbol.clone(),
            self.key_applications.clone(),
            self.notes.clone(),
        ]
    }
}

impl Searchable for AlloyRecord {
    fn fields(&self) -> Vec<String> {
        vec![
            self.alloy.clone(),
            self.composition.clone(),
            self.key_applications.clone(),
            self.notes.clone(),
        ]
    }
}

impl Searchable for MineralRecord {
    fn fields(&self) -> Vec<String> {
        vec![
            self.deposit_name.clone(),
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.key_rees.clone(),
            self.grade_pct.to_string(),
        ]
    }
}

impl Searchable for SupplyRecord {
    fn fields(&self) -> Vec<String> {
        vec![
            self.element.clone(),
            self.country.clone(),
            self.production_tonnes.to_string(),
        ]
    }
}

/// Filter rows by a substring query; an empty query keeps every row.
pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    if query.trim().is_empty() {
        return rows.iter().collect();
    }

    let matched: Vec<&T> = rows.iter().filter(|row| row.matches(query)).collect();

    tracing::debug!(
        "Filter {:?} matched {} of {} rows",
        query,
        matched.len(),
        rows.len()
    );

    matched
}
