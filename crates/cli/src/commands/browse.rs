//! Browse command handlers for the four dataset tables.
//!
//! These commands are thin consumers of the already-loaded store: substring
//! filtering plus plain table printing, one command per dataset.

use clap::Args;
use ree_core::{config::AppConfig, AppError, AppResult};
use ree_data::{filter_rows, DatasetStore};

/// Browse and filter the elements table
#[derive(Args, Debug)]
pub struct ElementsCommand {
    /// Substring filter (name, application, property)
    pub filter: Option<String>,

    /// Print a summary block for the first match
    #[arg(long)]
    pub summary: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ElementsCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing elements command");

        let store = DatasetStore::load(&config.data_dir)?;
        let rows = filter_rows(&store.elements, self.filter.as_deref().unwrap_or(""));

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        for row in &rows {
            println!(
                "{} ({})  {} | {}",
                row.element, row.symbol, row.key_applications, row.notes
            );
        }

        if self.summary {
            println!();
            match rows.first() {
                Some(row) => {
                    println!("{} ({})", row.element, row.symbol);
                    println!("{}", row.notes);
                }
                None => println!("No matching element"),
            }
        }

        Ok(())
    }
}

/// Browse and filter the alloys table
#[derive(Args, Debug)]
pub struct AlloysCommand {
    /// Substring filter (name, application, property)
    pub filter: Option<String>,

    /// Compare two alloys side by side
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    pub compare: Option<Vec<String>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AlloysCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing alloys command");

        let store = DatasetStore::load(&config.data_dir)?;

        if let Some(names) = &self.compare {
            return self.compare_alloys(&store, &names[0], &names[1]);
        }

        let rows = filter_rows(&store.alloys, self.filter.as_deref().unwrap_or(""));

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        for row in &rows {
            println!(
                "{}  [{}]  {} | {}",
                row.alloy, row.composition, row.key_applications, row.notes
            );
        }

        Ok(())
    }

    fn compare_alloys(&self, store: &DatasetStore, first: &str, second: &str) -> AppResult<()> {
        let a = store
            .find_alloy(first)
            .ok_or_else(|| AppError::InvalidArgument(format!("Unknown alloy: {}", first)))?;
        let b = store
            .find_alloy(second)
            .ok_or_else(|| AppError::InvalidArgument(format!("Unknown alloy: {}", second)))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&vec![a, b])?);
            return Ok(());
        }

        println!("{:<18} {:<30} {}", "", a.alloy, b.alloy);
        println!("{:<18} {:<30} {}", "composition", a.composition, b.composition);
        println!(
            "{:<18} {:<30} {}",
            "key_applications", a.key_applications, b.key_applications
        );
        println!("{:<18} {:<30} {}", "notes", a.notes, b.notes);

        Ok(())
    }
}

/// List mineral deposit occurrences
#[derive(Args, Debug)]
pub struct MineralsCommand {
    /// Substring filter (deposit name, key REEs)
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl MineralsCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing minerals command");

        let store = DatasetStore::load(&config.data_dir)?;
        let rows = filter_rows(&store.minerals, self.filter.as_deref().unwrap_or(""));

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        for row in &rows {
            println!(
                "{}  ({:.2}, {:.2})  {}  grade {:.2}%",
                row.deposit_name, row.latitude, row.longitude, row.key_rees, row.grade_pct
            );
        }

        Ok(())
    }
}

/// Show production by element and country
#[derive(Args, Debug)]
pub struct SupplyCommand {
    /// Slice to one element
    pub element: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SupplyCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing supply command");

        let store = DatasetStore::load(&config.data_dir)?;

        let rows = match &self.element {
            Some(element) => store.supply_for(element),
            None => store.supply.iter().collect(),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            if let Some(element) = &self.element {
                println!("No supply rows for {}", element);
            }
            return Ok(());
        }

        for row in &rows {
            println!(
                "{:<14} {:<16} {:>12.0} t",
                row.element, row.country, row.production_tonnes
            );
        }

        if self.element.is_some() {
            let total: f64 = rows.iter().map(|r| r.production_tonnes).sum();
            println!("{:<14} {:<16} {:>12.0} t", "", "total", total);
        }

        Ok(())
    }
}
