//! Stats command handler.
//!
//! Shows dataset row counts and the size of the fitted retrieval model.

use clap::Args;
use ree_core::{config::AppConfig, AppResult};
use ree_data::DatasetStore;
use ree_retrieval::build_engine;

/// Show dataset and corpus statistics
#[derive(Args, Debug)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing stats command");

        let store = DatasetStore::load(&config.data_dir)?;
        let engine = build_engine(&store, &config.documents_dir(), &config.retrieval)?;

        if self.json {
            let output = serde_json::json!({
                "elements": store.elements.len(),
                "alloys": store.alloys.len(),
                "minerals": store.minerals.len(),
                "supply": store.supply.len(),
                "corpusDocuments": engine.corpus().len(),
                "vocabularyTerms": engine.model().vocabulary_len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("elements:          {:>6} rows", store.elements.len());
            println!("alloys:            {:>6} rows", store.alloys.len());
            println!("minerals:          {:>6} rows", store.minerals.len());
            println!("supply:            {:>6} rows", store.supply.len());
            println!("corpus documents:  {:>6}", engine.corpus().len());
            println!("vocabulary terms:  {:>6}", engine.model().vocabulary_len());
        }

        Ok(())
    }
}
