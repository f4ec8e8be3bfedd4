//! Ask command handler.
//!
//! Runs the full retrieval pipeline: load datasets, build the corpus, fit
//! the vector space, then answer the question against it.

use clap::Args;
use ree_core::{config::AppConfig, AppResult};
use ree_data::DatasetStore;
use ree_retrieval::build_engine;

/// Ask a free-text question answered from the local corpus
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Number of retrieved snippets
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Question: {}", self.question);

        let store = DatasetStore::load(&config.data_dir)?;
        let engine = build_engine(&store, &config.documents_dir(), &config.retrieval)?;

        let k = self.top_k.unwrap_or(config.retrieval.top_k);
        let answer = engine.answer(&self.question, k)?;

        if self.json {
            let output = serde_json::json!({
                "question": self.question,
                "answer": answer.synthesized,
                "evidence": answer.evidence,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("Top evidence snippets:");
            for evidence in &answer.evidence {
                println!("- Source: {} (score {:.3})", evidence.source, evidence.score);
                println!("  {}", evidence.text.trim());
            }
            println!();
            println!("Answer (synthesized):");
            println!("{}", answer.synthesized);
        }

        Ok(())
    }
}
