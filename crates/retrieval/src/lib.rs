//! TF-IDF retrieval core for the REE Explorer.
//!
//! Builds a snippet corpus from free-text documents and the text-bearing
//! tables, fits a TF-IDF vector space over it, and answers free-text
//! questions by cosine-similarity ranking.

pub mod corpus;
pub mod engine;
pub mod stopwords;
pub mod tfidf;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use corpus::{build_corpus, Corpus, DocumentMeta, ALLOYS_SOURCE, ELEMENTS_SOURCE};
pub use engine::{Answer, Evidence, QueryEngine};
pub use tfidf::{TfidfModel, TfidfVectorizer};

use ree_core::config::RetrievalConfig;
use ree_core::AppResult;
use ree_data::DatasetStore;
use std::path::Path;

/// Build the corpus and fit the vector space in one step.
///
/// This is the once-per-session startup path: the returned engine is
/// everything the Q&A loop needs, and it never changes afterwards.
pub fn build_engine(
    store: &DatasetStore,
    documents_dir: &Path,
    config: &RetrievalConfig,
) -> AppResult<QueryEngine> {
    let corpus = build_corpus(documents_dir, &store.elements, &store.alloys)?;
    let vectorizer = TfidfVectorizer::new(config.max_vocabulary, config.stopwords);
    let model = vectorizer.fit(corpus.documents())?;
    Ok(QueryEngine::new(corpus, model))
}
