//! Query answering over a fitted vector space.
//!
//! The engine owns an immutable `(Corpus, TfidfModel)` pair built once at
//! startup. Every `answer` call is read-only; refreshing the data means
//! constructing a new engine and swapping it in whole.

use crate::corpus::Corpus;
use crate::tfidf::TfidfModel;
use ree_core::{AppError, AppResult};
use serde::Serialize;

/// Number of sentences kept in the synthesized answer.
const MAX_ANSWER_SENTENCES: usize = 4;

/// One retrieved snippet with its provenance and similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct Evidence {
    /// Snippet text, verbatim from the corpus
    pub text: String,

    /// File name or table tag the snippet came from
    pub source: String,

    /// Cosine similarity against the query
    pub score: f32,
}

/// Result of answering one question.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    /// Retrieved snippets in ranking order
    pub evidence: Vec<Evidence>,

    /// First sentences of the ranked snippets, joined with single spaces
    pub synthesized: String,
}

/// Stateless Q&A over an immutable corpus/model pair.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    corpus: Corpus,
    model: TfidfModel,
}

impl QueryEngine {
    /// Pair a fitted model with the corpus it was fitted over.
    pub fn new(corpus: Corpus, model: TfidfModel) -> Self {
        Self { corpus, model }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn model(&self) -> &TfidfModel {
        &self.model
    }

    /// Answer a free-text question with the top `k` snippets as evidence.
    ///
    /// `k` below 1 is rejected before any scoring. Everything else is a
    /// normal outcome: fewer than `k` documents returns all of them, and a
    /// question with no known terms ranks every document at score 0 in
    /// corpus order.
    pub fn answer(&self, question: &str, k: usize) -> AppResult<Answer> {
        if k < 1 {
            return Err(AppError::InvalidArgument(format!(
                "top-k must be at least 1, got {}",
                k
            )));
        }

        let query = self.model.transform_query(question);
        let mut ranking = self.model.score(&query);

        // Descending score; equal scores keep ascending corpus order
        ranking.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranking.truncate(k);

        let evidence: Vec<Evidence> = ranking
            .iter()
            .filter_map(|&(index, score)| {
                self.corpus.get(index).map(|(text, meta)| Evidence {
                    text: text.to_string(),
                    source: meta.source.clone(),
                    score,
                })
            })
            .collect();

        let synthesized = synthesize(evidence.iter().map(|e| e.text.as_str()));

        tracing::debug!(
            "Answered with {} evidence snippets (top score: {:.3})",
            evidence.len(),
            evidence.first().map(|e| e.score).unwrap_or(0.0)
        );

        Ok(Answer {
            evidence,
            synthesized,
        })
    }
}

/// Join the ranked snippet texts and keep the first sentences.
fn synthesize<'a>(texts: impl Iterator<Item = &'a str>) -> String {
    let combined = texts.collect::<Vec<_>>().join(" ");
    split_sentences(&combined)
        .into_iter()
        .take(MAX_ANSWER_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on `.`, `!`, or `?` followed by whitespace; the punctuation stays
/// with its sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminal = false;

    for (idx, ch) in text.char_indices() {
        if after_terminal && ch.is_whitespace() {
            let sentence = text[start..idx].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = idx;
        }
        after_terminal = matches!(ch, '.' | '!' | '?');
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}
