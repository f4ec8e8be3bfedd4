//! TF-IDF vector space fitting and similarity scoring.
//!
//! Fitting builds a bounded vocabulary over the corpus, computes smoothed
//! inverse document frequencies, and materializes one L2-normalized weight
//! vector per document. The fitted model is immutable: queries are projected
//! into the space without touching it, and a corpus change means fitting a
//! whole new model.

use crate::stopwords;
use ree_core::{AppError, AppResult};
use std::collections::{HashMap, HashSet};

/// Configuration for fitting a TF-IDF vector space.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Keep at most this many highest-document-frequency terms
    pub max_features: usize,

    /// Remove English stopwords during tokenization
    pub remove_stopwords: bool,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            max_features: 2000,
            remove_stopwords: true,
        }
    }
}

impl TfidfVectorizer {
    pub fn new(max_features: usize, remove_stopwords: bool) -> Self {
        Self {
            max_features,
            remove_stopwords,
        }
    }

    /// Fit a vector space over the corpus documents.
    ///
    /// Fails with `EmptyCorpus` when there are zero documents. Deterministic
    /// for a fixed corpus and configuration: vocabulary selection breaks
    /// document-frequency ties alphabetically, and dimensions are assigned
    /// in alphabetical term order.
    pub fn fit(&self, documents: &[String]) -> AppResult<TfidfModel> {
        if documents.is_empty() {
            return Err(AppError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> =
            documents.iter().map(|d| self.tokenize(d)).collect();

        // Document frequency per term
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        // Bounded vocabulary: top terms by document frequency, ties broken
        // alphabetically
        let mut ranked: Vec<(&String, usize)> =
            doc_freq.iter().map(|(t, &df)| (t, df)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut selected: Vec<String> = ranked.into_iter().map(|(t, _)| t.clone()).collect();
        selected.sort_unstable();

        let vocabulary: HashMap<String, usize> = selected
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
        let n = documents.len() as f32;
        let mut idf = vec![0.0f32; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = doc_freq[term] as f32;
            idf[idx] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        let doc_vectors: Vec<Vec<f32>> = tokenized
            .iter()
            .map(|tokens| vectorize(tokens, &vocabulary, &idf))
            .collect();

        tracing::debug!(
            "Fitted TF-IDF model: {} documents, {} vocabulary terms",
            documents.len(),
            vocabulary.len()
        );

        Ok(TfidfModel {
            vectorizer: self.clone(),
            vocabulary,
            idf,
            doc_vectors,
        })
    }

    /// Lowercase alphanumeric tokens of length >= 2, stopwords removed when
    /// configured.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= 2)
            .filter(|t| !self.remove_stopwords || !stopwords::is_stopword(t))
            .map(str::to_string)
            .collect()
    }
}

/// A fitted TF-IDF vector space.
///
/// Holds the vocabulary, IDF weights, and one L2-normalized vector per
/// corpus document. Read-only after `fit`.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vectorizer: TfidfVectorizer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    doc_vectors: Vec<Vec<f32>>,
}

impl TfidfModel {
    /// Number of retained vocabulary terms.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of document vectors in the space.
    pub fn document_count(&self) -> usize {
        self.doc_vectors.len()
    }

    /// Project a query string into the fitted space.
    ///
    /// Terms unseen at fit time are dropped, never added to the vocabulary.
    /// A query with no known terms produces a zero vector.
    pub fn transform_query(&self, text: &str) -> Vec<f32> {
        let tokens = self.vectorizer.tokenize(text);
        vectorize(&tokens, &self.vocabulary, &self.idf)
    }

    /// Cosine similarity of `query` against every document vector, in
    /// corpus order. Ordering and truncation are the caller's concern.
    pub fn score(&self, query: &[f32]) -> Vec<(usize, f32)> {
        self.doc_vectors
            .iter()
            .enumerate()
            .map(|(idx, doc)| (idx, cosine_similarity(query, doc)))
            .collect()
    }
}

/// Raw-count TF times IDF, L2-normalized.
fn vectorize(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f32]) -> Vec<f32> {
    let mut vector = vec![0.0f32; idf.len()];
    for token in tokens {
        if let Some(&idx) = vocabulary.get(token.as_str()) {
            vector[idx] += idf[idx];
        }
    }
    normalize(&mut vector);
    vector
}

/// Normalize to unit length in place; zero vectors are left untouched.
fn normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

/// Calculate cosine similarity between two vectors.
///
/// A zero vector on either side scores 0.0; there is no divide-by-zero
/// path out of this function.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
