//! Corpus construction for the Q&A retrieval pipeline.
//!
//! The corpus is rebuilt from scratch on every run, in a fixed order:
//! plain-text documents first, then one synthesized sentence per elements
//! row, then one per alloys row. A document's position is the join key to
//! its metadata entry, so order never changes after a build.

use ree_core::AppResult;
use ree_data::{AlloyRecord, ElementRecord};
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

/// Source tag for documents synthesized from the elements table.
pub const ELEMENTS_SOURCE: &str = "elements.csv";

/// Source tag for documents synthesized from the alloys table.
pub const ALLOYS_SOURCE: &str = "alloys.csv";

/// Per-document provenance, parallel to the corpus by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    /// File name or table tag this document came from
    pub source: String,
}

/// An ordered collection of retrievable text snippets with provenance.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<String>,
    metadata: Vec<DocumentMeta>,
}

impl Corpus {
    /// Assemble a corpus from `(text, source)` pairs.
    ///
    /// `build_corpus` is the normal path; this constructor exists for
    /// callers that source snippets some other way.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut corpus = Self {
            documents: Vec::new(),
            metadata: Vec::new(),
        };
        for (text, source) in pairs {
            corpus.push(text, source);
        }
        corpus
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All document texts, in corpus order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// All metadata entries, parallel to `documents()`.
    pub fn metadata(&self) -> &[DocumentMeta] {
        &self.metadata
    }

    /// One document and its metadata by corpus index.
    pub fn get(&self, index: usize) -> Option<(&str, &DocumentMeta)> {
        match (self.documents.get(index), self.metadata.get(index)) {
            (Some(text), Some(meta)) => Some((text.as_str(), meta)),
            _ => None,
        }
    }

    fn push(&mut self, text: String, source: String) {
        self.documents.push(text);
        self.metadata.push(DocumentMeta { source });
    }
}

/// Build the corpus from the documents directory and the two text-bearing
/// tables.
///
/// File documents are taken verbatim, one per `.txt` file directly inside
/// `documents_dir` (no recursion), sorted by file name so the build is
/// deterministic across platforms. A missing or empty documents directory
/// contributes zero file documents; it is not an error. Table rows become
/// `"<name>: <key applications>. <notes>"` sentences in row order.
pub fn build_corpus(
    documents_dir: &Path,
    elements: &[ElementRecord],
    alloys: &[AlloyRecord],
) -> AppResult<Corpus> {
    let mut corpus = Corpus {
        documents: Vec::new(),
        metadata: Vec::new(),
    };

    if documents_dir.is_dir() {
        let mut files: Vec<_> = WalkDir::new(documents_dir)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("txt"))
            .map(|e| e.into_path())
            .collect();
        files.sort();

        for path in &files {
            let text = std::fs::read_to_string(path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            corpus.push(text, name);
        }
    } else {
        tracing::debug!("No documents directory at {:?}", documents_dir);
    }

    for row in elements {
        corpus.push(
            format!("{}: {}. {}", row.element, row.key_applications, row.notes),
            ELEMENTS_SOURCE.to_string(),
        );
    }

    for row in alloys {
        corpus.push(
            format!("{}: {}. {}", row.alloy, row.key_applications, row.notes),
            ALLOYS_SOURCE.to_string(),
        );
    }

    tracing::info!("Built corpus of {} documents", corpus.len());
    Ok(corpus)
}
