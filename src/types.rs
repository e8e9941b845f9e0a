//! The building blocks of a ranking session.
//!
//! These types define how resumes, the corpus, and the scoring parameters
//! fit together. A `Document` is immutable once constructed: its token
//! sequence and term frequencies are derived exactly once, with the same
//! analyzer the query will later go through.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Document**: `term_frequencies` is derived from `tokens`; the two are
//!   never updated independently.
//! - **Corpus**: insertion order is stable. Equal scores fall back to this
//!   order, so reordering the corpus changes tie-breaks.
//! - **Bm25Params**: `k1 >= 0`, `0 <= b <= 1`, `k2 >= 0`. `k2 == 0` means
//!   query-term-frequency weighting is disabled entirely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analyze::Analyzer;

/// An education entry attached to a resume (school, degree, year).
///
/// Carried as candidate metadata for display and downstream filtering.
/// Never consulted by the scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: String,
}

/// A resume in tokenized form, ready for scoring.
///
/// Construction runs the raw text through the analyzer once and caches both
/// the token sequence and the term-frequency map. Everything else is
/// metadata for the caller.
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique, stable identifier.
    pub id: String,
    /// Raw resume text as supplied by the loader.
    pub text: String,
    /// Candidate location, if known.
    pub location: Option<String>,
    /// Declared skills, if any.
    pub skills: Vec<String>,
    /// Education history, if any.
    pub education: Vec<Education>,
    /// Normalized token sequence (ordered, repeats preserved).
    tokens: Vec<String>,
    /// Token -> occurrence count, built once from `tokens`.
    term_frequencies: HashMap<String, u32>,
}

impl Document {
    /// Tokenize `text` with `analyzer` and build the term-frequency map.
    pub fn new(id: impl Into<String>, text: impl Into<String>, analyzer: &Analyzer) -> Self {
        Self::with_metadata(id, text, None, Vec::new(), Vec::new(), analyzer)
    }

    /// Full constructor including candidate metadata.
    pub fn with_metadata(
        id: impl Into<String>,
        text: impl Into<String>,
        location: Option<String>,
        skills: Vec<String>,
        education: Vec<Education>,
        analyzer: &Analyzer,
    ) -> Self {
        let text = text.into();
        let tokens = analyzer.normalize(&text);

        let mut term_frequencies: HashMap<String, u32> = HashMap::new();
        for token in &tokens {
            *term_frequencies.entry(token.clone()).or_insert(0) += 1;
        }

        Document {
            id: id.into(),
            text,
            location,
            skills,
            education,
            tokens,
            term_frequencies,
        }
    }

    /// Normalized token sequence, in text order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens; the document length used for normalization.
    pub fn token_len(&self) -> usize {
        self.tokens.len()
    }

    /// Raw frequency of `term` in this document (0 if absent).
    pub fn term_frequency(&self, term: &str) -> u32 {
        self.term_frequencies.get(term).copied().unwrap_or(0)
    }

    /// The full term-frequency map.
    pub fn term_frequencies(&self) -> &HashMap<String, u32> {
        &self.term_frequencies
    }
}

/// An ordered collection of documents sharing one analyzer.
///
/// Insertion order is preserved and meaningful: ranking breaks score ties
/// by position in this collection.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Corpus {
            documents: Vec::new(),
        }
    }

    /// Build a corpus by tokenizing `(id, text)` pairs with `analyzer`.
    pub fn from_texts<I, S, T>(pairs: I, analyzer: &Analyzer) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let documents = pairs
            .into_iter()
            .map(|(id, text)| Document::new(id, text, analyzer))
            .collect();
        Corpus { documents }
    }

    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }
}

/// Which inverse-document-frequency formula to use.
///
/// The two variants give materially different weights to very common terms,
/// so a ranking session must pick one and stick with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdfVariant {
    /// `ln(N / n_i)`. Non-negative for every term, so documents with zero
    /// query overlap always sort last. The default.
    #[default]
    Classic,
    /// `ln((N - n_i + 0.5) / (n_i + 0.5))`. Goes negative for terms present
    /// in more than half the corpus; those negative contributions are kept
    /// as-is, never clamped.
    Robust,
}

/// Tunable BM25 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Length-normalization strength, 0 (off) to 1 (full).
    pub b: f64,
    /// Query-term-frequency saturation. 0 disables the factor entirely.
    pub k2: f64,
    /// IDF formula selection.
    pub idf: IdfVariant,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params {
            k1: 1.5,
            b: 0.75,
            k2: 0.0,
            idf: IdfVariant::Classic,
        }
    }
}

/// One entry in a ranked result list.
///
/// `index` points back into the corpus the ranker was built from; `doc_id`
/// is cloned out so results can outlive borrowed views of the corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    /// Position of the document in the original corpus.
    pub index: usize,
    /// The document's identifier.
    pub doc_id: String,
    /// BM25 relevance score. Unbounded; negative only under `IdfVariant::Robust`.
    pub score: f64,
}
