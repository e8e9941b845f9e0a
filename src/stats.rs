//! Corpus statistics: document frequencies, IDF weights, and per-document
//! length normalization.
//!
//! Statistics are a pure function of a corpus snapshot. They are computed
//! once, shared read-only across scoring calls, and never updated in place.
//! If a document is added, removed, or edited, the statistics must be
//! rebuilt from scratch.
//!
//! # Invariants (DO NOT VIOLATE)
//!
//! 1. **DOC_FREQ**: `n_i` counts documents containing a term, not raw
//!    occurrences.
//! 2. **NON_EMPTY**: statistics only exist for a non-empty corpus;
//!    `avg_doc_length` is always a finite positive-or-zero number.
//! 3. **COVERAGE**: every document in the source corpus has an entry in the
//!    `K` map.

use std::collections::HashMap;

use crate::error::RankError;
use crate::types::{Bm25Params, Corpus, IdfVariant};

/// Immutable statistics for one corpus snapshot.
#[derive(Debug, Clone)]
pub struct CorpusStatistics {
    /// Term -> inverse document frequency.
    idf: HashMap<String, f64>,
    /// Mean token count across all documents.
    avg_doc_length: f64,
    /// Document id -> length-normalization factor
    /// `K = k1 * ((1 - b) + b * dl / avgdl)`.
    k_factor: HashMap<String, f64>,
    /// Number of documents the snapshot was built from.
    doc_count: usize,
}

impl CorpusStatistics {
    /// Compute statistics for `corpus` under `params`.
    ///
    /// Fails with [`RankError::InvalidCorpus`] when the corpus is empty:
    /// average document length is undefined for zero documents and must not
    /// silently become 0 or NaN.
    pub fn build(corpus: &Corpus, params: &Bm25Params) -> Result<Self, RankError> {
        if corpus.is_empty() {
            return Err(RankError::InvalidCorpus);
        }

        let n = corpus.len();

        // DOC_FREQ: count each term once per document that contains it.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut total_tokens = 0usize;
        for doc in corpus.documents() {
            total_tokens += doc.token_len();
            for term in doc.term_frequencies().keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let avg_doc_length = total_tokens as f64 / n as f64;

        let idf = doc_freq
            .into_iter()
            .map(|(term, n_i)| (term.to_string(), idf_weight(params.idf, n, n_i)))
            .collect();

        // COVERAGE: one K entry per document. A zero-length document (or a
        // corpus of only empty documents, avgdl == 0) collapses toward
        // k1 * (1 - b).
        let k_factor = corpus
            .documents()
            .iter()
            .map(|doc| {
                let relative_length = if avg_doc_length > 0.0 {
                    doc.token_len() as f64 / avg_doc_length
                } else {
                    0.0
                };
                let k = params.k1 * ((1.0 - params.b) + params.b * relative_length);
                (doc.id.clone(), k)
            })
            .collect();

        Ok(CorpusStatistics {
            idf,
            avg_doc_length,
            k_factor,
            doc_count: n,
        })
    }

    /// IDF weight for `term`, or 0.0 for terms outside the corpus vocabulary.
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    /// Length-normalization factor for the document with `doc_id`, if the
    /// document belongs to the snapshot these statistics were built from.
    pub fn k_factor(&self, doc_id: &str) -> Option<f64> {
        self.k_factor.get(doc_id).copied()
    }

    /// Mean token count across the snapshot.
    pub fn avg_doc_length(&self) -> f64 {
        self.avg_doc_length
    }

    /// Number of documents in the snapshot.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct terms in the snapshot vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

/// Per-term IDF under the selected variant.
fn idf_weight(variant: IdfVariant, n: usize, n_i: usize) -> f64 {
    let n = n as f64;
    let n_i = n_i as f64;
    match variant {
        IdfVariant::Classic => (n / n_i).ln(),
        IdfVariant::Robust => ((n - n_i + 0.5) / (n_i + 0.5)).ln(),
    }
}
