//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::analyze::Analyzer;
use crate::ranker::{Ranker, RankerConfig};
use crate::types::{Corpus, Document};

/// Create a document with a numbered id, tokenized with the plain analyzer.
pub fn make_doc(id: usize, text: &str) -> Document {
    Document::new(format!("r{}", id), text, &Analyzer::Plain)
}

/// Build a corpus from texts, ids `r0..rN`, plain analyzer.
pub fn make_corpus(texts: &[&str]) -> Corpus {
    let mut corpus = Corpus::new();
    for (i, text) in texts.iter().enumerate() {
        corpus.push(make_doc(i, text));
    }
    corpus
}

/// Build a ranker over `texts` with the plain analyzer and default params.
pub fn make_ranker(texts: &[&str]) -> Ranker {
    let config = RankerConfig {
        analyzer: Analyzer::Plain,
        ..RankerConfig::default()
    };
    Ranker::new(make_corpus(texts), config).expect("non-empty test corpus")
}
