//! Exhaustive BM25 ranking over a corpus.
//!
//! A `Ranker` binds together one corpus snapshot, one analyzer, and one set
//! of immutable statistics. Queries are tokenized with the same analyzer the
//! corpus was built with, every document is scored exactly (no pruning, no
//! approximate top-k), and the results are stable-sorted descending by
//! score so equal scores keep corpus insertion order.
//!
//! Rebuilding after a corpus change means constructing a new `Ranker`;
//! statistics are never patched in place.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analyze::Analyzer;
use crate::error::RankError;
use crate::scorer::bm25_score;
use crate::stats::CorpusStatistics;
use crate::types::{Bm25Params, Corpus, Document, Ranked};

/// Configuration for a ranking session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RankerConfig {
    /// Scoring parameters, including the IDF variant.
    pub params: Bm25Params,
    /// Analyzer used for both corpus and query.
    pub analyzer: Analyzer,
}

/// Ranks every document in a corpus against a query string.
#[derive(Debug)]
pub struct Ranker {
    corpus: Corpus,
    statistics: CorpusStatistics,
    params: Bm25Params,
    analyzer: Analyzer,
}

impl Ranker {
    /// Build a ranker for `corpus`, computing statistics once up front.
    ///
    /// The corpus must already be tokenized with `config.analyzer`; use
    /// [`Ranker::from_texts`] to do both in one step. Fails with
    /// [`RankError::InvalidCorpus`] on an empty corpus.
    pub fn new(corpus: Corpus, config: RankerConfig) -> Result<Self, RankError> {
        let statistics = CorpusStatistics::build(&corpus, &config.params)?;
        Ok(Ranker {
            corpus,
            statistics,
            params: config.params,
            analyzer: config.analyzer,
        })
    }

    /// Tokenize `(id, text)` pairs and build a ranker in one step.
    pub fn from_texts<I, S, T>(pairs: I, config: RankerConfig) -> Result<Self, RankError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let corpus = Corpus::from_texts(pairs, &config.analyzer);
        Self::new(corpus, config)
    }

    /// Rank every document against `query_text`.
    ///
    /// Returns the full sorted list; truncation to top-k is the caller's
    /// responsibility. A query that normalizes to nothing (or overlaps no
    /// corpus vocabulary) is not an error: every document scores 0.0 and the
    /// result keeps corpus order.
    pub fn rank(&self, query_text: &str) -> Result<Vec<Ranked>, RankError> {
        let query_tokens = self.analyzer.normalize(query_text);

        let mut results = self.score_all(&query_tokens)?;

        // Stable sort: equal scores keep corpus insertion order. Scores are
        // finite for any well-formed statistics, so the fallback ordering is
        // unreachable in practice.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ok(results)
    }

    /// Score every document in corpus order.
    #[cfg(feature = "parallel")]
    fn score_all(&self, query_tokens: &[String]) -> Result<Vec<Ranked>, RankError> {
        self.corpus
            .documents()
            .par_iter()
            .enumerate()
            .map(|(index, doc)| self.score_one(index, doc, query_tokens))
            .collect()
    }

    /// Sequential fallback when the `parallel` feature is disabled.
    #[cfg(not(feature = "parallel"))]
    fn score_all(&self, query_tokens: &[String]) -> Result<Vec<Ranked>, RankError> {
        self.corpus
            .documents()
            .iter()
            .enumerate()
            .map(|(index, doc)| self.score_one(index, doc, query_tokens))
            .collect()
    }

    fn score_one(
        &self,
        index: usize,
        doc: &Document,
        query_tokens: &[String],
    ) -> Result<Ranked, RankError> {
        let score = bm25_score(doc, query_tokens, &self.statistics, &self.params)?;
        Ok(Ranked {
            index,
            doc_id: doc.id.clone(),
            score,
        })
    }

    /// The corpus snapshot this ranker was built from.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The immutable statistics shared across queries.
    pub fn statistics(&self) -> &CorpusStatistics {
        &self.statistics
    }

    /// The scoring parameters in effect.
    pub fn params(&self) -> &Bm25Params {
        &self.params
    }

    /// The analyzer used for corpus and queries.
    pub fn analyzer(&self) -> Analyzer {
        self.analyzer
    }
}
