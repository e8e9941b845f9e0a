//! Tokenization and normalization.
//!
//! Both the corpus and the query must go through the same analyzer, or the
//! IDF weights stop meaning anything. The `English` mode mirrors the classic
//! IR preprocessing pipeline: lowercase, split on non-word boundaries, drop
//! stop words, stem. The `Plain` mode is the lightweight fallback when
//! stemmed analysis is unwanted: lowercase and boundary split only.
//!
//! Normalization is total: any input string, including the empty string,
//! produces a (possibly empty) token sequence.

use std::collections::HashSet;
use std::sync::{LazyLock, OnceLock};

use rust_stemmers::{Algorithm, Stemmer};

/// English stop words loaded from data/stop_words.txt.
///
/// These words are:
/// 1. Too common to carry ranking signal
/// 2. Responsible for most of the token volume in prose
///
/// The list is a static resource, not configurable at call time.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("../data/stop_words.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// Shared stemmer instance. Construction is cheap but not free, and the
/// stemmer is stateless, so one per process is enough.
fn stemmer() -> &'static Stemmer {
    static STEMMER: OnceLock<Stemmer> = OnceLock::new();
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Check if a word is an English stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Word boundary detection: a word is contiguous letters/digits/underscore.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Text normalization mode. One `Ranker` uses exactly one analyzer for both
/// its corpus and its queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Analyzer {
    /// Lowercase, word-boundary split, stop-word removal, Porter stemming.
    #[default]
    English,
    /// Lowercase and word-boundary split only.
    Plain,
}

impl Analyzer {
    /// Normalize `text` into a flat, ordered token sequence.
    ///
    /// Repeats are preserved; consumers that need set semantics deduplicate
    /// explicitly. Empty input gives an empty sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let words = split_words(text);
        match self {
            Analyzer::Plain => words,
            Analyzer::English => words
                .into_iter()
                .filter(|w| !is_stop_word(w))
                .map(|w| stemmer().stem(&w).into_owned())
                .collect(),
        }
    }
}

/// Split into lowercase words at non-word-character boundaries.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if is_word_char(c) {
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}
