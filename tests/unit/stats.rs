//! Corpus statistics at the public API boundary.

use shortlist::{Analyzer, Bm25Params, Corpus, CorpusStatistics, IdfVariant, RankError};

use crate::common::build_corpus;

#[test]
fn empty_corpus_is_invalid() {
    let result = CorpusStatistics::build(&Corpus::new(), &Bm25Params::default());
    assert_eq!(result.unwrap_err(), RankError::InvalidCorpus);
}

#[test]
fn classic_idf_values() {
    let corpus = build_corpus(&["python java", "python", "rust"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&corpus, &Bm25Params::default()).unwrap();

    // N = 3; python in 2 docs, java and rust in 1 each.
    assert!((stats.idf("python") - (3.0f64 / 2.0).ln()).abs() < 1e-12);
    assert!((stats.idf("java") - 3.0f64.ln()).abs() < 1e-12);
    assert!((stats.idf("rust") - 3.0f64.ln()).abs() < 1e-12);
}

#[test]
fn robust_idf_values() {
    let params = Bm25Params {
        idf: IdfVariant::Robust,
        ..Bm25Params::default()
    };
    let corpus = build_corpus(&["python java", "python", "rust"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&corpus, &params).unwrap();

    // ln((N - n_i + 0.5) / (n_i + 0.5))
    assert!((stats.idf("python") - (1.5f64 / 2.5).ln()).abs() < 1e-12);
    assert!((stats.idf("java") - (2.5f64 / 1.5).ln()).abs() < 1e-12);
    assert!(stats.idf("python") < 0.0);
}

#[test]
fn term_in_every_document_has_zero_classic_idf() {
    let corpus = build_corpus(&["python a", "python b"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&corpus, &Bm25Params::default()).unwrap();
    assert_eq!(stats.idf("python"), 0.0);
}

#[test]
fn statistics_reflect_corpus_shape() {
    let corpus = build_corpus(&["a b c", "d e", "f"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&corpus, &Bm25Params::default()).unwrap();
    assert_eq!(stats.doc_count(), 3);
    assert_eq!(stats.vocabulary_size(), 6);
    assert!((stats.avg_doc_length() - 2.0).abs() < 1e-12);
}

#[test]
fn b_zero_makes_k_independent_of_length() {
    let params = Bm25Params {
        b: 0.0,
        ..Bm25Params::default()
    };
    let corpus = build_corpus(&["one", "two three four five six"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&corpus, &params).unwrap();
    assert_eq!(stats.k_factor("r0"), stats.k_factor("r1"));
    assert!((stats.k_factor("r0").unwrap() - params.k1).abs() < 1e-12);
}

#[test]
fn b_one_scales_k_fully_with_relative_length() {
    let params = Bm25Params {
        b: 1.0,
        ..Bm25Params::default()
    };
    // Lengths 1 and 3, avgdl = 2.
    let corpus = build_corpus(&["one", "two three four"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&corpus, &params).unwrap();
    assert!((stats.k_factor("r0").unwrap() - params.k1 * 0.5).abs() < 1e-12);
    assert!((stats.k_factor("r1").unwrap() - params.k1 * 1.5).abs() < 1e-12);
}
