//! BM25 scoring checked against hand-computed values.

use shortlist::{bm25_score, Analyzer, Bm25Params, CorpusStatistics, Document, RankError};

use crate::common::build_corpus;

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn hand_computed_single_term_score() {
    let params = Bm25Params::default();
    // Corpus: lengths 4 and 2, avgdl = 3. "python" in 1 of 2 docs.
    let corpus = build_corpus(&["python code python code", "java code"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&corpus, &params).unwrap();

    let idf = 2.0f64.ln(); // ln(N / n_i) = ln(2 / 1)
    let k = params.k1 * ((1.0 - params.b) + params.b * (4.0 / 3.0));
    let f = 2.0;
    let expected = idf * (f * (params.k1 + 1.0)) / (f + k);

    let score = bm25_score(corpus.get(0).unwrap(), &tokens(&["python"]), &stats, &params).unwrap();
    assert!((score - expected).abs() < 1e-12);
}

#[test]
fn hand_computed_k2_factor() {
    let params = Bm25Params {
        k2: 1.69,
        ..Bm25Params::default()
    };
    let corpus = build_corpus(&["python", "java"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&corpus, &params).unwrap();
    let doc = corpus.get(0).unwrap();

    let base = bm25_score(doc, &tokens(&["python"]), &stats, &params).unwrap();
    let repeated = bm25_score(doc, &tokens(&["python", "python"]), &stats, &params).unwrap();

    // qf = 2: factor = ((k2 + 1) * 2) / (k2 + 2)
    let factor = ((params.k2 + 1.0) * 2.0) / (params.k2 + 2.0);
    assert!((repeated - base * factor).abs() < 1e-12);
}

#[test]
fn score_is_total_over_arbitrary_query_terms() {
    let params = Bm25Params::default();
    let corpus = build_corpus(&["python engineer"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&corpus, &params).unwrap();

    let score = bm25_score(
        corpus.get(0).unwrap(),
        &tokens(&["no", "such", "terms", "anywhere"]),
        &stats,
        &params,
    )
    .unwrap();
    assert_eq!(score, 0.0);
}

#[test]
fn mixing_snapshots_is_rejected() {
    let params = Bm25Params::default();
    let old_corpus = build_corpus(&["python"], Analyzer::Plain);
    let stats = CorpusStatistics::build(&old_corpus, &params).unwrap();

    // A document created after a rebuild is not covered by the old snapshot.
    let new_doc = Document::new("r99", "python", &Analyzer::Plain);
    let err = bm25_score(&new_doc, &tokens(&["python"]), &stats, &params).unwrap_err();
    assert!(matches!(err, RankError::InconsistentState { .. }));
}
