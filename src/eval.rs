//! Ranking-quality metrics.
//!
//! Given a ranked list of document ids and a set of ids judged relevant,
//! these functions compute the usual cutoff metrics for comparing a ranking
//! against ground truth. Producing the relevance judgments is the caller's
//! problem; nothing here knows where they came from.

use std::collections::HashSet;

/// Fraction of the top `k` ranked ids that are relevant.
///
/// Empty inputs (no ranking, no relevant ids, or `k == 0`) give 0.0.
pub fn precision_at_k(ranked_ids: &[String], relevant: &HashSet<String>, k: usize) -> f64 {
    if ranked_ids.is_empty() || relevant.is_empty() || k == 0 {
        return 0.0;
    }

    let cutoff = k.min(ranked_ids.len());
    let hits = ranked_ids[..cutoff]
        .iter()
        .filter(|id| relevant.contains(id.as_str()))
        .count();

    hits as f64 / cutoff as f64
}

/// Average precision at cutoff `k`: the mean of precision-at-i over the
/// ranks `i` where a relevant id appears, divided by the total number of
/// relevant ids.
///
/// This is the per-query quantity that MAP averages over queries. Empty
/// inputs give 0.0.
pub fn average_precision_at_k(
    ranked_ids: &[String],
    relevant: &HashSet<String>,
    k: usize,
) -> f64 {
    if ranked_ids.is_empty() || relevant.is_empty() || k == 0 {
        return 0.0;
    }

    let cutoff = k.min(ranked_ids.len());
    let mut hits = 0usize;
    let mut precision_sum = 0.0;

    for (i, id) in ranked_ids[..cutoff].iter().enumerate() {
        if relevant.contains(id.as_str()) {
            hits += 1;
            precision_sum += hits as f64 / (i + 1) as f64;
        }
    }

    if hits == 0 {
        return 0.0;
    }
    precision_sum / relevant.len() as f64
}
