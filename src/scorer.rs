//! BM25 scoring for a single document against a query token sequence.
//!
//! The score is a sum of independent per-term contributions; there is no
//! cross-term interaction and no normalization beyond the `K` factor and the
//! IDF/TF formula. The function is total over any term set: a query with no
//! vocabulary overlap scores 0.0, which is a result, not an error.

use std::collections::HashMap;

use crate::error::RankError;
use crate::stats::CorpusStatistics;
use crate::types::{Bm25Params, Document};

/// Score `document` against `query_tokens` using `statistics`.
///
/// Each unique query term contributes
/// `idf(t) * f(t,d) * (k1 + 1) / (f(t,d) + K(d))`, with an optional
/// query-term-frequency factor `((k2 + 1) * qf) / (k2 + qf)` when
/// `params.k2 > 0`. Terms absent from the document are skipped; under the
/// robust IDF variant a present term can contribute negatively, and that is
/// preserved.
///
/// Fails with [`RankError::InconsistentState`] when `document` has no `K`
/// entry in `statistics`, which means the statistics were built from a
/// different corpus snapshot.
pub fn bm25_score(
    document: &Document,
    query_tokens: &[String],
    statistics: &CorpusStatistics,
    params: &Bm25Params,
) -> Result<f64, RankError> {
    let k = statistics
        .k_factor(&document.id)
        .ok_or_else(|| RankError::InconsistentState {
            doc_id: document.id.clone(),
        })?;

    let query_frequencies = query_term_frequencies(query_tokens);

    let mut score = 0.0;
    for (term, qf) in query_frequencies {
        let f = f64::from(document.term_frequency(term));
        if f == 0.0 {
            // Absent terms contribute nothing. Saturation, not an error.
            continue;
        }

        let idf = statistics.idf(term);
        let mut term_score = idf * (f * (params.k1 + 1.0)) / (f + k);

        if params.k2 > 0.0 {
            let qf = qf as f64;
            term_score *= ((params.k2 + 1.0) * qf) / (params.k2 + qf);
        }

        score += term_score;
    }

    Ok(score)
}

/// Collapse the query token sequence into unique terms with their counts.
fn query_term_frequencies(query_tokens: &[String]) -> HashMap<&str, u32> {
    let mut frequencies: HashMap<&str, u32> = HashMap::with_capacity(query_tokens.len());
    for token in query_tokens {
        *frequencies.entry(token.as_str()).or_insert(0) += 1;
    }
    frequencies
}
