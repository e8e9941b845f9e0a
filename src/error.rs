//! Error types for corpus construction and scoring.

use std::error::Error;
use std::fmt;

/// Errors surfaced by statistics construction and scoring.
///
/// Zero query overlap, empty queries, and empty documents are all valid
/// inputs and never produce an error; these variants cover states the
/// caller genuinely has to fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// The corpus has no documents, so average document length (and with it
    /// every score) is undefined.
    InvalidCorpus,
    /// A document was scored against statistics built from a different
    /// corpus snapshot.
    InconsistentState {
        /// Id of the document missing from the statistics.
        doc_id: String,
    },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::InvalidCorpus => {
                write!(f, "corpus is empty; ranking requires at least one document")
            }
            RankError::InconsistentState { doc_id } => {
                write!(
                    f,
                    "document '{}' is not covered by the corpus statistics; \
                     rebuild the statistics after changing the corpus",
                    doc_id
                )
            }
        }
    }
}

impl Error for RankError {}
