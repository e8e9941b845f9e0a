//! Lexical resume ranking with BM25 scoring.
//!
//! This crate ranks candidate resumes against a job description using BM25:
//! term-frequency/inverse-document-frequency weighting with document-length
//! normalization. It is the first, fully reproducible pass of a screening
//! pipeline; any semantic reranking happens downstream and is out of scope
//! here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ analyze.rs  │────▶│  stats.rs    │────▶│  scorer.rs  │
//! │ (Analyzer,  │     │ (Corpus-     │     │ (bm25_score)│
//! │  normalize) │     │  Statistics) │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     ranker.rs                       │
//! │  (Ranker: one corpus + one analyzer + one immutable │
//! │   statistics snapshot; exhaustive, stable ranking)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The critical invariant is that corpus and query share one analyzer; the
//! IDF weights are meaningless otherwise. A `Ranker` enforces this by owning
//! both the corpus and the analyzer for its whole lifetime.
//!
//! # Usage
//!
//! ```
//! use shortlist::{Ranker, RankerConfig};
//!
//! let ranker = Ranker::from_texts(
//!     vec![
//!         ("r1", "python engineer with five years experience"),
//!         ("r2", "java developer"),
//!     ],
//!     RankerConfig::default(),
//! )?;
//!
//! let ranked = ranker.rank("python engineer")?;
//! assert_eq!(ranked[0].doc_id, "r1");
//! # Ok::<(), shortlist::RankError>(())
//! ```

// Module declarations
mod analyze;
mod error;
pub mod eval;
mod ranker;
mod scorer;
mod stats;
pub mod testing;
mod types;

// Re-exports for public API
pub use analyze::{is_stop_word, Analyzer};
pub use error::RankError;
pub use ranker::{Ranker, RankerConfig};
pub use scorer::bm25_score;
pub use stats::CorpusStatistics;
pub use types::{Bm25Params, Corpus, Document, Education, IdfVariant, Ranked};
