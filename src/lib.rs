//! # chatstats
//!
//! Descriptive text statistics for exported conversation archives.
//!
//! ## Overview
//!
//! chatstats ingests a JSON conversation archive (an array of conversations,
//! each holding a `mapping` of message nodes), flattens every textual message
//! part into one token stream, and produces:
//!
//! - a word-frequency ranking over all tokens
//! - a second ranking with a fixed stop-word set removed before counting
//! - one overall sentiment score for the whole text
//!
//! Results land in two plain-text report files, replaced atomically on every
//! run. Progress is pushed through an ordered status-event stream, so a shell
//! or UI can mirror the pipeline without being coupled to it. Malformed
//! conversations and nodes inside an otherwise valid archive are skipped
//! silently; only unreadable input, invalid JSON, or a wrong top-level shape
//! abort a run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::pipeline::{self, AnalysisConfig};
//!
//! fn main() -> chatstats::Result<()> {
//!     let config = AnalysisConfig::new().with_output_dir("./reports");
//!     let job = pipeline::spawn("conversations.json".into(), config);
//!
//!     for event in job.events() {
//!         println!("{event}");
//!     }
//!
//!     let summary = job.join()?;
//!     println!("{} words, sentiment {:.2}", summary.tokens, summary.sentiment);
//!     Ok(())
//! }
//! ```
//!
//! ## Building Blocks
//!
//! The pipeline stages are ordinary functions, usable on their own:
//!
//! ```rust
//! use chatstats::analysis::{FrequencyTable, sentiment_score, tokenize};
//! use chatstats::archive;
//!
//! let conversations = archive::parse_document(
//!     r#"[{"mapping": {"a": {"message": {"content": {"parts": ["the cat sat"]}}}}}]"#,
//! )?;
//! let messages = archive::extract_messages(&conversations);
//! let tokens = tokenize(&messages.join(" "));
//! let table = FrequencyTable::from_tokens(tokens.iter().map(String::as_str));
//!
//! assert_eq!(table.total(), 3);
//! assert_eq!(sentiment_score(&messages.join(" ")), 0.0);
//! # Ok::<(), chatstats::AnalysisError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`archive`] — document parsing and message extraction
//! - [`analysis`] — tokenizer, frequency tables, sentiment scorer
//! - [`report`] — report formatting and atomic file output
//! - [`status`] — [`StatusEvent`] stream ([`StatusSink`](status::StatusSink))
//! - [`pipeline`] — run/spawn orchestration, [`AnalysisConfig`], [`AnalysisSummary`]
//! - [`error`] — unified error types ([`AnalysisError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod analysis;
pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod status;

// Re-export the main types at the crate root for convenience
pub use error::{AnalysisError, Result};
pub use pipeline::{AnalysisConfig, AnalysisJob, AnalysisSummary};
pub use status::StatusEvent;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{AnalysisError, Result};

    // Pipeline
    pub use crate::pipeline::{self, AnalysisConfig, AnalysisJob, AnalysisSummary};

    // Status stream
    pub use crate::status::{StatusEvent, StatusSink};

    // Analysis building blocks
    pub use crate::analysis::{FrequencyTable, is_stop_word, sentiment_score, tokenize};

    // Archive handling
    pub use crate::archive::{extract_messages, load_document, parse_document};

    // Report formatting
    pub use crate::report::{
        FILTERED_RESULTS_FILE, RESULTS_FILE, format_filtered_results, format_results,
    };
}
