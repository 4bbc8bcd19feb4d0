//! The analysis pipeline.
//!
//! One run is a single linear traversal:
//!
//! ```text
//! Parsing → Extracting → Tokenizing → Aggregating → Scoring → Writing → Done
//! ```
//!
//! with a terminal `Failed` reachable from the parsing stages (unreadable
//! file, invalid JSON, wrong shape) or the writing stage (I/O). No stage is
//! re-entered, nothing is cached across runs, and each run owns its token
//! sequence and tables exclusively until the reports are on disk.
//!
//! [`run`] executes the pipeline on the calling thread and pushes a
//! [`StatusEvent`] after every stage. [`spawn`] moves the same run onto a
//! background worker so the caller never blocks, handing back an
//! [`AnalysisJob`] with the event receiver and an analysis-in-progress flag.
//! Concurrent runs are not coordinated — callers are expected to start the
//! next run only after the flag clears.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::Serialize;

use crate::analysis::{FrequencyTable, sentiment_score, tokenize};
use crate::archive;
use crate::error::{AnalysisError, Result};
use crate::report;
use crate::status::{StatusEvent, StatusSink};

/// Configuration for an analysis run.
///
/// # Example
///
/// ```rust
/// use chatstats::pipeline::AnalysisConfig;
///
/// let config = AnalysisConfig::new().with_output_dir("/tmp/reports");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Directory the two report files are written into.
    /// Defaults to the user's home directory.
    output_dir: Option<PathBuf>,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the report output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    fn resolve_output_dir(&self) -> Result<PathBuf> {
        self.output_dir
            .clone()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                AnalysisError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "could not determine a home directory for report output",
                ))
            })
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    /// Conversations in the archive.
    pub conversations: usize,
    /// Message parts extracted.
    pub messages: usize,
    /// Total tokens counted.
    pub tokens: usize,
    /// Distinct tokens in the raw table.
    pub distinct_tokens: usize,
    /// Tokens remaining after stop-word filtering.
    pub filtered_tokens: usize,
    /// Overall sentiment in [-1.0, 1.0].
    pub sentiment: f64,
    /// Path of the raw-frequency report.
    pub report_path: PathBuf,
    /// Path of the stop-word-filtered report.
    pub filtered_report_path: PathBuf,
    /// Total run duration.
    pub elapsed: Duration,
}

/// Runs the full pipeline synchronously.
///
/// Status events are pushed to `status` after each stage, ending with either
/// `Completed` or `Failed`. The returned summary mirrors the final event.
pub fn run(path: &Path, config: &AnalysisConfig, status: &StatusSink) -> Result<AnalysisSummary> {
    let clock = Instant::now();
    status.emit(StatusEvent::Started { at: Utc::now() });

    let result = run_stages(path, config, status, clock);
    match &result {
        Ok(summary) => status.emit(StatusEvent::Completed {
            at: Utc::now(),
            elapsed: summary.elapsed,
        }),
        Err(e) => status.emit(StatusEvent::Failed {
            message: e.to_string(),
        }),
    }
    result
}

fn run_stages(
    path: &Path,
    config: &AnalysisConfig,
    status: &StatusSink,
    clock: Instant,
) -> Result<AnalysisSummary> {
    // Parsing
    let conversations = archive::load_document(path)?;
    status.emit(StatusEvent::Parsed {
        conversations: conversations.len(),
    });

    // Extracting
    let messages = archive::extract_messages(&conversations);
    status.emit(StatusEvent::Extracted {
        messages: messages.len(),
    });

    // Tokenizing
    let all_text = messages.join(" ");
    let tokens = tokenize(&all_text);
    status.emit(StatusEvent::Tokenized {
        tokens: tokens.len(),
    });

    // Aggregating (raw)
    let raw = FrequencyTable::from_tokens(tokens.iter().map(String::as_str));
    status.emit(StatusEvent::Counted {
        distinct: raw.distinct(),
    });

    // Scoring
    let sentiment = sentiment_score(&all_text);
    status.emit(StatusEvent::Scored { sentiment });

    // Aggregating (filtered)
    let filtered = FrequencyTable::without_stop_words(&tokens);
    status.emit(StatusEvent::Filtered {
        remaining: filtered.total(),
    });

    // Writing
    let output_dir = config.resolve_output_dir()?;
    let report_path = output_dir.join(report::RESULTS_FILE);
    let filtered_report_path = output_dir.join(report::FILTERED_RESULTS_FILE);
    report::write_report(&report_path, &report::format_results(&raw, sentiment))?;
    report::write_report(
        &filtered_report_path,
        &report::format_filtered_results(&filtered),
    )?;

    Ok(AnalysisSummary {
        conversations: conversations.len(),
        messages: messages.len(),
        tokens: tokens.len(),
        distinct_tokens: raw.distinct(),
        filtered_tokens: filtered.total(),
        sentiment,
        report_path,
        filtered_report_path,
        elapsed: clock.elapsed(),
    })
}

/// A background analysis run.
///
/// Dropping the job does not cancel the run; there is no cancellation — a
/// run always proceeds to completion or failure.
#[derive(Debug)]
pub struct AnalysisJob {
    events: Receiver<StatusEvent>,
    handle: JoinHandle<Result<AnalysisSummary>>,
    running: Arc<AtomicBool>,
}

impl AnalysisJob {
    /// The status event stream, in pipeline order.
    ///
    /// Iterating the receiver yields events as they happen and ends once the
    /// run finishes.
    pub fn events(&self) -> &Receiver<StatusEvent> {
        &self.events
    }

    /// Whether the run is still in flight.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Waits for the run to finish and returns its result.
    pub fn join(self) -> Result<AnalysisSummary> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => Err(AnalysisError::Io(std::io::Error::other(
                "analysis worker panicked",
            ))),
        }
    }
}

/// Starts the pipeline on a background worker thread.
///
/// Returns immediately. The caller reads progress from
/// [`AnalysisJob::events`], polls [`AnalysisJob::is_running`], and collects
/// the result with [`AnalysisJob::join`].
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::pipeline::{self, AnalysisConfig};
///
/// let job = pipeline::spawn("conversations.json".into(), AnalysisConfig::new());
/// for event in job.events() {
///     println!("{event}");
/// }
/// let summary = job.join()?;
/// println!("{} words", summary.tokens);
/// # Ok::<(), chatstats::AnalysisError>(())
/// ```
pub fn spawn(path: PathBuf, config: AnalysisConfig) -> AnalysisJob {
    let (status, events) = StatusSink::channel();
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);

    let handle = thread::spawn(move || {
        let result = run(&path, &config, &status);
        flag.store(false, Ordering::SeqCst);
        result
    });

    AnalysisJob {
        events,
        handle,
        running,
    }
}
