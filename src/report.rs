//! Report formatting and atomic file output.
//!
//! Two reports per run, overwriting any previous run's files:
//!
//! - [`RESULTS_FILE`] — full ranking plus the overall sentiment score
//! - [`FILTERED_RESULTS_FILE`] — ranking with stop words removed, no
//!   sentiment line
//!
//! Each ranked line has the form `token: count (percentage%)` with the
//! percentage taken against that table's own total and formatted to two
//! decimals. Writes go through a temp file in the destination directory
//! followed by a rename, so readers never observe a half-written report and
//! a failed run never leaves a partial file behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::analysis::FrequencyTable;
use crate::error::Result;

/// File name of the raw-frequency report.
pub const RESULTS_FILE: &str = "analysis_results.txt";

/// File name of the stop-word-filtered report.
pub const FILTERED_RESULTS_FILE: &str = "analysis_results_without_stopwords.txt";

/// Formats the raw report: header, ranking, sentiment trailer.
///
/// An empty table produces the header and the sentiment line with no ranked
/// lines in between; no percentage is computed for it.
pub fn format_results(table: &FrequencyTable, sentiment: f64) -> String {
    let mut out = String::from("Most common words:\n");
    push_ranking(&mut out, table);
    out.push_str(&format!("\nOverall sentiment: {sentiment:.2}\n"));
    out
}

/// Formats the filtered report: header and ranking only.
pub fn format_filtered_results(table: &FrequencyTable) -> String {
    let mut out = String::from("Most common words (without stop words):\n");
    push_ranking(&mut out, table);
    out
}

fn push_ranking(out: &mut String, table: &FrequencyTable) {
    for (token, count) in table.ranking() {
        let percentage = table.percentage(*count);
        out.push_str(&format!("{token}: {count} ({percentage:.2}%)\n"));
    }
}

/// Writes `contents` to `path` atomically, replacing any existing file.
///
/// The temp file is created next to the destination so the final rename
/// stays on one filesystem.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new()?,
    };
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
