//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

/// Analyze an exported conversation archive: word frequencies and overall
/// sentiment, written to two report files.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats conversations.json
    chatstats conversations.json --output-dir ./reports
    chatstats conversations.json -q")]
pub struct Args {
    /// Path to the exported conversation archive (JSON)
    pub input: PathBuf,

    /// Directory to write the report files into (default: home directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress per-stage status output
    #[arg(short, long)]
    pub quiet: bool,
}
