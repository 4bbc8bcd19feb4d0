//! # chatstats CLI
//!
//! Thin shell around the chatstats library: supplies the input path, prints
//! status events as the background run advances, and summarizes the result.

use std::process;

use clap::Parser;

use chatstats::cli::Args;
use chatstats::pipeline::{self, AnalysisConfig};
use chatstats::{AnalysisError, StatusEvent};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), AnalysisError> {
    let args = Args::parse();

    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());

    let mut config = AnalysisConfig::new();
    if let Some(ref dir) = args.output_dir {
        println!("💾 Output:  {}", dir.display());
        config = config.with_output_dir(dir);
    }
    println!();

    let job = pipeline::spawn(args.input, config);

    // The worker never blocks on us; this loop just mirrors its milestones
    // and ends when the run is done.
    for event in job.events() {
        if !args.quiet && !matches!(event, StatusEvent::Failed { .. }) {
            println!("⏳ {event}");
        }
    }

    let summary = job.join()?;

    println!();
    println!("✅ Done! Reports written:");
    println!("   {}", summary.report_path.display());
    println!("   {}", summary.filtered_report_path.display());

    println!();
    println!("📈 Summary:");
    println!("   Conversations:  {}", summary.conversations);
    println!("   Messages:       {}", summary.messages);
    println!(
        "   Words:          {} ({} distinct)",
        summary.tokens, summary.distinct_tokens
    );
    println!("   Without stops:  {}", summary.filtered_tokens);
    println!("   Sentiment:      {:.2}", summary.sentiment);
    println!("   Total time:     {:.2}s", summary.elapsed.as_secs_f64());

    Ok(())
}
