use std::io::Write;

use clap::Parser;
use tracing::info;

mod args;
use args::Args;

use common::utils::{input_stream, output_stream};
use degree::run_reducer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the ranking records.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    let input = input_stream(args.input.as_deref())?;
    let mut output = output_stream(args.output.as_deref())?;

    let stats = run_reducer(input, &mut output, args.top)?;
    output.flush()?;

    info!(
        "tallied {} signals over {} nodes, emitted {} rankings ({} lines skipped)",
        stats.signals, stats.nodes, stats.emitted, stats.skipped
    );
    Ok(())
}
