use std::io::Write;

use clap::Parser;
use tracing::info;

mod args;
use args::Args;

use common::utils::{input_stream, output_stream};
use degree::run_mapper;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the signal stream.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    let input = input_stream(args.input.as_deref())?;
    let mut output = output_stream(args.output.as_deref())?;

    let stats = run_mapper(input, &mut output)?;
    output.flush()?;

    info!(
        "mapped {} records into {} signals ({} lines skipped)",
        stats.records, stats.signals, stats.skipped
    );
    Ok(())
}
