//! Single-process pipeline runner: map, buffer, reduce.
//!
//! Useful for local runs and smoke tests without a streaming harness. The
//! reducer does not require its input grouped by key, so the mapper output
//! is fed to it as-is with no shuffle stage in between.

use std::io::{BufRead, Write};

use clap::Parser;
use tracing::info;

mod args;
use args::Args;

use common::utils::{input_stream, output_stream};
use degree::{run_mapper, run_reducer, MapperStats, ReducerStats};

fn run_pipeline<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    top: usize,
) -> Result<(MapperStats, ReducerStats), Box<dyn std::error::Error>> {
    let mut signals = Vec::new();
    let map_stats = run_mapper(input, &mut signals)?;
    let reduce_stats = run_reducer(signals.as_slice(), output, top)?;
    Ok((map_stats, reduce_stats))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    let input = input_stream(args.input.as_deref())?;
    let mut output = output_stream(args.output.as_deref())?;

    let (map_stats, reduce_stats) = run_pipeline(input, &mut output, args.top)?;
    output.flush()?;

    info!(
        "map phase: {} records into {} signals ({} lines skipped)",
        map_stats.records, map_stats.signals, map_stats.skipped
    );
    info!(
        "reduce phase: {} nodes tallied, {} rankings emitted",
        reduce_stats.nodes, reduce_stats.emitted
    );

    Ok(())
}
