use std::path::PathBuf;

use clap::Parser;

/// Aggregate degree signals into a top-N ranking.
///
/// The ranking is global, so the whole signal stream must reach a single
/// reducer instance. Under Hadoop streaming, launch the job with
/// `-D mapreduce.job.reduces=1`.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to the signal stream. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the ranking records. Writes stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of ranking records to emit.
    #[arg(short, long, default_value_t = degree::DEFAULT_TOP_N)]
    pub top: usize,
}
