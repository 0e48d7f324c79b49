use std::path::PathBuf;

use clap::Parser;

/// Run the full degree-centrality pipeline in a single process.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON-lines edge records. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the ranking records. Writes stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of ranking records to emit.
    #[arg(short, long, default_value_t = degree::DEFAULT_TOP_N)]
    pub top: usize,
}
