use std::path::PathBuf;

use clap::Parser;

/// Map JSON-lines edge records into degree signals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the edge records. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the emitted signals. Writes stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
