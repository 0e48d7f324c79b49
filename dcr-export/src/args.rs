use std::path::PathBuf;

use clap::Parser;

/// Convert an adjacency JSON object into JSON-lines edge records for the
/// degree-centrality job.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the source graph JSON (an object mapping source -> targets).
    #[arg(short, long, default_value = "graph.json")]
    pub graph: PathBuf,

    /// Path for the JSON-lines output.
    #[arg(short, long, default_value = "data/graph_edges.jsonl")]
    pub output: PathBuf,
}
