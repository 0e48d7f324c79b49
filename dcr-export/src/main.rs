use clap::Parser;
use tracing::info;

mod args;
use args::Args;

mod export;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    let exported = export::export_edges(&args.graph, &args.output)?;
    info!("exported {} records to {}", exported, args.output.display());
    Ok(())
}
