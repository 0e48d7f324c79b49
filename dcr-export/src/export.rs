//! Graph export: adjacency object in, edge records out.

use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::debug;

use common::EdgeRecord;

/// Keep the entries that are non-blank strings, trimmed.
fn clean_targets<'a>(raw: impl Iterator<Item = &'a Value>) -> Vec<String> {
    raw.filter_map(Value::as_str)
        .map(str::trim)
        .filter(|target| !target.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an adjacency JSON document into edge records.
///
/// The document must be an object mapping source names to target lists.
/// An object value is also accepted (its values are taken as the targets);
/// any other value shape yields an empty target list. Blank source names
/// are dropped, and non-string or blank targets are filtered out.
pub fn parse_graph(payload: &str) -> Result<Vec<EdgeRecord>> {
    let payload: Value =
        serde_json::from_str(payload).context("graph file is not valid JSON")?;
    let Value::Object(adjacency) = payload else {
        return Err(anyhow!(
            "graph JSON must be an object mapping source -> targets"
        ));
    };

    let mut records = Vec::with_capacity(adjacency.len());
    for (source, raw_targets) in adjacency {
        let name = source.trim();
        if name.is_empty() {
            debug!("dropping graph entry with a blank source name");
            continue;
        }

        let targets = match &raw_targets {
            Value::Array(items) => clean_targets(items.iter()),
            Value::Object(map) => clean_targets(map.values()),
            _ => Vec::new(),
        };

        records.push(EdgeRecord::new(name, targets));
    }
    Ok(records)
}

/// Write edge records as JSON lines.
pub fn write_edges<W: Write>(records: &[EdgeRecord], output: &mut W) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *output, record)?;
        output.write_all(b"\n")?;
    }
    Ok(())
}

/// Export the graph at `graph_path` to JSON-lines edge records at
/// `output_path`, creating parent directories as needed. Returns the number
/// of records written.
pub fn export_edges(graph_path: &Path, output_path: &Path) -> Result<usize> {
    let payload = fs::read_to_string(graph_path)
        .with_context(|| format!("graph file not found: {}", graph_path.display()))?;
    let records = parse_graph(&payload)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    let file = File::create(output_path)
        .with_context(|| format!("failed to create `{}`", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    write_edges(&records, &mut writer)?;
    writer.flush()?;

    Ok(records.len())
}
