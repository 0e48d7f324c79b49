//! The map stage: edge records in, degree signals out.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use common::{write_signal, EdgeRecord, Signal};

/// Counters reported after a mapper run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MapperStats {
    /// Edge records successfully mapped.
    pub records: u64,

    /// Signals written to the output stream.
    pub signals: u64,

    /// Lines skipped as unparseable or missing a source.
    pub skipped: u64,
}

/// Turn one edge record into its degree signals.
///
/// The source receives a single `OUT` signal counting the full length of the
/// target list; each non-empty target receives one `IN:1` unit. Empty target
/// entries therefore still count toward the source's out-degree but never
/// produce an in-degree unit.
pub fn map_edge(record: &EdgeRecord) -> Vec<(String, Signal)> {
    let mut signals = Vec::with_capacity(record.targets.len() + 1);
    signals.push((
        record.source.clone(),
        Signal::Out(record.targets.len() as u64),
    ));

    for target in &record.targets {
        if !target.is_empty() {
            signals.push((target.clone(), Signal::In(1)));
        }
    }

    signals
}

/// Map a stream of JSON-lines edge records into a signal stream.
///
/// Lines that fail to parse, or whose `source` is empty or missing, are
/// skipped and counted; no per-line problem aborts the run.
pub fn run_mapper<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<MapperStats> {
    let mut stats = MapperStats::default();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record: EdgeRecord = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(err) => {
                debug!("skipping unparseable edge record: {}", err);
                stats.skipped += 1;
                continue;
            }
        };

        if record.source.is_empty() {
            debug!("skipping edge record without a source");
            stats.skipped += 1;
            continue;
        }

        for (key, signal) in map_edge(&record) {
            write_signal(output, &key, signal)?;
            stats.signals += 1;
        }
        stats.records += 1;
    }

    Ok(stats)
}
