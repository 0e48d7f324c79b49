//! Shared record and signal protocol for the degree-centrality pipeline.
//!
//! The mapper and reducer run as independent stream processors connected by
//! a tab-separated key/value stream. This crate defines the record shapes on
//! both ends of that stream and the line codec between them.

use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::io::Write;

use serde::{Deserialize, Deserializer, Serialize};

pub mod utils;

/////////////////////////////////////////////////////////////////////////////
// Record types
/////////////////////////////////////////////////////////////////////////////

/// One graph edge record, as produced by the graph export step.
///
/// A missing or `null` `targets` field deserializes as an empty list. The
/// list may contain empty or duplicate entries; the mapper tolerates both.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct EdgeRecord {
    /// The source node.
    pub source: String,

    /// Every node the source has an outgoing edge to.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub targets: Vec<String>,
}

/// Accept an explicit `null` target list as an empty one.
fn null_to_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let targets = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(targets.unwrap_or_default())
}

impl EdgeRecord {
    /// Construct a new edge record from the given source and targets.
    pub fn new(source: impl Into<String>, targets: Vec<String>) -> Self {
        Self {
            source: source.into(),
            targets,
        }
    }
}

/// A final ranking entry for one node.
///
/// `total_degree` is always `in_degree + out_degree`; the reducer computes
/// it during finalization rather than trusting any upstream value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Ranking {
    /// The node identifier.
    pub country: String,

    /// Count of incoming edges.
    pub in_degree: u64,

    /// Count of outgoing edges.
    pub out_degree: u64,

    /// Degree centrality: `in_degree + out_degree`.
    pub total_degree: u64,
}

/////////////////////////////////////////////////////////////////////////////
// Signals
/////////////////////////////////////////////////////////////////////////////

/// An intermediate contribution to one node's degree counts.
///
/// Signals travel between mapper and reducer as `OUT:<n>` or `IN:<n>`
/// payloads. The mapper only ever emits `In(1)` (multiplicity is expressed
/// by repetition), but the parser accepts any non-negative count so that a
/// pre-combined stream still reduces correctly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Signal {
    /// The node contributed this many outgoing edges.
    Out(u64),

    /// The node received this many incoming edges.
    In(u64),
}

impl Signal {
    /// Parse a signal payload from its wire form.
    ///
    /// Returns `None` for unrecognized prefixes and non-integer remainders;
    /// callers skip such lines rather than abort the stream.
    pub fn parse(payload: &str) -> Option<Signal> {
        if let Some(rest) = payload.strip_prefix("OUT:") {
            rest.parse().ok().map(Signal::Out)
        } else if let Some(rest) = payload.strip_prefix("IN:") {
            rest.parse().ok().map(Signal::In)
        } else {
            None
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Out(n) => write!(f, "OUT:{}", n),
            Signal::In(n) => write!(f, "IN:{}", n),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Line codec
/////////////////////////////////////////////////////////////////////////////

/// Split a signal line into its key and payload on the first tab.
///
/// Returns `None` when the line carries no delimiter at all.
pub fn split_signal_line(line: &str) -> Option<(&str, &str)> {
    line.split_once('\t')
}

/// Write one `key\tvalue` signal line.
pub fn write_signal<W: Write>(out: &mut W, key: &str, signal: Signal) -> io::Result<()> {
    writeln!(out, "{}\t{}", key, signal)
}
