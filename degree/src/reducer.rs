//! The reduce stage: degree signals in, top-N ranking out.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use common::{split_signal_line, Signal};

use crate::tally::DegreeTally;

/// Counters reported after a reducer run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReducerStats {
    /// Signals successfully applied to the tally.
    pub signals: u64,

    /// Lines skipped for a missing delimiter or malformed payload.
    pub skipped: u64,

    /// Distinct nodes seen across the whole stream.
    pub nodes: usize,

    /// Ranking records written.
    pub emitted: u64,
}

/// Reduce a signal stream into JSON-lines ranking records, most significant
/// first, truncated to `top_n`.
///
/// The caller must guarantee single-instance execution: the ranking is
/// global, so the hosting harness has to route the entire signal stream to
/// exactly one reducer (`-D mapreduce.job.reduces=1` under Hadoop
/// streaming). A partitioned stream reduces without error but the result is
/// a ranking of each partition, not of the graph.
///
/// Input does not need to be grouped or sorted by key; the tally is
/// order-independent. Malformed lines are skipped and counted. An empty
/// input stream produces an empty output.
pub fn run_reducer<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    top_n: usize,
) -> Result<ReducerStats> {
    let mut tally = DegreeTally::new();
    let mut stats = ReducerStats::default();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, payload)) = split_signal_line(line) else {
            debug!("skipping signal line without a delimiter");
            stats.skipped += 1;
            continue;
        };

        let Some(signal) = Signal::parse(payload) else {
            debug!("skipping malformed signal payload for key `{}`", key);
            stats.skipped += 1;
            continue;
        };

        tally.apply(key, signal);
        stats.signals += 1;
    }

    stats.nodes = tally.len();
    for ranking in tally.into_rankings(top_n) {
        serde_json::to_writer(&mut *output, &ranking)?;
        output.write_all(b"\n")?;
        stats.emitted += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::mapper::run_mapper;
    use crate::DEFAULT_TOP_N;

    fn reduced(input: &str, top_n: usize) -> (String, ReducerStats) {
        let mut output = Vec::new();
        let stats = run_reducer(input.as_bytes(), &mut output, top_n).unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn aggregates_and_ranks_by_total_degree() {
        let input = "A\tOUT:2\nB\tIN:1\nC\tIN:1\nB\tOUT:1\n";
        let (output, stats) = reduced(input, DEFAULT_TOP_N);

        // A and B tie at 2; ascending country breaks the tie.
        assert_eq!(
            output,
            concat!(
                r#"{"country":"A","in_degree":0,"out_degree":2,"total_degree":2}"#,
                "\n",
                r#"{"country":"B","in_degree":1,"out_degree":1,"total_degree":2}"#,
                "\n",
                r#"{"country":"C","in_degree":1,"out_degree":0,"total_degree":1}"#,
                "\n",
            )
        );
        assert_eq!(stats.signals, 4);
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.emitted, 3);
    }

    #[test]
    fn malformed_payloads_do_not_create_entries() {
        let (output, stats) = reduced("X\tBAD:1\nA\tOUT:1\n", DEFAULT_TOP_N);
        assert!(!output.contains("\"X\""));
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn lines_without_a_delimiter_are_skipped() {
        let (output, stats) = reduced("garbage\nA\tIN:1\nA OUT:2\n", DEFAULT_TOP_N);
        assert_eq!(
            output,
            "{\"country\":\"A\",\"in_degree\":1,\"out_degree\":0,\"total_degree\":1}\n"
        );
        assert_eq!(stats.skipped, 2);
    }

    #[test]
    fn non_integer_counts_are_skipped() {
        let (_, stats) = reduced("A\tOUT:lots\nA\tIN:\n", DEFAULT_TOP_N);
        assert_eq!(stats.signals, 0);
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let (output, stats) = reduced("", DEFAULT_TOP_N);
        assert!(output.is_empty());
        assert_eq!(stats.emitted, 0);
    }

    #[test]
    fn emits_at_most_top_n_records() {
        let input: String = (0..15).map(|i| format!("N{:02}\tOUT:{}\n", i, i)).collect();
        let (output, stats) = reduced(&input, DEFAULT_TOP_N);
        assert_eq!(output.lines().count(), 10);
        assert_eq!(stats.nodes, 15);
        assert_eq!(stats.emitted, 10);
    }

    #[test]
    fn output_is_non_increasing_in_total_degree() {
        let input = "A\tOUT:3\nB\tIN:1\nC\tOUT:7\nB\tIN:1\nD\tIN:1\n";
        let (output, _) = reduced(input, DEFAULT_TOP_N);

        let totals: Vec<u64> = output
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["total_degree"].as_u64().unwrap()
            })
            .collect();
        assert!(totals.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn accumulation_is_order_independent() {
        let forward = "A\tOUT:2\nB\tIN:1\nC\tIN:1\nB\tOUT:1\nA\tIN:1\n";
        let shuffled = "B\tOUT:1\nA\tIN:1\nC\tIN:1\nA\tOUT:2\nB\tIN:1\n";

        let (a, _) = reduced(forward, DEFAULT_TOP_N);
        let (b, _) = reduced(shuffled, DEFAULT_TOP_N);
        assert_eq!(a, b);
    }

    #[test]
    fn map_then_reduce_end_to_end() {
        let records = concat!(
            r#"{"source":"France","targets":["Germany","Spain"]}"#,
            "\n",
            r#"{"source":"Germany","targets":["France"]}"#,
            "\n",
            r#"{"source":"Spain","targets":[]}"#,
            "\n",
        );

        let mut signals = Vec::new();
        run_mapper(records.as_bytes(), &mut signals).unwrap();

        let mut output = Vec::new();
        let stats = run_reducer(signals.as_slice(), &mut output, DEFAULT_TOP_N).unwrap();
        assert_eq!(stats.nodes, 3);

        let output = String::from_utf8(output).unwrap();
        // France: 1 in + 2 out; Germany: 1 in + 1 out; Spain: 1 in + 0 out.
        assert_eq!(
            output.lines().next().unwrap(),
            r#"{"country":"France","in_degree":1,"out_degree":2,"total_degree":3}"#
        );
        assert_eq!(output.lines().count(), 3);
    }
}
