//! Per-node degree accumulation and final ranking.

use std::collections::HashMap;

use itertools::Itertools;

use common::{Ranking, Signal};

/// Accumulates in-degree and out-degree counts per node.
///
/// Applying a signal for a key materializes both of the key's counters, so
/// a node seen with only one signal type still reports the other count as
/// zero in the final ranking. Accumulation is commutative: any ordering of
/// the same signal multiset produces the same tally.
#[derive(Debug, Default)]
pub struct DegreeTally {
    in_degree: HashMap<String, u64>,
    out_degree: HashMap<String, u64>,
}

impl DegreeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one signal's contribution to the given node.
    pub fn apply(&mut self, key: &str, signal: Signal) {
        match signal {
            Signal::Out(n) => {
                let count = self.out_degree.entry(key.to_string()).or_insert(0);
                *count = count.saturating_add(n);
                self.in_degree.entry(key.to_string()).or_insert(0);
            }
            Signal::In(n) => {
                let count = self.in_degree.entry(key.to_string()).or_insert(0);
                *count = count.saturating_add(n);
                self.out_degree.entry(key.to_string()).or_insert(0);
            }
        }
    }

    /// Number of distinct nodes seen so far.
    pub fn len(&self) -> usize {
        // apply() keeps both maps over the same key set
        self.in_degree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_degree.is_empty()
    }

    /// Build the final ranking: total degree descending, ties broken by
    /// ascending node identifier, truncated to `top_n` records.
    pub fn into_rankings(self, top_n: usize) -> Vec<Ranking> {
        let DegreeTally {
            in_degree,
            mut out_degree,
        } = self;

        in_degree
            .into_iter()
            .map(|(country, in_count)| {
                let out_count = out_degree.remove(&country).unwrap_or(0);
                Ranking {
                    total_degree: in_count + out_count,
                    in_degree: in_count,
                    out_degree: out_count,
                    country,
                }
            })
            .sorted_by(|a, b| {
                b.total_degree
                    .cmp(&a.total_degree)
                    .then_with(|| a.country.cmp(&b.country))
            })
            .take(top_n)
            .collect()
    }
}
