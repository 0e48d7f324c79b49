//! A MapReduce-compatible application that ranks the nodes of a directed
//! influence graph by degree centrality.
//!
//! The map stage turns edge records into per-node degree signals; the reduce
//! stage tallies the signals and emits the top nodes by total degree. Both
//! stages are single-threaded, single-pass stream processors driven by a
//! streaming harness (or by the `standalone` runner).

pub mod mapper;
pub mod reducer;
pub mod tally;

pub use mapper::{map_edge, run_mapper, MapperStats};
pub use reducer::{run_reducer, ReducerStats};
pub use tally::DegreeTally;

/// Number of ranking records the reducer emits by default.
pub const DEFAULT_TOP_N: usize = 10;
