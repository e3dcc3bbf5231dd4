//! Command-line interface orchestration for the graphlab harness.
//!
//! `traverse` generates a sweep of growing degree-bounded graphs and times
//! BFS against DFS between random endpoints; `mst` generates connected
//! weighted graphs of several sizes and times Kruskal on each.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, MstCommand, MstReport, MstSweep, MstTrial,
    StoreKind, TimedPath, TraversalReport, TraversalRound, TraverseCommand, open_output,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
