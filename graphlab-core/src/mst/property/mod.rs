//! Property-based tests for the Kruskal MST builder.
//!
//! Small random graphs are checked against an exhaustive enumeration of
//! every spanning forest, and larger ones against structural invariants
//! (acyclicity, edge count, component count, scan counters).

mod oracle;
mod strategies;
mod types;
