//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion parameter label.

use std::fmt;

/// Size of a degree-bounded fixture.
#[derive(Clone, Copy, Debug)]
pub struct SweepBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
}

impl SweepBenchParams {
    /// Returns parameters with `edges_per_vertex` edges for every vertex.
    #[must_use]
    pub const fn with_density(vertex_count: usize, edges_per_vertex: usize) -> Self {
        Self {
            vertex_count,
            edge_count: vertex_count.saturating_mul(edges_per_vertex),
        }
    }
}

impl fmt::Display for SweepBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

/// Size of a connected weighted fixture.
#[derive(Clone, Copy, Debug)]
pub struct ConnectedBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Minimum neighbours per vertex.
    pub min_neighbors: usize,
}

impl fmt::Display for ConnectedBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.vertex_count, self.min_neighbors)
    }
}
