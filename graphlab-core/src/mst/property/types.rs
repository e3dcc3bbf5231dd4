//! Fixture types for MST property tests.

use crate::graph::{Directedness, Graph, GraphStore, Weighting};

/// How widely edge weights are spread.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightSpread {
    /// Weights drawn from `1..=3`, producing many ties.
    Narrow,
    /// Weights drawn from `1..=20`, matching the generator defaults.
    Wide,
}

impl WeightSpread {
    pub(super) fn max_weight(self) -> u32 {
        match self {
            Self::Narrow => 3,
            Self::Wide => 20,
        }
    }
}

/// A random undirected weighted graph with its logical edges.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Logical edges as `(smaller, larger, weight)`.
    pub edges: Vec<(usize, usize, u32)>,
    /// Weight spread used during generation.
    pub spread: WeightSpread,
}

impl MstFixture {
    pub(super) fn graph(&self) -> Graph {
        let mut graph = Graph::new(
            self.vertex_count,
            Directedness::Undirected,
            Weighting::Weighted,
        );
        for &(source, target, weight) in &self.edges {
            graph
                .add_edge(source, target, weight)
                .expect("fixture edges are simple and positive");
        }
        graph
    }
}
