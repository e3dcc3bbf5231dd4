//! Adjacency-list-backed graph store for large, sparse graphs.

use std::collections::BTreeMap;

use super::{
    Directedness, EdgeInsertion, GraphStore, GraphView, VertexId, Weight, Weighting, admit_edge,
};
use crate::error::Result;

/// Graph keeping one ordered neighbour map per vertex.
///
/// Memory is `O(V + E)` and a neighbour scan costs `O(deg(v))`. The read
/// views agree with [`super::Graph`] for the same sequence of insertions;
/// only the adjacency matrix has to be materialised on request.
///
/// # Examples
/// ```
/// use graphlab_core::{Directedness, GraphStore, GraphView, SparseGraph, Weighting};
///
/// let mut graph = SparseGraph::new(4, Directedness::Undirected, Weighting::Weighted);
/// graph.add_edge(3, 1, 4)?;
/// graph.add_edge(1, 0, 2)?;
/// assert_eq!(graph.neighbors_of(1).collect::<Vec<_>>(), vec![0, 3]);
/// assert_eq!(graph.adjacency_matrix().get(1, 3), 4);
/// # Ok::<(), graphlab_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SparseGraph {
    adjacency: Vec<BTreeMap<VertexId, Weight>>,
    directedness: Directedness,
    weighting: Weighting,
}

impl SparseGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize, directedness: Directedness, weighting: Weighting) -> Self {
        Self {
            adjacency: vec![BTreeMap::new(); vertex_count],
            directedness,
            weighting,
        }
    }
}

impl GraphView for SparseGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn weighting(&self) -> Weighting {
        self.weighting
    }

    fn weight(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        self.adjacency.get(source)?.get(&target).copied()
    }

    fn neighbors_of(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(BTreeMap::keys)
            .copied()
    }

    fn out_degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex).map_or(0, BTreeMap::len)
    }
}

impl GraphStore for SparseGraph {
    fn with_vertices(
        vertex_count: usize,
        directedness: Directedness,
        weighting: Weighting,
    ) -> Self {
        Self::new(vertex_count, directedness, weighting)
    }

    fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: Weight,
    ) -> Result<EdgeInsertion> {
        let Some(weight) = admit_edge(
            self.vertex_count(),
            self.weighting,
            source,
            target,
            weight,
        )?
        else {
            return Ok(EdgeInsertion::SelfLoopIgnored);
        };
        let previous = self.adjacency[source].insert(target, weight);
        if !self.directedness.is_directed() {
            self.adjacency[target].insert(source, weight);
        }
        Ok(previous.map_or(EdgeInsertion::Inserted, |previous| {
            EdgeInsertion::Replaced { previous }
        }))
    }

    fn add_vertex(&mut self) -> VertexId {
        self.adjacency.push(BTreeMap::new());
        self.adjacency.len() - 1
    }
}
