//! Vertex × edge incidence view.

use super::{GraphView, VertexId};

/// A `vertex_count × edge_count` matrix marking the endpoints of each edge.
///
/// Undirected edges mark `+1` at both endpoints and contribute one column per
/// logical edge. Directed edges mark `+1` at the source and `-1` at the
/// target. Columns follow the row-major scan of the adjacency matrix.
///
/// # Examples
/// ```
/// use graphlab_core::{Directedness, Graph, GraphStore, GraphView, Weighting};
///
/// let mut graph = Graph::new(3, Directedness::Directed, Weighting::Unweighted);
/// graph.add_edge(2, 0, 1)?;
/// let incidence = graph.incidence_matrix();
/// assert_eq!(incidence.edge_count(), 1);
/// assert_eq!(incidence.column(0), vec![-1, 0, 1]);
/// assert_eq!(incidence.endpoints(0), Some((2, 0)));
/// # Ok::<(), graphlab_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IncidenceMatrix {
    vertex_count: usize,
    endpoints: Vec<(VertexId, VertexId)>,
    directed: bool,
}

impl IncidenceMatrix {
    pub(crate) fn from_graph<G: GraphView>(graph: &G) -> Self {
        let directed = graph.is_directed();
        let endpoints = (0..graph.vertex_count())
            .flat_map(move |source| {
                graph
                    .neighbors_of(source)
                    .filter(move |&target| directed || source < target)
                    .map(move |target| (source, target))
            })
            .collect();
        Self {
            vertex_count: graph.vertex_count(),
            endpoints,
            directed,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of columns.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns the `(source, target)` pair of column `edge`.
    #[must_use]
    pub fn endpoints(&self, edge: usize) -> Option<(VertexId, VertexId)> {
        self.endpoints.get(edge).copied()
    }

    /// Returns cell `(vertex, edge)`: `1`, `-1` or `0`.
    #[must_use]
    pub fn get(&self, vertex: VertexId, edge: usize) -> i8 {
        match self.endpoints(edge) {
            Some((source, _)) if source == vertex => 1,
            Some((_, target)) if target == vertex => {
                if self.directed { -1 } else { 1 }
            }
            _ => 0,
        }
    }

    /// Materialises column `edge`; all zeros when `edge` is out of range.
    #[must_use]
    pub fn column(&self, edge: usize) -> Vec<i8> {
        (0..self.vertex_count)
            .map(|vertex| self.get(vertex, edge))
            .collect()
    }

    /// Materialises row `vertex`, one cell per edge.
    #[must_use]
    pub fn row(&self, vertex: VertexId) -> Vec<i8> {
        (0..self.edge_count())
            .map(|edge| self.get(vertex, edge))
            .collect()
    }

    /// Materialises the whole matrix, one row per vertex.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        (0..self.vertex_count).map(|vertex| self.row(vertex)).collect()
    }
}
