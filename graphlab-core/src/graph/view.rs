//! Read and write contracts shared by the graph stores.

use std::borrow::Cow;

use super::{
    AdjacencyMatrix, Directedness, EdgeInsertion, IncidenceMatrix, VertexId, Weight,
    WeightedEdge, Weighting,
};
use crate::error::Result;
use crate::search::{self, VertexPath};

/// Read-only access to a graph.
///
/// Implementors provide vertex count, orientation, weight lookup and an
/// ascending neighbour scan; every derived view is built from those.
pub trait GraphView {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns whether edges are oriented.
    fn directedness(&self) -> Directedness;

    /// Returns whether edges carry explicit weights.
    fn weighting(&self) -> Weighting;

    /// Returns the weight of edge `(source, target)`, or `None` when the edge
    /// is absent or either id is out of range.
    fn weight(&self, source: VertexId, target: VertexId) -> Option<Weight>;

    /// Iterates over the out-neighbours of `vertex` in ascending id order.
    /// Yields nothing for an out-of-range id.
    fn neighbors_of(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_;

    /// Returns the adjacency matrix, borrowed when the store already keeps one.
    fn adjacency_matrix(&self) -> Cow<'_, AdjacencyMatrix> {
        let mut matrix = AdjacencyMatrix::zeroed(self.vertex_count());
        for edge in self.edge_list() {
            matrix.set(edge.source(), edge.target(), edge.weight());
        }
        Cow::Owned(matrix)
    }

    /// Returns `true` when edges are oriented.
    fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    /// Returns `true` when edge `(source, target)` exists.
    fn has_edge(&self, source: VertexId, target: VertexId) -> bool {
        self.weight(source, target).is_some()
    }

    /// Returns the number of edges leaving `vertex`.
    ///
    /// For undirected graphs this is the vertex degree.
    fn out_degree(&self, vertex: VertexId) -> usize {
        self.neighbors_of(vertex).count()
    }

    /// Returns the number of edges entering `vertex`.
    ///
    /// For undirected graphs this equals [`GraphView::out_degree`].
    fn in_degree(&self, vertex: VertexId) -> usize {
        if !self.is_directed() {
            return self.out_degree(vertex);
        }
        (0..self.vertex_count())
            .filter(|&source| self.has_edge(source, vertex))
            .count()
    }

    /// Returns the number of logical edges; an undirected edge counts once.
    fn edge_count(&self) -> usize {
        let stored: usize = (0..self.vertex_count())
            .map(|vertex| self.out_degree(vertex))
            .sum();
        if self.is_directed() { stored } else { stored / 2 }
    }

    /// Returns a lazy per-vertex neighbour view.
    fn adjacency_list(&self) -> AdjacencyList<'_, Self>
    where
        Self: Sized,
    {
        AdjacencyList { graph: self }
    }

    /// Builds the vertex × edge incidence matrix.
    fn incidence_matrix(&self) -> IncidenceMatrix
    where
        Self: Sized,
    {
        IncidenceMatrix::from_graph(self)
    }

    /// Lists every stored edge as `(row, column, weight)` in row-major order.
    ///
    /// Undirected edges appear once per direction, which is the input shape
    /// [`crate::kruskal`] expects.
    fn edge_list(&self) -> Vec<WeightedEdge> {
        (0..self.vertex_count())
            .flat_map(move |source| {
                self.neighbors_of(source).filter_map(move |target| {
                    self.weight(source, target)
                        .map(|weight| WeightedEdge::new(source, target, weight))
                })
            })
            .collect()
    }

    /// Finds a path with the fewest edges from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] when either endpoint is
    /// not a vertex of the graph.
    fn bfs_path(&self, start: VertexId, end: VertexId) -> Result<VertexPath>
    where
        Self: Sized,
    {
        search::bfs_path(self, start, end)
    }

    /// Finds some path from `start` to `end` by depth-first search.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] when either endpoint is
    /// not a vertex of the graph.
    fn dfs_path(&self, start: VertexId, end: VertexId) -> Result<VertexPath>
    where
        Self: Sized,
    {
        search::dfs_path(self, start, end)
    }
}

/// A graph that can be built up edge by edge.
pub trait GraphStore: GraphView + Sized {
    /// Creates a store with `vertex_count` isolated vertices.
    fn with_vertices(vertex_count: usize, directedness: Directedness, weighting: Weighting)
    -> Self;

    /// Stores edge `(source, target)`; undirected stores also store
    /// `(target, source)`.
    ///
    /// Self-loops are ignored and re-adding an existing edge overwrites its
    /// weight. Unweighted stores keep the implicit weight `1` whatever
    /// `weight` says. A failed call leaves the store unchanged.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] for an unknown endpoint
    /// and [`crate::GraphError::NonPositiveWeight`] when a weighted store is
    /// given a zero weight.
    fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: Weight,
    ) -> Result<EdgeInsertion>;

    /// Appends an isolated vertex and returns its id.
    fn add_vertex(&mut self) -> VertexId;
}

/// Lazy, restartable adjacency-list view over a [`GraphView`].
///
/// Nothing is cached: every call rescans the underlying store, so two scans
/// without an intervening mutation always agree.
///
/// # Examples
/// ```
/// use graphlab_core::{Directedness, Graph, GraphStore, GraphView, Weighting};
///
/// let mut graph = Graph::new(3, Directedness::Directed, Weighting::Unweighted);
/// graph.add_edge(0, 2, 1)?;
/// graph.add_edge(0, 1, 1)?;
/// let list = graph.adjacency_list();
/// assert_eq!(list.to_vec(), vec![vec![1, 2], vec![], vec![]]);
/// # Ok::<(), graphlab_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct AdjacencyList<'a, G> {
    graph: &'a G,
}

impl<G> Clone for AdjacencyList<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for AdjacencyList<'_, G> {}

impl<'a, G: GraphView> AdjacencyList<'a, G> {
    /// Returns the number of vertices listed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the neighbours of `vertex` in ascending order.
    pub fn neighbors_of(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + 'a {
        self.graph.neighbors_of(vertex)
    }

    /// Iterates over every vertex's neighbour sequence in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = impl Iterator<Item = VertexId> + 'a> + 'a {
        let graph = self.graph;
        (0..graph.vertex_count()).map(move |vertex| graph.neighbors_of(vertex))
    }

    /// Collects the view into one vector of neighbours per vertex.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Vec<VertexId>> {
        self.iter().map(Iterator::collect).collect()
    }
}
