//! Matrix-backed graph store.

use super::{
    Directedness, EdgeInsertion, GraphStore, GraphView, VertexId, Weight, Weighting, admit_edge,
};
use crate::error::Result;

/// A square matrix of edge weights stored row-major; `0` marks "no edge".
///
/// # Examples
/// ```
/// use graphlab_core::{Directedness, Graph, GraphStore, GraphView, Weighting};
///
/// let mut graph = Graph::new(3, Directedness::Undirected, Weighting::Weighted);
/// graph.add_edge(0, 2, 7)?;
/// let matrix = graph.adjacency_matrix();
/// assert_eq!(matrix.get(2, 0), 7);
/// assert_eq!(matrix.row(1), &[0, 0, 0]);
/// assert!(matrix.is_symmetric());
/// # Ok::<(), graphlab_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Creates a zero-filled `size × size` matrix.
    #[must_use]
    pub fn zeroed(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub fn size(&self) -> usize { self.size }

    /// Returns the weight in cell `(row, column)`, or `0` outside the matrix.
    #[must_use]
    pub fn get(&self, row: VertexId, column: VertexId) -> Weight {
        if row >= self.size || column >= self.size {
            return 0;
        }
        self.cells[row * self.size + column]
    }

    /// Returns one row of the matrix; empty when `row` is out of range.
    #[must_use]
    pub fn row(&self, row: VertexId) -> &[Weight] {
        if row >= self.size {
            return &[];
        }
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterates over the rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        (0..self.size).map(|row| self.row(row))
    }

    /// Returns `true` when `cell(i, j) == cell(j, i)` for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|row| {
            (row + 1..self.size).all(|col| self.get(row, col) == self.get(col, row))
        })
    }

    /// Returns `true` when no diagonal cell holds an edge.
    #[must_use]
    pub fn has_empty_diagonal(&self) -> bool {
        (0..self.size).all(|vertex| self.get(vertex, vertex) == 0)
    }

    /// Copies the matrix into nested vectors, one per row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.rows().map(<[Weight]>::to_vec).collect()
    }

    pub(crate) fn set(&mut self, row: VertexId, column: VertexId, weight: Weight) -> Weight {
        let index = row * self.size + column;
        std::mem::replace(&mut self.cells[index], weight)
    }

    fn grow(&mut self) {
        let size = self.size + 1;
        let mut cells = vec![0; size * size];
        for (row, old) in self.cells.chunks(self.size.max(1)).enumerate().take(self.size) {
            cells[row * size..row * size + self.size].copy_from_slice(old);
        }
        self.size = size;
        self.cells = cells;
    }
}

/// Graph backed by an [`AdjacencyMatrix`].
///
/// Memory and neighbour scans are `O(V²)`, which keeps every algorithm
/// simple and is the representation the benchmarks are calibrated on.
///
/// # Examples
/// ```
/// use graphlab_core::{Directedness, EdgeInsertion, Graph, GraphStore, GraphView, Weighting};
///
/// let mut graph = Graph::new(4, Directedness::Undirected, Weighting::Weighted);
/// assert_eq!(graph.add_edge(0, 1, 5)?, EdgeInsertion::Inserted);
/// assert_eq!(graph.add_edge(1, 0, 2)?, EdgeInsertion::Replaced { previous: 5 });
/// assert_eq!(graph.add_edge(3, 3, 1)?, EdgeInsertion::SelfLoopIgnored);
/// assert_eq!(graph.weight(0, 1), Some(2));
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), graphlab_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    matrix: AdjacencyMatrix,
    directedness: Directedness,
    weighting: Weighting,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize, directedness: Directedness, weighting: Weighting) -> Self {
        Self {
            matrix: AdjacencyMatrix::zeroed(vertex_count),
            directedness,
            weighting,
        }
    }

    /// Returns the backing matrix without copying it.
    #[must_use]
    #[rustfmt::skip]
    pub fn matrix(&self) -> &AdjacencyMatrix { &self.matrix }
}

impl GraphView for Graph {
    fn vertex_count(&self) -> usize {
        self.matrix.size()
    }

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn weighting(&self) -> Weighting {
        self.weighting
    }

    fn weight(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        match self.matrix.get(source, target) {
            0 => None,
            weight => Some(weight),
        }
    }

    fn neighbors_of(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.matrix
            .row(vertex)
            .iter()
            .enumerate()
            .filter_map(|(neighbor, &weight)| (weight != 0).then_some(neighbor))
    }

    fn adjacency_matrix(&self) -> std::borrow::Cow<'_, AdjacencyMatrix> {
        std::borrow::Cow::Borrowed(&self.matrix)
    }
}

impl GraphStore for Graph {
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
        let previous = self.matrix.set(source, target, weight);
        if !self.directedness.is_directed() {
            self.matrix.set(target, source, weight);
        }
        Ok(match previous {
            0 => EdgeInsertion::Inserted,
            previous => EdgeInsertion::Replaced { previous },
        })
    }

    fn add_vertex(&mut self) -> VertexId {
        self.matrix.grow();
        self.matrix.size() - 1
    }
}
