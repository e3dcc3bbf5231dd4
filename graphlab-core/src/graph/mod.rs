//! Graph storage and the read views derived from it.
//!
//! A graph is a fixed set of vertices `0..n` joined by simple edges carrying
//! positive integer weights. Two stores implement the same contract:
//!
//! - [`Graph`] keeps an `n × n` [`AdjacencyMatrix`] and is the canonical
//!   representation.
//! - [`SparseGraph`] keeps one ordered neighbour map per vertex and suits
//!   large graphs with few edges.
//!
//! Algorithms only ever see the read-only [`GraphView`] trait; the generators
//! populate stores through [`GraphStore`]. Every other view (adjacency list,
//! incidence matrix, edge list) is recomputed from the store on demand and is
//! never mutated on its own.

mod incidence;
mod matrix;
mod sparse;
mod view;

use tracing::debug;

use crate::error::{GraphError, Result, check_vertex};

pub use self::incidence::IncidenceMatrix;
pub use self::matrix::{AdjacencyMatrix, Graph};
pub use self::sparse::SparseGraph;
pub use self::view::{AdjacencyList, GraphStore, GraphView};

/// Identifier of a vertex, in `0..vertex_count`.
pub type VertexId = usize;

/// Weight of an edge. Stored weights are always positive; `0` in an
/// adjacency matrix cell means "no edge".
pub type Weight = u32;

/// Whether edges have an orientation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Directedness {
    /// `(u, v)` and `(v, u)` are distinct edges.
    Directed,
    /// `(u, v)` and `(v, u)` denote the same edge.
    #[default]
    Undirected,
}

impl Directedness {
    /// Returns `true` for [`Directedness::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// Whether edge weights carry information.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Weighting {
    /// Edges keep the weight supplied on insertion.
    Weighted,
    /// Every edge has the implicit weight `1`.
    #[default]
    Unweighted,
}

impl Weighting {
    /// Returns `true` for [`Weighting::Weighted`].
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Weighted)
    }
}

/// A `(source, target, weight)` triple.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightedEdge {
    source: VertexId,
    target: VertexId,
    weight: Weight,
}

impl WeightedEdge {
    /// Creates an edge triple.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the target endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

impl From<(VertexId, VertexId, Weight)> for WeightedEdge {
    fn from((source, target, weight): (VertexId, VertexId, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

/// What [`GraphStore::add_edge`] did with a request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeInsertion {
    /// A new edge was stored.
    Inserted,
    /// The edge already existed; its weight was overwritten.
    Replaced {
        /// The weight held before the overwrite.
        previous: Weight,
    },
    /// `source == target`; the graph is unchanged.
    SelfLoopIgnored,
}

/// Validates an insertion request and returns the weight to store, or `None`
/// when the request is a self-loop that must be ignored.
///
/// Range errors win over the self-loop rule so that `add_edge(9, 9, _)` on a
/// three-vertex graph still reports the bad id.
pub(crate) fn admit_edge(
    vertex_count: usize,
    weighting: Weighting,
    source: VertexId,
    target: VertexId,
    weight: Weight,
) -> Result<Option<Weight>> {
    check_vertex(source, vertex_count)?;
    check_vertex(target, vertex_count)?;
    if source == target {
        debug!(vertex = source, "ignoring self-loop");
        return Ok(None);
    }
    match weighting {
        Weighting::Unweighted => Ok(Some(1)),
        Weighting::Weighted if weight == 0 => Err(GraphError::NonPositiveWeight {
            left: source,
            right: target,
        }),
        Weighting::Weighted => Ok(Some(weight)),
    }
}
