//! Minimum spanning tree construction with Kruskal's algorithm.
//!
//! Edges are stable-sorted by weight, so equal-weight edges keep their
//! edge-list order, then scanned once against a fresh [`DisjointSet`]. An
//! edge joining two different sets is accepted; any other edge would close a
//! cycle and is rejected. Undirected graphs list each edge in both
//! directions, so the second copy of an accepted edge is always rejected.

mod union_find;

use tracing::{debug, info, instrument};

use crate::error::{GraphError, Result, check_vertex};
use crate::graph::{GraphView, WeightedEdge};

pub use self::union_find::DisjointSet;

/// Counters describing one Kruskal run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KruskalStats {
    /// Edges taken from the sorted list and tested against the union-find.
    pub considered: usize,
    /// Edges added to the forest.
    pub accepted: usize,
    /// Edges discarded because they would close a cycle.
    pub rejected: usize,
}

/// The output of a Kruskal run.
///
/// When the input graph is connected the forest is a minimum spanning tree
/// with `vertex_count - 1` edges.
///
/// # Examples
/// ```
/// use graphlab_core::{Directedness, Graph, GraphStore, Weighting, kruskal};
///
/// let mut graph = Graph::new(4, Directedness::Undirected, Weighting::Weighted);
/// for (source, target, weight) in [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10)] {
///     graph.add_edge(source, target, weight)?;
/// }
/// let forest = kruskal(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 6);
/// assert_eq!(forest.stats().considered, 8);
/// # Ok::<(), graphlab_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<WeightedEdge>,
    component_count: usize,
    stats: KruskalStats,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the scan counters.
    #[must_use]
    #[rustfmt::skip]
    pub fn stats(&self) -> KruskalStats { self.stats }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.weight())).sum()
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes a minimum spanning forest of an undirected graph.
///
/// # Errors
/// Returns [`GraphError::DirectedGraph`] when `graph` is directed.
#[instrument(
    name = "graph.kruskal",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count()),
)]
pub fn kruskal<G: GraphView>(graph: &G) -> Result<MinimumSpanningForest> {
    if graph.is_directed() {
        return Err(GraphError::DirectedGraph);
    }
    build_forest(graph.vertex_count(), graph.edge_list())
}

/// Computes a minimum spanning forest over a raw edge list.
///
/// Edges are treated as undirected and may be listed in either or both
/// directions. Self-loops are considered and rejected like any other
/// cycle-closing edge.
///
/// # Errors
/// Returns [`GraphError::VertexOutOfRange`] when an endpoint is not below
/// `vertex_count` and [`GraphError::NonPositiveWeight`] for a zero weight.
#[instrument(name = "graph.kruskal", err, skip(edges), fields(edges = edges.len()))]
pub fn kruskal_from_edges(
    vertex_count: usize,
    edges: &[WeightedEdge],
) -> Result<MinimumSpanningForest> {
    for edge in edges {
        check_vertex(edge.source(), vertex_count)?;
        check_vertex(edge.target(), vertex_count)?;
        if edge.weight() == 0 {
            return Err(GraphError::NonPositiveWeight {
                left: edge.source(),
                right: edge.target(),
            });
        }
    }
    build_forest(vertex_count, edges.to_vec())
}

fn build_forest(
    vertex_count: usize,
    mut edges: Vec<WeightedEdge>,
) -> Result<MinimumSpanningForest> {
    edges.sort_by_key(WeightedEdge::weight);

    let mut sets = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut stats = KruskalStats::default();

    for edge in edges {
        stats.considered += 1;
        if sets.union(edge.source(), edge.target())? {
            accepted.push(edge);
            stats.accepted += 1;
        } else {
            debug!(
                source = edge.source(),
                target = edge.target(),
                weight = edge.weight(),
                "rejected cycle-closing edge"
            );
            stats.rejected += 1;
        }
    }

    let forest = MinimumSpanningForest {
        edges: accepted,
        component_count: sets.component_count(),
        stats,
    };
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        components = forest.component_count,
        total_weight = forest.total_weight(),
        "kruskal complete"
    );
    Ok(forest)
}

#[cfg(test)]
mod property;
#[cfg(test)]
mod tests;
