//! Breadth-first and depth-first path finding.
//!
//! Both strategies share one loop and differ only in the frontier: a FIFO
//! queue for breadth-first search, a LIFO stack for depth-first search.
//! A vertex is marked visited when it is pushed, neighbours are pushed in
//! ascending id order, and the search stops as soon as `end` leaves the
//! frontier. The path is rebuilt by walking parent links back from `end`.
//!
//! An unreachable `end` is not an error; the finders return an empty
//! [`VertexPath`].

mod frontier;

use std::collections::VecDeque;

use tracing::{info, instrument};

use crate::error::{Result, check_vertex};
use crate::graph::{GraphView, VertexId};

use self::frontier::Frontier;

/// Order in which discovered vertices are expanded.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SearchStrategy {
    /// Expand vertices in discovery order; paths have the fewest edges.
    #[default]
    BreadthFirst,
    /// Expand the most recently discovered vertex first.
    DepthFirst,
}

/// A path returned by a search, plus how much of the graph was explored.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VertexPath {
    vertices: Vec<VertexId>,
    explored: usize,
}

impl VertexPath {
    /// Returns the vertices from `start` to `end` inclusive; empty when
    /// `end` was unreachable.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[VertexId] { &self.vertices }

    /// Consumes the path, returning its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<VertexId> {
        self.vertices
    }

    /// Returns `true` when no path was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges on the path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns how many vertices were taken off the frontier.
    #[must_use]
    #[rustfmt::skip]
    pub fn explored(&self) -> usize { self.explored }

    /// Sums the weights of the path's edges in `graph`.
    #[must_use]
    pub fn total_weight<G: GraphView>(&self, graph: &G) -> u64 {
        self.vertices
            .windows(2)
            .filter_map(|pair| graph.weight(pair[0], pair[1]))
            .map(u64::from)
            .sum()
    }
}

/// Finds a path from `start` to `end` with the given strategy.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] when either endpoint is
/// not a vertex of `graph`.
///
/// # Examples
/// ```
/// use graphlab_core::{Directedness, Graph, GraphStore, SearchStrategy, Weighting, find_path};
///
/// let mut graph = Graph::new(4, Directedness::Undirected, Weighting::Unweighted);
/// for (source, target) in [(0, 1), (1, 2), (2, 3)] {
///     graph.add_edge(source, target, 1)?;
/// }
/// let path = find_path(&graph, SearchStrategy::BreadthFirst, 0, 3)?;
/// assert_eq!(path.vertices(), &[0, 1, 2, 3]);
/// # Ok::<(), graphlab_core::GraphError>(())
/// ```
pub fn find_path<G: GraphView>(
    graph: &G,
    strategy: SearchStrategy,
    start: VertexId,
    end: VertexId,
) -> Result<VertexPath> {
    match strategy {
        SearchStrategy::BreadthFirst => bfs_path(graph, start, end),
        SearchStrategy::DepthFirst => dfs_path(graph, start, end),
    }
}

/// Finds a path with the fewest edges from `start` to `end`.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] when either endpoint is
/// not a vertex of `graph`.
#[instrument(name = "graph.bfs", err, skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs_path<G: GraphView>(graph: &G, start: VertexId, end: VertexId) -> Result<VertexPath> {
    search::<G, VecDeque<VertexId>>(graph, start, end)
}

/// Finds some path from `start` to `end`, expanding the most recently
/// discovered vertex first.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] when either endpoint is
/// not a vertex of `graph`.
#[instrument(name = "graph.dfs", err, skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dfs_path<G: GraphView>(graph: &G, start: VertexId, end: VertexId) -> Result<VertexPath> {
    search::<G, Vec<VertexId>>(graph, start, end)
}

fn search<G: GraphView, F: Frontier>(
    graph: &G,
    start: VertexId,
    end: VertexId,
) -> Result<VertexPath> {
    let vertex_count = graph.vertex_count();
    check_vertex(start, vertex_count)?;
    check_vertex(end, vertex_count)?;

    let mut visited = vec![false; vertex_count];
    let mut parent: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut frontier = F::seeded(start);
    visited[start] = true;
    let mut explored = 0;

    while let Some(vertex) = frontier.pop() {
        explored += 1;
        if vertex == end {
            let vertices = trace_back(&parent, end);
            info!(explored, length = vertices.len(), "path found");
            return Ok(VertexPath { vertices, explored });
        }
        for neighbor in graph.neighbors_of(vertex) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                parent[neighbor] = Some(vertex);
                frontier.push(neighbor);
            }
        }
    }

    info!(explored, "end unreachable from start");
    Ok(VertexPath {
        vertices: Vec::new(),
        explored,
    })
}

fn trace_back(parent: &[Option<VertexId>], end: VertexId) -> Vec<VertexId> {
    let mut vertices: Vec<VertexId> =
        std::iter::successors(Some(end), |&vertex| parent[vertex]).collect();
    vertices.reverse();
    vertices
}

#[cfg(test)]
mod tests;
