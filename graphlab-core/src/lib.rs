//! In-memory graph engine.
//!
//! Provides matrix- and list-backed graph stores with derived read views,
//! degree-bounded and connectivity-guaranteed random generators, breadth-
//! and depth-first path finding, a union-find, and Kruskal's minimum
//! spanning tree.
//!
//! # Examples
//! ```
//! use graphlab_core::{Directedness, Graph, GraphStore, GraphView, Weighting, kruskal};
//!
//! let mut graph = Graph::new(4, Directedness::Undirected, Weighting::Weighted);
//! for (source, target, weight) in [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10)] {
//!     graph.add_edge(source, target, weight)?;
//! }
//! assert_eq!(graph.bfs_path(0, 2)?.vertices(), &[0, 1, 2]);
//! assert_eq!(kruskal(&graph)?.total_weight(), 6);
//! # Ok::<(), graphlab_core::GraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod graph;
mod mst;
mod search;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    generator::{
        DEFAULT_MAX_DEGREE, GeneratorBuilder, RandomGraphGenerator, WeightRange,
    },
    graph::{
        AdjacencyList, AdjacencyMatrix, Directedness, EdgeInsertion, Graph, GraphStore, GraphView,
        IncidenceMatrix, SparseGraph, VertexId, Weight, WeightedEdge, Weighting,
    },
    mst::{DisjointSet, KruskalStats, MinimumSpanningForest, kruskal, kruskal_from_edges},
    search::{SearchStrategy, VertexPath, bfs_path, dfs_path, find_path},
};
