//! Connectivity-guaranteed weighted generation.

use rand::Rng;
use tracing::{info, instrument};

use super::RandomGraphGenerator;
use crate::error::{GraphError, Result};
use crate::graph::{Directedness, GraphStore, Weighting};

impl RandomGraphGenerator {
    /// Builds a connected, undirected, weighted graph.
    ///
    /// A Hamiltonian path `0 - 1 - ... - (n - 1)` is laid first. Each vertex
    /// in turn then picks a target neighbour count in
    /// `min_neighbors..=vertex_count - 1` and gains random edges until it
    /// reaches that count. Weights come from the configured range; the degree
    /// ceilings, directedness and weighting settings do not apply here.
    ///
    /// # Errors
    /// Returns [`GraphError::MinNeighborsTooLarge`] when `min_neighbors`
    /// exceeds `vertex_count - 1`.
    ///
    /// # Examples
    /// ```
    /// use graphlab_core::{GeneratorBuilder, GraphView, SparseGraph};
    ///
    /// let mut generator = GeneratorBuilder::new().with_rng_seed(3).build()?;
    /// let graph: SparseGraph = generator.connected(12, 3)?;
    /// assert!((0..12).all(|v| graph.out_degree(v) >= 3));
    /// assert_eq!(graph.bfs_path(0, 11)?.vertices().first(), Some(&0));
    /// # Ok::<(), graphlab_core::GraphError>(())
    /// ```
    #[instrument(name = "generator.connected", err, skip(self))]
    pub fn connected<G: GraphStore>(
        &mut self,
        vertex_count: usize,
        min_neighbors: usize,
    ) -> Result<G> {
        let max_neighbors = vertex_count.saturating_sub(1);
        if min_neighbors > max_neighbors {
            return Err(GraphError::MinNeighborsTooLarge {
                min_neighbors,
                max_neighbors,
            });
        }

        let mut graph =
            G::with_vertices(vertex_count, Directedness::Undirected, Weighting::Weighted);
        for vertex in 1..vertex_count {
            let weight = self.draw_weight(Weighting::Weighted);
            graph.add_edge(vertex - 1, vertex, weight)?;
        }

        for vertex in 0..vertex_count {
            let wanted = self.rng.gen_range(min_neighbors..=max_neighbors);
            while graph.out_degree(vertex) < wanted {
                let candidate = self.rng.gen_range(0..vertex_count);
                if candidate != vertex && !graph.has_edge(vertex, candidate) {
                    let weight = self.draw_weight(Weighting::Weighted);
                    graph.add_edge(vertex, candidate, weight)?;
                }
            }
        }

        info!(
            vertices = vertex_count,
            edges = graph.edge_count(),
            "connected graph generated"
        );
        Ok(graph)
    }
}
