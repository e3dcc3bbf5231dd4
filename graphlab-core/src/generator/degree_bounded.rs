//! Degree-bounded random pair sampling.

use rand::Rng;
use tracing::{info, instrument, warn};

use super::RandomGraphGenerator;
use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, VertexId};

/// Running degree counts for the graph under construction.
///
/// Undirected graphs keep a single degree per vertex; both ceilings then
/// apply to it, because every undirected edge is both an in- and an
/// out-edge of each endpoint.
struct DegreeLedger {
    out: Vec<usize>,
    into: Vec<usize>,
    directed: bool,
    out_cap: usize,
    in_cap: usize,
}

impl DegreeLedger {
    fn new(vertex_count: usize, directed: bool, max_out: usize, max_in: usize) -> Self {
        let (out_cap, in_cap) = if directed {
            (max_out, max_in)
        } else {
            let cap = max_out.min(max_in);
            (cap, cap)
        };
        Self {
            out: vec![0; vertex_count],
            into: vec![0; vertex_count],
            directed,
            out_cap,
            in_cap,
        }
    }

    fn has_room(&self, source: VertexId, target: VertexId) -> bool {
        if self.directed {
            self.out[source] < self.out_cap && self.into[target] < self.in_cap
        } else {
            self.out[source] < self.out_cap && self.out[target] < self.out_cap
        }
    }

    fn record(&mut self, source: VertexId, target: VertexId) {
        self.out[source] += 1;
        if self.directed {
            self.into[target] += 1;
        } else {
            self.out[target] += 1;
        }
    }
}

impl RandomGraphGenerator {
    /// Builds a graph with exactly `edge_count` edges by drawing uniformly
    /// random ordered pairs `(u, v)` and keeping those that are new, not
    /// self-loops, and leave `out_degree(u)` and `in_degree(v)` within the
    /// configured ceilings.
    ///
    /// # Errors
    /// - [`GraphError::EdgeCountExceedsCapacity`] when `edge_count` exceeds
    ///   what a simple graph or the degree ceilings can hold.
    /// - [`GraphError::AttemptsExhausted`] when a configured draw budget
    ///   runs out first.
    /// - [`GraphError::GenerationStalled`] when the random placement paints
    ///   itself into a corner where no admissible pair remains.
    ///
    /// # Examples
    /// ```
    /// use graphlab_core::{GeneratorBuilder, Graph, GraphView};
    ///
    /// let mut generator = GeneratorBuilder::new().with_rng_seed(11).build()?;
    /// let graph: Graph = generator.degree_bounded(10, 12)?;
    /// assert_eq!(graph.edge_count(), 12);
    /// assert!((0..10).all(|v| graph.out_degree(v) <= 4));
    /// # Ok::<(), graphlab_core::GraphError>(())
    /// ```
    #[instrument(
        name = "generator.degree_bounded",
        err,
        skip(self),
        fields(directed = self.directedness.is_directed()),
    )]
    pub fn degree_bounded<G: GraphStore>(
        &mut self,
        vertex_count: usize,
        edge_count: usize,
    ) -> Result<G> {
        self.check_capacity(vertex_count, edge_count)?;

        let directedness = self.directedness;
        let weighting = self.weighting;
        let mut graph = G::with_vertices(vertex_count, directedness, weighting);
        let mut ledger = DegreeLedger::new(
            vertex_count,
            directedness.is_directed(),
            self.max_out_degree,
            self.max_in_degree,
        );
        let stall_window = vertex_count.saturating_mul(vertex_count).max(1);

        let mut placed = 0;
        let mut attempts = 0_usize;
        let mut misses = 0_usize;
        while placed < edge_count {
            if let Some(limit) = self.max_attempts
                && attempts == limit.get()
            {
                warn!(attempts, placed, requested = edge_count, "attempt budget exhausted");
                return Err(GraphError::AttemptsExhausted {
                    attempts,
                    placed,
                    requested: edge_count,
                });
            }
            attempts += 1;

            let source = self.rng.gen_range(0..vertex_count);
            let target = self.rng.gen_range(0..vertex_count);
            if source != target
                && !graph.has_edge(source, target)
                && ledger.has_room(source, target)
            {
                let weight = self.draw_weight(weighting);
                graph.add_edge(source, target, weight)?;
                ledger.record(source, target);
                placed += 1;
                misses = 0;
                continue;
            }

            misses += 1;
            if misses == stall_window {
                if !any_admissible_pair(&graph, &ledger, vertex_count) {
                    warn!(placed, requested = edge_count, "no admissible vertex pair remains");
                    return Err(GraphError::GenerationStalled {
                        placed,
                        requested: edge_count,
                    });
                }
                misses = 0;
            }
        }

        info!(vertices = vertex_count, edges = placed, attempts, "degree-bounded graph generated");
        Ok(graph)
    }

    fn check_capacity(&self, vertex_count: usize, edge_count: usize) -> Result<()> {
        let pairs = vertex_count.saturating_mul(vertex_count.saturating_sub(1));
        let (capacity, limited_by) = if self.directedness.is_directed() {
            tightest([
                (pairs, "simple directed graph"),
                (vertex_count.saturating_mul(self.max_out_degree), "max_out_degree"),
                (vertex_count.saturating_mul(self.max_in_degree), "max_in_degree"),
            ])
        } else {
            let cap = self.max_out_degree.min(self.max_in_degree);
            tightest([
                (pairs / 2, "simple undirected graph"),
                (vertex_count.saturating_mul(cap) / 2, "degree ceilings"),
            ])
        };
        if edge_count > capacity {
            return Err(GraphError::EdgeCountExceedsCapacity {
                requested: edge_count,
                capacity,
                limited_by,
            });
        }
        Ok(())
    }
}

fn tightest<const N: usize>(limits: [(usize, &'static str); N]) -> (usize, &'static str) {
    limits
        .into_iter()
        .fold((usize::MAX, "unbounded"), |best, limit| {
            if limit.0 < best.0 { limit } else { best }
        })
}

fn any_admissible_pair<G: GraphStore>(
    graph: &G,
    ledger: &DegreeLedger,
    vertex_count: usize,
) -> bool {
    (0..vertex_count).any(|source| {
        (0..vertex_count).any(|target| {
            source != target && !graph.has_edge(source, target) && ledger.has_room(source, target)
        })
    })
}
