//! Seeded graph fixtures shared by the benchmarks.

use graphlab_core::{Directedness, GeneratorBuilder, GraphStore, VertexId, Weighting};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchSetupError;
use crate::params::{ConnectedBenchParams, SweepBenchParams};

/// Generates a weighted degree-bounded graph with the default ceilings.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when the generator rejects `params`.
pub fn degree_bounded<G: GraphStore>(
    params: SweepBenchParams,
    directedness: Directedness,
    seed: u64,
) -> Result<G, BenchSetupError> {
    let mut generator = GeneratorBuilder::new()
        .with_directedness(directedness)
        .with_weighting(Weighting::Weighted)
        .with_rng_seed(seed)
        .build()?;
    Ok(generator.degree_bounded(params.vertex_count, params.edge_count)?)
}

/// Generates a connected weighted graph.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when `min_neighbors` cannot be met.
pub fn connected<G: GraphStore>(
    params: ConnectedBenchParams,
    seed: u64,
) -> Result<G, BenchSetupError> {
    let mut generator = GeneratorBuilder::new().with_rng_seed(seed).build()?;
    Ok(generator.connected(params.vertex_count, params.min_neighbors)?)
}

/// Draws `count` random `(start, end)` pairs over `vertex_count` vertices.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero.
pub fn endpoint_pairs(
    vertex_count: usize,
    count: usize,
    seed: u64,
) -> Result<Vec<(VertexId, VertexId)>, BenchSetupError> {
    if vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "endpoint vertex_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| (rng.gen_range(0..vertex_count), rng.gen_range(0..vertex_count)))
        .collect())
}
