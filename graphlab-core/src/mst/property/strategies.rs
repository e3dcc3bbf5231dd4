//! Strategy builders for MST property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightSpread};

/// Largest vertex count the exhaustive oracle is asked to handle.
pub(super) const ORACLE_MAX_VERTICES: usize = 6;

/// Generates graphs small enough for exhaustive spanning-forest enumeration.
pub(super) fn small_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    fixture_strategy(1, ORACLE_MAX_VERTICES)
}

/// Generates graphs of up to 40 vertices for structural checks.
pub(super) fn large_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    fixture_strategy(1, 40)
}

fn fixture_strategy(min_vertices: usize, max_vertices: usize) -> impl Strategy<Value = MstFixture> {
    (
        prop_oneof![Just(WeightSpread::Narrow), Just(WeightSpread::Wide)],
        any::<u64>(),
    )
        .prop_map(move |(spread, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let vertex_count = rng.gen_range(min_vertices..=max_vertices);
            generate_fixture(vertex_count, spread, &mut rng)
        })
}

/// Builds a fixture by keeping each vertex pair with a random probability.
pub(super) fn generate_fixture(
    vertex_count: usize,
    spread: WeightSpread,
    rng: &mut SmallRng,
) -> MstFixture {
    let edge_probability: f64 = rng.gen_range(0.2..=0.9);
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                edges.push((source, target, rng.gen_range(1..=spread.max_weight())));
            }
        }
    }
    MstFixture {
        vertex_count,
        edges,
        spread,
    }
}
