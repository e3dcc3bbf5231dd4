//! Random graph generation under degree and connectivity constraints.
//!
//! [`GeneratorBuilder`] validates a configuration and produces a
//! [`RandomGraphGenerator`], which owns a seeded [`SmallRng`] and offers two
//! policies:
//!
//! - [`RandomGraphGenerator::degree_bounded`] draws random vertex pairs until
//!   the requested edge count is reached without exceeding the out- and
//!   in-degree ceilings.
//! - [`RandomGraphGenerator::connected`] lays a weighted Hamiltonian path and
//!   then tops every vertex up to a random neighbour count.
//!
//! Both are generic over [`crate::GraphStore`], so the same seed yields the
//! same graph in either store.

mod connected;
mod degree_bounded;

use std::num::NonZeroUsize;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{GraphError, Result};
use crate::graph::{Directedness, Weight, Weighting};

/// Default ceiling for both the out-degree and the in-degree.
pub const DEFAULT_MAX_DEGREE: usize = 4;

/// Inclusive range from which random edge weights are drawn.
///
/// # Examples
/// ```
/// use graphlab_core::WeightRange;
///
/// let range = WeightRange::new(2, 9)?;
/// assert_eq!((range.min(), range.max()), (2, 9));
/// assert!(WeightRange::new(0, 9).is_err());
/// assert!(WeightRange::new(5, 4).is_err());
/// # Ok::<(), graphlab_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightRange {
    min: Weight,
    max: Weight,
}

impl WeightRange {
    /// Creates the range `min..=max`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeightRange`] when `min` is zero or
    /// greater than `max`.
    pub fn new(min: Weight, max: Weight) -> Result<Self> {
        if min == 0 || min > max {
            return Err(GraphError::InvalidWeightRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the smallest weight that can be drawn.
    #[must_use]
    #[rustfmt::skip]
    pub fn min(&self) -> Weight { self.min }

    /// Returns the largest weight that can be drawn.
    #[must_use]
    #[rustfmt::skip]
    pub fn max(&self) -> Weight { self.max }

    fn sample(self, rng: &mut impl Rng) -> Weight {
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self { min: 1, max: 20 }
    }
}

/// Configures and constructs [`RandomGraphGenerator`] instances.
///
/// # Examples
/// ```
/// use graphlab_core::{Directedness, GeneratorBuilder};
///
/// let generator = GeneratorBuilder::new()
///     .with_max_out_degree(3)
///     .with_directedness(Directedness::Directed)
///     .with_rng_seed(7)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.max_out_degree(), 3);
/// assert_eq!(generator.max_in_degree(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorBuilder {
    max_out_degree: usize,
    max_in_degree: usize,
    directedness: Directedness,
    weighting: Weighting,
    weight_bounds: (Weight, Weight),
    seed: Option<u64>,
    max_attempts: Option<NonZeroUsize>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        let weights = WeightRange::default();
        Self {
            max_out_degree: DEFAULT_MAX_DEGREE,
            max_in_degree: DEFAULT_MAX_DEGREE,
            directedness: Directedness::Undirected,
            weighting: Weighting::Unweighted,
            weight_bounds: (weights.min, weights.max),
            seed: None,
            max_attempts: None,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of edges leaving any vertex.
    #[must_use]
    pub fn with_max_out_degree(mut self, bound: usize) -> Self {
        self.max_out_degree = bound;
        self
    }

    /// Caps the number of edges entering any vertex.
    #[must_use]
    pub fn with_max_in_degree(mut self, bound: usize) -> Self {
        self.max_in_degree = bound;
        self
    }

    /// Selects directed or undirected output for [`RandomGraphGenerator::degree_bounded`].
    #[must_use]
    pub fn with_directedness(mut self, directedness: Directedness) -> Self {
        self.directedness = directedness;
        self
    }

    /// Selects weighted or unweighted output for [`RandomGraphGenerator::degree_bounded`].
    #[must_use]
    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Draws random weights from `min..=max`.
    #[must_use]
    pub fn with_weight_range(mut self, min: Weight, max: Weight) -> Self {
        self.weight_bounds = (min, max);
        self
    }

    /// Seeds the random number generator for reproducible output.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Bounds the number of random pair draws per degree-bounded graph.
    ///
    /// Without a bound the generator keeps drawing until it either succeeds
    /// or proves that no admissible pair remains.
    #[must_use]
    pub fn with_max_attempts(mut self, limit: NonZeroUsize) -> Self {
        self.max_attempts = Some(limit);
        self
    }

    /// Validates the configuration and constructs a generator.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidDegreeBound`] for a zero degree ceiling
    /// and [`GraphError::InvalidWeightRange`] for an unusable weight range.
    pub fn build(self) -> Result<RandomGraphGenerator> {
        if self.max_out_degree == 0 {
            return Err(GraphError::InvalidDegreeBound {
                bound: "max_out_degree",
            });
        }
        if self.max_in_degree == 0 {
            return Err(GraphError::InvalidDegreeBound {
                bound: "max_in_degree",
            });
        }
        let (min, max) = self.weight_bounds;
        let weights = WeightRange::new(min, max)?;
        let rng = self
            .seed
            .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);

        Ok(RandomGraphGenerator {
            max_out_degree: self.max_out_degree,
            max_in_degree: self.max_in_degree,
            directedness: self.directedness,
            weighting: self.weighting,
            weights,
            max_attempts: self.max_attempts,
            rng,
        })
    }
}

/// Seeded source of random graphs.
///
/// Successive calls continue the same random stream, so a seeded generator
/// reproduces a whole sweep of graphs, not just the first.
#[derive(Clone, Debug)]
pub struct RandomGraphGenerator {
    max_out_degree: usize,
    max_in_degree: usize,
    directedness: Directedness,
    weighting: Weighting,
    weights: WeightRange,
    max_attempts: Option<NonZeroUsize>,
    rng: SmallRng,
}

impl RandomGraphGenerator {
    /// Returns the out-degree ceiling.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_out_degree(&self) -> usize { self.max_out_degree }

    /// Returns the in-degree ceiling.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_in_degree(&self) -> usize { self.max_in_degree }

    /// Returns the orientation of degree-bounded output.
    #[must_use]
    #[rustfmt::skip]
    pub fn directedness(&self) -> Directedness { self.directedness }

    /// Returns the weighting of degree-bounded output.
    #[must_use]
    #[rustfmt::skip]
    pub fn weighting(&self) -> Weighting { self.weighting }

    /// Returns the range random weights are drawn from.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight_range(&self) -> WeightRange { self.weights }

    /// Returns the per-graph draw budget, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_attempts(&self) -> Option<NonZeroUsize> { self.max_attempts }

    fn draw_weight(&mut self, weighting: Weighting) -> Weight {
        match weighting {
            Weighting::Weighted => self.weights.sample(&mut self.rng),
            Weighting::Unweighted => 1,
        }
    }
}
