//! Benchmark support crate for graphlab.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks for path search, Kruskal, and random generation.

pub mod error;
pub mod fixtures;
pub mod params;
