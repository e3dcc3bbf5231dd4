//! Error types for the graph engine.
//!
//! Every failure the engine reports is an invalid argument caught at the
//! offending call; no operation leaves a graph partially modified. A path
//! that does not exist is not an error: the path finders return an empty
//! [`crate::VertexPath`] instead.

use std::fmt;

use thiserror::Error;

use crate::graph::{VertexId, Weight};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An invalid argument supplied to one of the engine's operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex id was not smaller than the graph's vertex count.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A weighted edge was given a weight of zero.
    #[error("edge ({left}, {right}) must have a positive weight")]
    NonPositiveWeight {
        /// First endpoint of the rejected edge, as supplied.
        left: VertexId,
        /// Second endpoint of the rejected edge, as supplied.
        right: VertexId,
    },
    /// A weight range was empty or started at zero.
    #[error("weight range {min}..={max} must be non-empty and start above zero")]
    InvalidWeightRange {
        /// Lower bound supplied by the caller.
        min: Weight,
        /// Upper bound supplied by the caller.
        max: Weight,
    },
    /// A degree ceiling of zero was configured.
    #[error("{bound} must be at least 1")]
    InvalidDegreeBound {
        /// Name of the offending ceiling.
        bound: &'static str,
    },
    /// More edges were requested than the graph or its degree ceilings can hold.
    #[error("requested {requested} edges but at most {capacity} fit ({limited_by})")]
    EdgeCountExceedsCapacity {
        /// Number of edges requested.
        requested: usize,
        /// Largest edge count the constraints allow.
        capacity: usize,
        /// The constraint that produced `capacity`.
        limited_by: &'static str,
    },
    /// The per-vertex neighbour minimum cannot be met by a simple graph.
    #[error("min_neighbors {min_neighbors} exceeds {max_neighbors}, the most a vertex can have")]
    MinNeighborsTooLarge {
        /// Requested minimum neighbour count.
        min_neighbors: usize,
        /// `vertex_count - 1`, the largest possible neighbour count.
        max_neighbors: usize,
    },
    /// The generator ran out of its configured attempt budget.
    #[error("placed {placed} of {requested} edges before exhausting {attempts} attempts")]
    AttemptsExhausted {
        /// The configured attempt budget.
        attempts: usize,
        /// Edges placed before giving up.
        placed: usize,
        /// Edges requested.
        requested: usize,
    },
    /// No vertex pair can take another edge without breaking a degree
    /// ceiling, so the requested edge count can never be reached.
    #[error("placed {placed} of {requested} edges; no admissible vertex pair remains")]
    GenerationStalled {
        /// Edges placed before the generator stalled.
        placed: usize,
        /// Edges requested.
        requested: usize,
    },
    /// A spanning tree was requested for a directed graph.
    #[error("minimum spanning trees are only defined for undirected graphs")]
    DirectedGraph,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex id was not smaller than the graph's vertex count.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// A weighted edge was given a weight of zero.
        NonPositiveWeight => NonPositiveWeight { .. } => "GRAPH_NON_POSITIVE_WEIGHT",
        /// A weight range was empty or started at zero.
        InvalidWeightRange => InvalidWeightRange { .. } => "GRAPH_INVALID_WEIGHT_RANGE",
        /// A degree ceiling of zero was configured.
        InvalidDegreeBound => InvalidDegreeBound { .. } => "GRAPH_INVALID_DEGREE_BOUND",
        /// More edges were requested than the constraints allow.
        EdgeCountExceedsCapacity => EdgeCountExceedsCapacity { .. } =>
            "GRAPH_EDGE_COUNT_EXCEEDS_CAPACITY",
        /// The per-vertex neighbour minimum cannot be met.
        MinNeighborsTooLarge => MinNeighborsTooLarge { .. } => "GRAPH_MIN_NEIGHBORS_TOO_LARGE",
        /// The generator ran out of its configured attempt budget.
        AttemptsExhausted => AttemptsExhausted { .. } => "GRAPH_ATTEMPTS_EXHAUSTED",
        /// No admissible vertex pair remains for the generator.
        GenerationStalled => GenerationStalled { .. } => "GRAPH_GENERATION_STALLED",
        /// A spanning tree was requested for a directed graph.
        DirectedGraph => DirectedGraph => "GRAPH_DIRECTED_GRAPH",
    }
}

/// Convenient alias for results returned by the engine.
pub type Result<T> = core::result::Result<T, GraphError>;

pub(crate) fn check_vertex(vertex: VertexId, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}
