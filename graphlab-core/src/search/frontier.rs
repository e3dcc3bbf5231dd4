//! Frontier containers driving the shared search loop.

use std::collections::VecDeque;

use crate::graph::VertexId;

/// Holds discovered vertices waiting to be expanded.
pub(super) trait Frontier {
    fn seeded(start: VertexId) -> Self;
    fn push(&mut self, vertex: VertexId);
    fn pop(&mut self) -> Option<VertexId>;
}

/// First in, first out: breadth-first order.
impl Frontier for VecDeque<VertexId> {
    fn seeded(start: VertexId) -> Self {
        VecDeque::from([start])
    }

    fn push(&mut self, vertex: VertexId) {
        self.push_back(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.pop_front()
    }
}

/// Last in, first out: depth-first order.
impl Frontier for Vec<VertexId> {
    fn seeded(start: VertexId) -> Self {
        vec![start]
    }

    fn push(&mut self, vertex: VertexId) {
        Vec::push(self, vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        Vec::pop(self)
    }
}
