//! Unit tests for the Kruskal MST builder.

use rstest::rstest;

use crate::error::GraphError;
use crate::graph::{Directedness, Graph, GraphStore, SparseGraph, WeightedEdge, Weighting};

use super::{KruskalStats, kruskal, kruskal_from_edges};

fn weighted<G: GraphStore>(vertex_count: usize, edges: &[(usize, usize, u32)]) -> G {
    let mut graph = G::with_vertices(vertex_count, Directedness::Undirected, Weighting::Weighted);
    for &(source, target, weight) in edges {
        graph
            .add_edge(source, target, weight)
            .expect("fixture edges must be valid");
    }
    graph
}

fn edges(raw: &[(usize, usize, u32)]) -> Vec<WeightedEdge> {
    raw.iter().copied().map(WeightedEdge::from).collect()
}

fn check_forest_invariants(vertex_count: usize, edges: &[WeightedEdge]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();

    fn find(parent: &mut [usize], vertex: usize) -> usize {
        let mut current = vertex;
        while parent[current] != current {
            parent[current] = parent[parent[current]];
            current = parent[current];
        }
        current
    }

    for edge in edges {
        assert!(edge.source() < vertex_count);
        assert!(edge.target() < vertex_count);
        assert_ne!(edge.source(), edge.target());
        let left = find(&mut parent, edge.source());
        let right = find(&mut parent, edge.target());
        assert_ne!(left, right, "forest edges must not close a cycle");
        parent[right] = left;
    }

    let mut roots = (0..vertex_count)
        .map(|vertex| find(&mut parent, vertex))
        .collect::<Vec<_>>();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

const SQUARE: &[(usize, usize, u32)] = &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10)];

#[test]
fn square_with_heavy_chord_keeps_the_light_path() {
    let graph: Graph = weighted(4, SQUARE);
    let forest = kruskal(&graph).expect("undirected graph must succeed");

    assert_eq!(forest.edges(), edges(&[(0, 1, 1), (1, 2, 2), (2, 3, 3)]).as_slice());
    assert_eq!(forest.total_weight(), 6);
    assert!(forest.is_tree());
    assert_eq!(
        forest.stats(),
        KruskalStats {
            considered: 8,
            accepted: 3,
            rejected: 5,
        }
    );
}

#[test]
fn matrix_and_sparse_stores_give_the_same_forest() {
    let dense: Graph = weighted(4, SQUARE);
    let sparse: SparseGraph = weighted(4, SQUARE);
    assert_eq!(
        kruskal(&dense).expect("dense"),
        kruskal(&sparse).expect("sparse")
    );
}

#[test]
fn directed_graphs_are_rejected() {
    let graph = Graph::new(2, Directedness::Directed, Weighting::Weighted);
    assert_eq!(kruskal(&graph), Err(GraphError::DirectedGraph));
}

#[rstest]
#[case::no_vertices(0, 0)]
#[case::isolated_vertices(4, 4)]
fn edgeless_graphs_give_empty_forests(#[case] vertex_count: usize, #[case] components: usize) {
    let graph: Graph = weighted(vertex_count, &[]);
    let forest = kruskal(&graph).expect("edgeless graph must succeed");
    assert!(forest.edges().is_empty());
    assert_eq!(forest.component_count(), components);
    assert_eq!(forest.stats(), KruskalStats::default());
}

#[test]
fn disconnected_graph_gives_a_spanning_forest() {
    let graph: Graph = weighted(5, &[(0, 1, 1), (2, 3, 2)]);
    let forest = kruskal(&graph).expect("forest must succeed");

    let components = check_forest_invariants(5, forest.edges());
    assert_eq!(forest.component_count(), components);
    assert_eq!(components, 3);
    assert_eq!(forest.edges().len(), 5 - components);
    assert!(!forest.is_tree());
}

#[test]
fn equal_weights_resolve_by_edge_list_order() {
    let forest = kruskal_from_edges(3, &edges(&[(1, 2, 5), (0, 2, 5), (0, 1, 5)]))
        .expect("valid edges");
    assert_eq!(forest.edges(), edges(&[(1, 2, 5), (0, 2, 5)]).as_slice());
    assert_eq!(forest.stats().rejected, 1);
}

#[test]
fn many_equal_weights_never_form_cycles() {
    let graph: Graph = weighted(
        6,
        &[
            (0, 1, 1),
            (0, 2, 1),
            (0, 3, 1),
            (0, 4, 1),
            (0, 5, 1),
            (1, 2, 1),
            (2, 3, 1),
            (3, 4, 1),
            (4, 5, 1),
            (1, 5, 1),
        ],
    );
    let forest = kruskal(&graph).expect("graph must succeed");
    assert_eq!(check_forest_invariants(6, forest.edges()), 1);
    assert_eq!(forest.edges().len(), 5);
    assert_eq!(forest.total_weight(), 5);
}

#[rstest]
#[case::source_out_of_range(&[(3, 0, 1)], GraphError::VertexOutOfRange { vertex: 3, vertex_count: 3 })]
#[case::target_out_of_range(&[(0, 1, 1), (1, 5, 1)], GraphError::VertexOutOfRange { vertex: 5, vertex_count: 3 })]
#[case::zero_weight(&[(0, 1, 0)], GraphError::NonPositiveWeight { left: 0, right: 1 })]
fn raw_edges_are_validated(#[case] raw: &[(usize, usize, u32)], #[case] expected: GraphError) {
    assert_eq!(kruskal_from_edges(3, &edges(raw)), Err(expected));
}

#[test]
fn raw_self_loops_are_rejected_as_cycles() {
    let forest = kruskal_from_edges(2, &edges(&[(0, 0, 1), (0, 1, 2)])).expect("valid edges");
    assert_eq!(forest.edges(), edges(&[(0, 1, 2)]).as_slice());
    assert_eq!(
        forest.stats(),
        KruskalStats {
            considered: 2,
            accepted: 1,
            rejected: 1,
        }
    );
}
