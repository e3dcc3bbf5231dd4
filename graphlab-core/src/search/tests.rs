//! Unit and property tests for the path finders.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

use crate::error::GraphError;
use crate::graph::{Directedness, Graph, GraphStore, GraphView, SparseGraph, Weighting};
use crate::test_utils::suite_proptest_config;

use super::{SearchStrategy, VertexPath, bfs_path, dfs_path, find_path};

fn graph_from<G: GraphStore>(
    vertex_count: usize,
    directedness: Directedness,
    edges: &[(usize, usize, u32)],
) -> G {
    let mut graph = G::with_vertices(vertex_count, directedness, Weighting::Weighted);
    for &(source, target, weight) in edges {
        graph
            .add_edge(source, target, weight)
            .expect("fixture edges must be valid");
    }
    graph
}

fn path_graph() -> Graph {
    graph_from(4, Directedness::Undirected, &[(0, 1, 1), (1, 2, 2), (2, 3, 3)])
}

fn assert_valid_path<G: GraphView>(graph: &G, path: &VertexPath, start: usize, end: usize) {
    let vertices = path.vertices();
    assert_eq!(vertices.first(), Some(&start));
    assert_eq!(vertices.last(), Some(&end));
    for pair in vertices.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "{pair:?} is not an edge");
    }
}

#[rstest]
#[case::breadth_first(SearchStrategy::BreadthFirst)]
#[case::depth_first(SearchStrategy::DepthFirst)]
fn follows_the_only_path(#[case] strategy: SearchStrategy) {
    let graph = path_graph();
    let path = find_path(&graph, strategy, 0, 3).expect("vertices are in range");
    assert_eq!(path.vertices(), &[0, 1, 2, 3]);
    assert_eq!(path.edge_count(), 3);
    assert_eq!(path.total_weight(&graph), 6);
}

#[test]
fn heavy_chord_gives_a_one_edge_path() {
    let graph: Graph = graph_from(
        4,
        Directedness::Undirected,
        &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10)],
    );
    assert_eq!(bfs_path(&graph, 0, 3).expect("bfs").vertices(), &[0, 3]);
    assert_eq!(dfs_path(&graph, 0, 3).expect("dfs").vertices(), &[0, 3]);
}

#[rstest]
#[case::breadth_first(SearchStrategy::BreadthFirst)]
#[case::depth_first(SearchStrategy::DepthFirst)]
fn isolated_vertex_is_unreachable(#[case] strategy: SearchStrategy) {
    let mut graph = path_graph();
    let isolated = graph.add_vertex();
    let path = find_path(&graph, strategy, 0, isolated).expect("vertices are in range");
    assert!(path.is_empty());
    assert_eq!(path.edge_count(), 0);
    assert_eq!(path.explored(), 4);
}

#[rstest]
#[case::breadth_first(SearchStrategy::BreadthFirst)]
#[case::depth_first(SearchStrategy::DepthFirst)]
fn start_equal_to_end_is_a_single_vertex(#[case] strategy: SearchStrategy) {
    let path = find_path(&path_graph(), strategy, 2, 2).expect("vertices are in range");
    assert_eq!(path.vertices(), &[2]);
    assert_eq!(path.explored(), 1);
}

#[rstest]
#[case::start(4, 0, 4)]
#[case::end(0, 9, 9)]
fn out_of_range_endpoints_are_rejected(
    #[case] start: usize,
    #[case] end: usize,
    #[case] offending: usize,
) {
    let expected = Err(GraphError::VertexOutOfRange {
        vertex: offending,
        vertex_count: 4,
    });
    assert_eq!(bfs_path(&path_graph(), start, end), expected);
    assert_eq!(dfs_path(&path_graph(), start, end), expected);
}

#[test]
fn directed_edges_are_followed_one_way() {
    let graph: SparseGraph = graph_from(3, Directedness::Directed, &[(0, 1, 1), (1, 2, 1)]);
    assert_eq!(graph.bfs_path(0, 2).expect("bfs").vertices(), &[0, 1, 2]);
    assert!(graph.bfs_path(2, 0).expect("bfs").is_empty());
    assert!(graph.dfs_path(2, 0).expect("dfs").is_empty());
}

#[test]
fn depth_first_expands_the_highest_neighbour_first() {
    let graph: Graph = graph_from(
        5,
        Directedness::Undirected,
        &[(0, 1, 1), (0, 2, 1), (1, 4, 1), (2, 3, 1), (3, 4, 1)],
    );
    assert_eq!(bfs_path(&graph, 0, 4).expect("bfs").vertices(), &[0, 1, 4]);
    assert_eq!(dfs_path(&graph, 0, 4).expect("dfs").vertices(), &[0, 2, 3, 4]);
}

fn random_graph(seed: u64, directedness: Directedness) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let vertex_count = rng.gen_range(1..=24);
    let edge_probability: f64 = rng.gen_range(0.05..=0.5);
    let mut graph = Graph::new(vertex_count, directedness, Weighting::Unweighted);
    for source in 0..vertex_count {
        for target in 0..vertex_count {
            if source != target && rng.gen_bool(edge_probability) {
                graph
                    .add_edge(source, target, 1)
                    .expect("generated ids are in range");
            }
        }
    }
    graph
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn bfs_is_never_longer_than_dfs(
        seed in any::<u64>(),
        directed in any::<bool>(),
        start_pick in any::<prop::sample::Index>(),
        end_pick in any::<prop::sample::Index>(),
    ) {
        let directedness = if directed { Directedness::Directed } else { Directedness::Undirected };
        let graph = random_graph(seed, directedness);
        let start = start_pick.index(graph.vertex_count());
        let end = end_pick.index(graph.vertex_count());

        let bfs = bfs_path(&graph, start, end).expect("ids are in range");
        let dfs = dfs_path(&graph, start, end).expect("ids are in range");

        prop_assert_eq!(bfs.is_empty(), dfs.is_empty());
        if !bfs.is_empty() {
            prop_assert!(bfs.edge_count() <= dfs.edge_count());
            assert_valid_path(&graph, &bfs, start, end);
            assert_valid_path(&graph, &dfs, start, end);
        }
    }
}
