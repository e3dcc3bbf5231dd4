//! End-to-end checks through the public API, including the diagnostics the
//! engine emits.

use graphlab_core::{
    Directedness, EdgeInsertion, GeneratorBuilder, Graph, GraphError, GraphStore, GraphView,
    SearchStrategy, SparseGraph, WeightedEdge, Weighting, find_path, kruskal,
};
use graphlab_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tracing::Level;

const SQUARE: [(usize, usize, u32); 4] = [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10)];

#[fixture]
fn square() -> Graph {
    let mut graph = Graph::new(4, Directedness::Undirected, Weighting::Weighted);
    for (source, target, weight) in SQUARE {
        graph
            .add_edge(source, target, weight)
            .expect("square edges are valid");
    }
    graph
}

#[fixture]
fn path() -> Graph {
    let mut graph = Graph::new(4, Directedness::Undirected, Weighting::Weighted);
    for (source, target, weight) in &SQUARE[..3] {
        graph
            .add_edge(*source, *target, *weight)
            .expect("path edges are valid");
    }
    graph
}

#[rstest]
fn kruskal_keeps_the_three_light_edges(square: Graph) {
    let forest = kruskal(&square).expect("undirected graph");
    let expected: Vec<WeightedEdge> = SQUARE[..3].iter().copied().map(WeightedEdge::from).collect();
    assert_eq!(forest.edges(), expected.as_slice());
    assert_eq!(forest.total_weight(), 6);
    assert_eq!(forest.edges().len(), square.vertex_count() - 1);
}

#[rstest]
fn bfs_walks_the_path_and_misses_an_isolated_vertex(mut path: Graph) {
    let found = path.bfs_path(0, 3).expect("in range");
    assert_eq!(found.vertices(), &[0, 1, 2, 3]);
    assert_eq!(found.edge_count(), 3);

    let isolated = path.add_vertex();
    assert_eq!(isolated, 4);
    assert!(path.bfs_path(0, isolated).expect("in range").is_empty());
    assert!(path.dfs_path(0, isolated).expect("in range").is_empty());
}

#[rstest]
fn views_are_recomputed_after_mutation(mut path: Graph) {
    let before = path.adjacency_list().to_vec();
    assert_eq!(path.adjacency_list().to_vec(), before);
    assert_eq!(path.add_edge(3, 0, 10), Ok(EdgeInsertion::Inserted));
    let after = path.adjacency_list().to_vec();
    assert_eq!(after[0], vec![1, 3]);
    assert_eq!(path.incidence_matrix().edge_count(), 4);
}

#[test]
fn generated_graphs_feed_every_algorithm() {
    let mut generator = GeneratorBuilder::new()
        .with_rng_seed(2024)
        .build()
        .expect("defaults are valid");
    let traversal: SparseGraph = generator.degree_bounded(30, 40).expect("feasible");
    let last = traversal.vertex_count() - 1;
    let bfs = find_path(&traversal, SearchStrategy::BreadthFirst, 0, last).expect("in range");
    let dfs = find_path(&traversal, SearchStrategy::DepthFirst, 0, last).expect("in range");
    assert_eq!(bfs.is_empty(), dfs.is_empty());
    assert!(bfs.edge_count() <= dfs.edge_count() || bfs.is_empty());

    let weighted: Graph = generator.connected(25, 3).expect("feasible");
    let forest = kruskal(&weighted).expect("undirected graph");
    assert!(forest.is_tree());
    assert_eq!(forest.edges().len(), 24);
    assert_eq!(forest.stats().considered, weighted.edge_list().len());
}

#[rstest]
fn searches_record_spans_with_their_endpoints(path: Graph) {
    let (layer, _guard) = RecordingLayer::install();
    path.bfs_path(0, 3).expect("in range");
    path.dfs_path(3, 0).expect("in range");

    let bfs = layer.span_named("graph.bfs").expect("bfs span");
    assert_eq!(bfs.fields.get("start").map(String::as_str), Some("0"));
    assert_eq!(bfs.fields.get("end").map(String::as_str), Some("3"));
    assert_eq!(bfs.fields.get("vertices").map(String::as_str), Some("4"));
    let dfs = layer.span_named("graph.dfs").expect("dfs span");
    assert_eq!(dfs.fields.get("start").map(String::as_str), Some("3"));
}

#[rstest]
fn kruskal_reports_a_summary_and_rejections(square: Graph) {
    let (layer, _guard) = RecordingLayer::install();
    kruskal(&square).expect("undirected graph");

    assert!(layer.span_named("graph.kruskal").is_some());
    let summaries: Vec<_> = layer
        .events_at(Level::INFO)
        .into_iter()
        .filter(|event| event.message() == Some("kruskal complete"))
        .collect();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].fields.get("accepted").map(String::as_str), Some("3"));
    assert_eq!(summaries[0].fields.get("total_weight").map(String::as_str), Some("6"));
    let rejections = layer
        .events_at(Level::DEBUG)
        .into_iter()
        .filter(|event| event.message() == Some("rejected cycle-closing edge"))
        .count();
    assert_eq!(rejections, 5);
}

#[test]
fn failures_are_logged_on_the_span() {
    let (layer, _guard) = RecordingLayer::install();
    let directed = Graph::new(3, Directedness::Directed, Weighting::Weighted);
    assert_eq!(kruskal(&directed), Err(GraphError::DirectedGraph));

    let errors = layer.events_at(Level::ERROR);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].fields.get("error").map(String::as_str),
        Some("minimum spanning trees are only defined for undirected graphs")
    );
}

#[test]
fn self_loops_are_reported_at_debug_level() {
    let (layer, _guard) = RecordingLayer::install();
    let mut graph = Graph::new(2, Directedness::Undirected, Weighting::Unweighted);
    assert_eq!(graph.add_edge(1, 1, 1), Ok(EdgeInsertion::SelfLoopIgnored));

    let events = layer.events_at(Level::DEBUG);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message(), Some("ignoring self-loop"));
    assert_eq!(events[0].fields.get("vertex").map(String::as_str), Some("1"));
}

#[test]
fn generators_record_their_spans() {
    let (layer, _guard) = RecordingLayer::install();
    let mut generator = GeneratorBuilder::new()
        .with_rng_seed(5)
        .build()
        .expect("defaults are valid");
    let _: Graph = generator.degree_bounded(8, 6).expect("feasible");
    let _: Graph = generator.connected(6, 2).expect("feasible");

    let bounded = layer
        .span_named("generator.degree_bounded")
        .expect("degree-bounded span");
    assert_eq!(bounded.fields.get("edge_count").map(String::as_str), Some("6"));
    assert_eq!(bounded.fields.get("directed").map(String::as_str), Some("false"));
    let connected = layer.span_named("generator.connected").expect("connected span");
    assert_eq!(connected.fields.get("min_neighbors").map(String::as_str), Some("2"));
}
