use degdist::{
    config::{MalformedPolicy, Profile},
    graph::{degree_histogram, simplify, Graph},
    ingest::read_lines,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn raw_graph() -> impl Strategy<Value = Graph<u8>> {
    (
        prop::collection::vec(0u8..24, 0..8),
        prop::collection::vec((0u8..24, 0u8..24), 0..80),
    )
        .prop_map(|(vertices, edges)| Graph::new(vertices, edges))
}

proptest! {
    #[test]
    fn simplify_is_idempotent(graph in raw_graph()) {
        let once = simplify(&graph);
        prop_assert_eq!(simplify(once.as_ref()), once);
    }

    #[test]
    fn simplify_is_symmetric_and_loop_free(graph in raw_graph()) {
        let simple = simplify(&graph);
        prop_assert!(simple.as_ref().is_symmetric());
        prop_assert!(!simple.as_ref().has_self_edges());
        prop_assert_eq!(simple.vertices(), graph.vertices());
    }

    #[test]
    fn histogram_obeys_handshake(graph in raw_graph()) {
        let simple = simplify(&graph);
        let histogram = degree_histogram(&simple);
        prop_assert_eq!(histogram.degree_sum(), simple.num_directed_edges());
        prop_assert_eq!(
            histogram.degree_sum(),
            2 * simple.num_undirected_edges().unwrap()
        );
    }

    #[test]
    fn histogram_counts_every_vertex(graph in raw_graph()) {
        let simple = simplify(&graph);
        let histogram = degree_histogram(&simple);
        prop_assert_eq!(histogram.num_vertices(), graph.num_vertices());
        let touched: HashSet<u8> = simple.edges().iter().map(|&(src, _)| src).collect();
        prop_assert_eq!(histogram.get(0), graph.num_vertices() - touched.len());
    }

    #[test]
    fn duplicate_records_collapse(
        edges in prop::collection::vec((0u16..50, 0u16..50), 0..40),
        copies in 1usize..4,
    ) {
        let lines: Vec<String> = edges
            .iter()
            .flat_map(|&(src, dst)| std::iter::repeat(format!("{},{}", src, dst)).take(copies))
            .collect();
        let ingested = read_lines(lines, Profile::Small, MalformedPolicy::Strict).unwrap();
        let distinct: HashSet<_> = edges.iter().collect();
        prop_assert_eq!(ingested.graph.num_edges(), distinct.len());
    }

    #[test]
    fn histogram_does_not_depend_on_worker_count(graph in raw_graph()) {
        let run = |threads| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| degree_histogram(&simplify(&graph)))
        };
        prop_assert_eq!(run(1), run(4));
    }
}
