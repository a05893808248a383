// tests/paths.rs
mod common;
use crate::common::builders::{DagBuilder, diamond};
use crate::common::init_tracing;

use dagraph::dag::{Dag, NodeId};
use dagraph::errors::DagError;

fn path_names<T>(dag: &Dag<T>, paths: &[Vec<NodeId>]) -> Vec<Vec<String>> {
    paths.iter().map(|p| dag.names_of(p)).collect()
}

fn demo_tasks() -> Dag {
    DagBuilder::new()
        .with_edges(&[
            ("T1", "T2"),
            ("T1", "T3"),
            ("T2", "T4"),
            ("T3", "T4"),
            ("T4", "T5"),
        ])
        .build()
}

#[test]
fn diamond_has_exactly_two_paths_in_dfs_order() {
    init_tracing();

    let dag = diamond();
    let paths = dag.all_paths("A", "D").unwrap();

    assert_eq!(
        path_names(&dag, &paths),
        vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]
    );
}

#[test]
fn shared_suffix_is_reused_across_sibling_branches() {
    let dag = demo_tasks();
    let paths = dag.all_paths("T1", "T5").unwrap();

    assert_eq!(
        path_names(&dag, &paths),
        vec![
            vec!["T1", "T2", "T4", "T5"],
            vec!["T1", "T3", "T4", "T5"],
        ]
    );
}

#[test]
fn shortcut_edge_adds_a_third_path() {
    let mut dag = demo_tasks();
    assert!(dag.add_edge("T1", "T4").unwrap());

    let paths = dag.all_paths("T1", "T5").unwrap();

    assert_eq!(paths.len(), 3);
    assert_eq!(path_names(&dag, &paths)[2], vec!["T1", "T4", "T5"]);
}

#[test]
fn unreachable_destination_yields_no_paths() {
    let dag = diamond();

    assert!(dag.all_paths("D", "A").unwrap().is_empty());
    assert!(dag.all_paths("B", "C").unwrap().is_empty());
}

#[test]
fn source_equal_to_destination_is_a_single_node_path() {
    let dag = diamond();
    let paths = dag.all_paths("B", "B").unwrap();

    assert_eq!(path_names(&dag, &paths), vec![vec!["B"]]);
}

#[test]
fn unknown_endpoint_is_node_not_found() {
    let dag = diamond();

    match dag.all_paths("A", "Z") {
        Err(DagError::NodeNotFound(name)) => assert_eq!(name, "Z"),
        other => panic!("expected NodeNotFound, got {other:?}"),
    }
}

#[test]
fn limited_search_stops_at_the_cap() {
    let dag = demo_tasks();

    let capped = dag.all_paths_limited("T1", "T5", 1).unwrap();
    assert_eq!(
        path_names(&dag, &capped),
        vec![vec!["T1", "T2", "T4", "T5"]]
    );

    let roomy = dag.all_paths_limited("T1", "T5", 10).unwrap();
    assert_eq!(roomy, dag.all_paths("T1", "T5").unwrap());
}

#[test]
fn layered_graph_path_count_is_product_of_layer_widths() {
    // s -> {a0,a1,a2} -> {b0,b1} -> t : 3 * 2 paths
    let mut builder = DagBuilder::new();
    for a in ["a0", "a1", "a2"] {
        builder = builder.with_edge("s", a);
        for b in ["b0", "b1"] {
            builder = builder.with_edge(a, b);
        }
    }
    for b in ["b0", "b1"] {
        builder = builder.with_edge(b, "t");
    }
    let dag = builder.build();

    let paths = dag.all_paths("s", "t").unwrap();
    assert_eq!(paths.len(), 6);
    for path in path_names(&dag, &paths) {
        assert_eq!(path.len(), 4);
        assert_eq!(path.first().map(String::as_str), Some("s"));
        assert_eq!(path.last().map(String::as_str), Some("t"));
    }
}

#[test]
fn long_chain_is_enumerated_without_exhausting_the_stack() {
    let n = 20_000;
    let mut dag: Dag = Dag::new();
    for i in 0..n {
        dag.add_node(format!("n{i}"), ()).unwrap();
    }
    for i in 1..n {
        assert!(dag.add_edge(&format!("n{}", i - 1), &format!("n{i}")).unwrap());
    }

    let paths = dag.all_paths("n0", &format!("n{}", n - 1)).unwrap();

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), n);
    assert_eq!(dag.name_of(paths[0][n - 1]).unwrap(), format!("n{}", n - 1));

    let capped = dag.all_paths_limited("n0", &format!("n{}", n - 1), 1).unwrap();
    assert_eq!(capped, paths);
}

#[test]
fn zero_cap_finds_nothing() {
    let dag = diamond();
    assert!(dag.all_paths_limited("A", "D", 0).unwrap().is_empty());
    assert!(dag.all_paths_limited("A", "A", 0).unwrap().is_empty());
}

#[test]
fn paths_skip_removed_nodes_and_follow_later_edges() {
    let mut dag = diamond();
    assert!(dag.remove_node("B"));
    dag.add_node("E", ()).unwrap();
    assert!(dag.add_edge("A", "E").unwrap());
    assert!(dag.add_edge("E", "D").unwrap());

    let paths = dag.all_paths("A", "D").unwrap();

    assert_eq!(
        path_names(&dag, &paths),
        vec![vec!["A", "C", "D"], vec!["A", "E", "D"]]
    );
}
