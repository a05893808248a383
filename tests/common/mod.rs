#![allow(dead_code)]

pub use dagraph_test_utils::builders;
pub use dagraph_test_utils::init_tracing;

use dagraph::dag::{Dag, NodeId};

/// Every edge of the graph as (source, destination) names, in registry order.
pub fn edge_names<T>(dag: &Dag<T>) -> Vec<(String, String)> {
    dag.nodes()
        .flat_map(|(_, node)| {
            dag.names_of(node.children())
                .into_iter()
                .map(move |child| (node.name().to_string(), child))
        })
        .collect()
}

/// Names of the given handles, as `&str`-comparable owned strings.
pub fn names<T>(dag: &Dag<T>, ids: &[NodeId]) -> Vec<String> {
    dag.names_of(ids)
}
