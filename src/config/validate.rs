// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::dag::Dag;
use crate::errors::{DagError, Result};

impl TryFrom<RawGraphFile> for GraphFile {
    type Error = DagError;

    fn try_from(raw: RawGraphFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_graph(&raw)?;
        Ok(GraphFile::new_unchecked(raw.config, raw.node))
    }
}

impl GraphFile {
    /// Build the engine graph through its public API.
    ///
    /// Nodes are registered in name order, then each node's `edges` are
    /// inserted in the listed order. Payloads are the node labels.
    pub fn build_dag(&self) -> Result<Dag<String>> {
        let mut dag = Dag::new();

        for (name, node) in self.node.iter() {
            dag.add_node(name.clone(), node.effective_label(name))?;
        }

        for (name, node) in self.node.iter() {
            for child in node.edges.iter() {
                if !dag.add_edge(name, child)? {
                    return Err(DagError::DagCycle(format!(
                        "edge '{}' -> '{}' was rejected by the cycle guard",
                        name, child
                    )));
                }
            }
        }

        debug!(
            nodes = dag.node_count(),
            edges = dag.edge_count(),
            "built DAG from description file"
        );
        Ok(dag)
    }
}

fn validate_raw_graph(raw: &RawGraphFile) -> Result<()> {
    ensure_has_nodes(raw)?;
    validate_global_config(raw)?;
    validate_edge_targets(raw)?;
    validate_acyclic(raw)?;
    Ok(())
}

fn ensure_has_nodes(raw: &RawGraphFile) -> Result<()> {
    if raw.node.is_empty() {
        return Err(DagError::ConfigError(
            "description must contain at least one [node.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(raw: &RawGraphFile) -> Result<()> {
    if raw.config.max_paths == Some(0) {
        return Err(DagError::ConfigError(
            "[config].max_paths must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_edge_targets(raw: &RawGraphFile) -> Result<()> {
    for (name, node) in raw.node.iter() {
        for child in node.edges.iter() {
            if !raw.node.contains_key(child) {
                return Err(DagError::ConfigError(format!(
                    "node '{}' has unknown edge target '{}' in `edges`",
                    name, child
                )));
            }
            if child == name {
                return Err(DagError::ConfigError(format!(
                    "node '{}' cannot have an edge to itself",
                    name
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclic(raw: &RawGraphFile) -> Result<()> {
    // Edge direction matches the file: `[node.A] edges = ["B"]` is A -> B.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in raw.node.keys() {
        graph.add_node(name.as_str());
    }

    for (name, node) in raw.node.iter() {
        for child in node.edges.iter() {
            graph.add_edge(name.as_str(), child.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(DagError::DagCycle(format!(
            "cycle detected in description involving node '{}'",
            cycle.node_id()
        ))),
    }
}
