#![allow(dead_code)]

use std::collections::BTreeMap;

use dagraph::config::{ConfigSection, GraphFile, NodeConfig, RawGraphFile};
use dagraph::dag::Dag;

/// Builder for name-only graphs, going through the public API.
///
/// Nodes are registered in the order they are first mentioned.
pub struct DagBuilder {
    dag: Dag,
}

impl DagBuilder {
    pub fn new() -> Self {
        Self { dag: Dag::new() }
    }

    pub fn with_node(mut self, name: &str) -> Self {
        if !self.dag.contains_node(name) {
            self.dag
                .add_node(name, ())
                .expect("Failed to add node in builder");
        }
        self
    }

    pub fn with_nodes(self, names: &[&str]) -> Self {
        names.iter().fold(self, |b, name| b.with_node(name))
    }

    /// Add `source -> destination`; panics if the cycle guard rejects it.
    pub fn with_edge(self, source: &str, destination: &str) -> Self {
        let mut b = self.with_node(source).with_node(destination);
        let added = b
            .dag
            .add_edge(source, destination)
            .expect("Failed to add edge in builder");
        assert!(added, "builder edge {source} -> {destination} closes a cycle");
        b
    }

    pub fn with_edges(self, edges: &[(&str, &str)]) -> Self {
        edges.iter().fold(self, |b, (s, d)| b.with_edge(s, d))
    }

    pub fn build(self) -> Dag {
        self.dag
    }
}

impl Default for DagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The diamond A -> B, A -> C, B -> D, C -> D.
pub fn diamond() -> Dag {
    DagBuilder::new()
        .with_edges(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
        .build()
}

/// Builder for `GraphFile` to simplify description-file tests.
pub struct GraphFileBuilder {
    raw: RawGraphFile,
}

impl GraphFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawGraphFile {
                config: ConfigSection::default(),
                node: BTreeMap::new(),
            },
        }
    }

    pub fn with_node(mut self, name: &str, node: NodeConfig) -> Self {
        self.raw.node.insert(name.to_string(), node);
        self
    }

    pub fn max_paths(mut self, max: usize) -> Self {
        self.raw.config.max_paths = Some(max);
        self
    }

    pub fn raw(self) -> RawGraphFile {
        self.raw
    }

    pub fn build(self) -> GraphFile {
        GraphFile::try_from(self.raw).expect("Failed to build valid description from builder")
    }
}

impl Default for GraphFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `NodeConfig`.
pub struct NodeConfigBuilder {
    node: NodeConfig,
}

impl NodeConfigBuilder {
    pub fn new() -> Self {
        Self {
            node: NodeConfig::default(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.node.label = Some(label.to_string());
        self
    }

    pub fn edge(mut self, child: &str) -> Self {
        self.node.edges.push(child.to_string());
        self
    }

    pub fn build(self) -> NodeConfig {
        self.node
    }
}

impl Default for NodeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
