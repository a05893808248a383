// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Graph description as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// max_paths = 100
///
/// [node.T1]
/// label = "Task 1"
/// edges = ["T2", "T3"]
///
/// [node.T2]
/// ```
///
/// All sections are optional at the parsing stage; validation rejects a file
/// without nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGraphFile {
    /// Presentation options from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All nodes from `[node.<name>]`, keyed by node name.
    #[serde(default)]
    pub node: BTreeMap<String, NodeConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// Cap on the number of paths listed by `paths`. `None` lists all of them.
    #[serde(default)]
    pub max_paths: Option<usize>,
}

/// `[node.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeConfig {
    /// Payload stored on the node. Defaults to the node name.
    #[serde(default)]
    pub label: Option<String>,

    /// Children of this node, inserted in the listed order.
    #[serde(default)]
    pub edges: Vec<String>,
}

impl NodeConfig {
    pub fn effective_label(&self, name: &str) -> String {
        self.label.clone().unwrap_or_else(|| name.to_string())
    }
}

/// A validated graph description.
///
/// Only obtainable through `TryFrom<RawGraphFile>` (see `validate.rs`), so
/// every edge target exists and the declared edges are acyclic.
#[derive(Debug, Clone)]
pub struct GraphFile {
    pub config: ConfigSection,
    pub node: BTreeMap<String, NodeConfig>,
}

impl GraphFile {
    pub(crate) fn new_unchecked(config: ConfigSection, node: BTreeMap<String, NodeConfig>) -> Self {
        Self { config, node }
    }
}
