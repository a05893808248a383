// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! A rejected cycle-forming edge is *not* an error: `Dag::add_edge` reports it
//! as `Ok(false)`. Everything in here is surfaced to the caller as-is.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DagError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    /// The sorter met a cycle the insertion guard should have refused.
    /// Only reachable by tampering with internal state.
    #[error("Cycle invariant violated: {0}")]
    CycleInvariantViolated(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cycle detected in DAG: {0}")]
    DagCycle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DagError {
    pub fn node_not_found(name: impl Into<String>) -> Self {
        Self::NodeNotFound(name.into())
    }

    pub fn duplicate_node(name: impl Into<String>) -> Self {
        Self::DuplicateNode(name.into())
    }
}

pub type Result<T> = std::result::Result<T, DagError>;
