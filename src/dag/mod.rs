// src/dag/mod.rs

//! The DAG engine.
//!
//! - [`graph`] is the node registry and edge mutation (arena + name index).
//! - [`cycle`] holds the reachability search used as the insertion guard.
//! - [`topo`] derives a topological order.
//! - [`paths`] enumerates simple paths between two nodes.

pub mod cycle;
pub mod graph;
pub mod paths;
pub mod topo;

pub use graph::{Dag, Node, NodeId};
