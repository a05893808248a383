// src/dag/graph.rs

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::errors::{DagError, Result};

/// Opaque handle to a node owned by a [`Dag`].
///
/// Handles are never reused within one graph, so a handle to a removed node
/// stays dead instead of pointing at whatever was registered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the registry (registration order).
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named node with a payload and both adjacency directions.
#[derive(Debug, Clone)]
pub struct Node<T> {
    name: String,
    data: T,
    /// Successors, in edge insertion order.
    children: Vec<NodeId>,
    /// Predecessors, in edge insertion order.
    parents: Vec<NodeId>,
}

impl<T> Node<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }
}

/// In-memory directed acyclic graph keyed by node name.
///
/// Registry policy:
/// - names are unique; re-adding a name fails with [`DagError::DuplicateNode`]
/// - nodes are never created implicitly; edges between unknown names fail
///   with [`DagError::NodeNotFound`]
/// - adding an edge that already exists is a no-op returning `Ok(true)`
///
/// Every edge is checked by the cycle guard before insertion, so the graph is
/// acyclic after every successful mutation.
#[derive(Debug, Clone)]
pub struct Dag<T = ()> {
    /// Arena of nodes; removed nodes leave a `None` slot behind.
    slots: Vec<Option<Node<T>>>,
    index: HashMap<String, NodeId>,
    edge_count: usize,
}

impl<T> Default for Dag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Dag<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Register a new node.
    pub fn add_node(&mut self, name: impl Into<String>, data: T) -> Result<NodeId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(DagError::duplicate_node(name));
        }

        let id = NodeId(self.slots.len());
        debug!(node = %name, %id, "dag: adding node");
        self.index.insert(name.clone(), id);
        self.slots.push(Some(Node {
            name,
            data,
            children: Vec::new(),
            parents: Vec::new(),
        }));
        Ok(id)
    }

    /// Register a node named after its payload's `Display` output.
    pub fn add_node_named_by(&mut self, data: T) -> Result<NodeId>
    where
        T: fmt::Display,
    {
        let name = data.to_string();
        self.add_node(name, data)
    }

    /// Look up a node handle by name.
    pub fn get_node(&self, name: &str) -> Result<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| DagError::node_not_found(name))
    }

    /// Resolve a handle. Fails for handles of removed nodes.
    pub fn node(&self, id: NodeId) -> Result<&Node<T>> {
        self.slot(id)
            .ok_or_else(|| DagError::node_not_found(id.to_string()))
    }

    pub fn name_of(&self, id: NodeId) -> Result<&str> {
        self.node(id).map(Node::name)
    }

    pub fn data(&self, name: &str) -> Result<&T> {
        let id = self.get_node(name)?;
        self.node(id).map(Node::data)
    }

    /// Mutable access to a payload. Adjacency is never handed out mutably.
    pub fn data_mut(&mut self, name: &str) -> Result<&mut T> {
        let id = self.get_node(name)?;
        self.slot_mut(id)
            .map(|node| &mut node.data)
            .ok_or_else(|| DagError::node_not_found(name))
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Live nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId(i), node)))
    }

    /// Live node handles in registration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(|(id, _)| id)
    }

    /// Immediate successors of a node.
    pub fn children_of(&self, name: &str) -> Result<&[NodeId]> {
        let id = self.get_node(name)?;
        self.node(id).map(Node::children)
    }

    /// Immediate predecessors of a node.
    pub fn parents_of(&self, name: &str) -> Result<&[NodeId]> {
        let id = self.get_node(name)?;
        self.node(id).map(Node::parents)
    }

    /// Names for a sequence of handles (e.g. a path or an ordering).
    pub fn names_of(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.slot(id))
            .map(|node| node.name.clone())
            .collect()
    }

    /// Nodes without parents, in registration order.
    pub fn roots(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, node)| node.parents.is_empty())
            .map(|(id, _)| id)
            .collect()
    }

    /// Nodes without children, in registration order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(id, _)| id)
            .collect()
    }

    /// Whether the edge `source -> destination` exists. Unknown names yield `false`.
    pub fn has_edge(&self, source: &str, destination: &str) -> bool {
        match (self.index.get(source), self.index.get(destination)) {
            (Some(&src), Some(&dst)) => self.has_edge_ids(src, dst),
            _ => false,
        }
    }

    /// Insert `source -> destination` unless it would close a cycle.
    ///
    /// Returns `Ok(false)` when the cycle guard rejects the edge; the graph is
    /// left untouched in that case. An edge that already exists is a no-op
    /// returning `Ok(true)`.
    pub fn add_edge(&mut self, source: &str, destination: &str) -> Result<bool> {
        let src = self.get_node(source)?;
        let dst = self.get_node(destination)?;

        if self.has_edge_ids(src, dst) {
            debug!(source, destination, "dag: edge already present");
            return Ok(true);
        }

        if self.would_create_cycle_ids(src, dst) {
            warn!(
                source,
                destination,
                "dag: rejecting edge that would create a cycle"
            );
            return Ok(false);
        }

        self.link(src, dst);
        debug!(source, destination, "dag: edge added");
        Ok(true)
    }

    /// Remove `source -> destination` from both adjacency directions.
    ///
    /// Returns `Ok(false)` if the edge did not exist.
    pub fn remove_edge(&mut self, source: &str, destination: &str) -> Result<bool> {
        let src = self.get_node(source)?;
        let dst = self.get_node(destination)?;

        let removed = self.unlink(src, dst);
        debug!(source, destination, removed, "dag: remove edge");
        Ok(removed)
    }

    /// Remove a node after detaching every edge that touches it.
    ///
    /// Returns `false` if no node had that name.
    pub fn remove_node(&mut self, name: &str) -> bool {
        let Some(&id) = self.index.get(name) else {
            return false;
        };
        let Some((children, parents)) = self
            .slot(id)
            .map(|node| (node.children.clone(), node.parents.clone()))
        else {
            return false;
        };

        for child in children {
            self.unlink(id, child);
        }
        for parent in parents {
            self.unlink(parent, id);
        }

        self.index.remove(name);
        if let Some(slot) = self.slots.get_mut(id.0) {
            *slot = None;
        }

        debug!(node = name, %id, "dag: node removed");
        true
    }

    /// Text dump, one line per node in registration order.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub(crate) fn slot(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Upper bound for handle indices; sizes per-traversal mark tables.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn has_edge_ids(&self, src: NodeId, dst: NodeId) -> bool {
        self.slot(src).is_some_and(|node| node.children.contains(&dst))
    }

    /// Both endpoints must be live.
    fn link(&mut self, src: NodeId, dst: NodeId) {
        if let Some(node) = self.slot_mut(src) {
            node.children.push(dst);
        }
        if let Some(node) = self.slot_mut(dst) {
            node.parents.push(src);
        }
        self.edge_count += 1;
    }

    /// Both positions are located before anything is mutated, so a
    /// half-present edge is never partially removed.
    fn unlink(&mut self, src: NodeId, dst: NodeId) -> bool {
        let child_pos = self
            .slot(src)
            .and_then(|node| node.children.iter().position(|&c| c == dst));
        let parent_pos = self
            .slot(dst)
            .and_then(|node| node.parents.iter().position(|&p| p == src));

        let (Some(child_pos), Some(parent_pos)) = (child_pos, parent_pos) else {
            return false;
        };

        if let Some(node) = self.slot_mut(src) {
            node.children.remove(child_pos);
        }
        if let Some(node) = self.slot_mut(dst) {
            node.parents.remove(parent_pos);
        }
        self.edge_count = self.edge_count.saturating_sub(1);
        true
    }

    /// Append a child without consulting the cycle guard. Test-only.
    #[cfg(test)]
    pub(crate) fn link_unchecked(&mut self, src: NodeId, dst: NodeId) {
        self.link(src, dst);
    }
}

impl<T> fmt::Display for Dag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, node) in self.nodes() {
            if node.children.is_empty() {
                writeln!(f, "{} -> [no connections]", node.name)?;
            } else {
                writeln!(f, "{} -> {}", node.name, self.names_of(&node.children).join(", "))?;
            }
        }
        Ok(())
    }
}
