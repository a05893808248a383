// src/dag/paths.rs

//! Exhaustive simple-path enumeration.

use tracing::debug;

use crate::dag::graph::{Dag, NodeId};
use crate::errors::Result;

impl<T> Dag<T> {
    /// Every simple path from `source` to `destination`.
    ///
    /// Paths come back in the order the DFS completes them, following child
    /// insertion order. `source == destination` yields the single path
    /// `[source]`. The output can grow exponentially on dense graphs; use
    /// [`Dag::all_paths_limited`] to cap it.
    pub fn all_paths(&self, source: &str, destination: &str) -> Result<Vec<Vec<NodeId>>> {
        self.collect_paths(source, destination, None)
    }

    /// Like [`Dag::all_paths`], but stops once `max_paths` paths were found.
    pub fn all_paths_limited(
        &self,
        source: &str,
        destination: &str,
        max_paths: usize,
    ) -> Result<Vec<Vec<NodeId>>> {
        self.collect_paths(source, destination, Some(max_paths))
    }

    fn collect_paths(
        &self,
        source: &str,
        destination: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Vec<NodeId>>> {
        let src = self.get_node(source)?;
        let dst = self.get_node(destination)?;

        let mut search = PathSearch {
            dag: self,
            target: dst,
            limit,
            on_path: vec![false; self.slot_count()],
            current: Vec::new(),
            found: Vec::new(),
        };
        search.run(src);

        debug!(
            source,
            destination,
            paths = search.found.len(),
            "dag: path enumeration finished"
        );
        Ok(search.found)
    }
}

/// DFS state. `on_path` mirrors `current` and is unwound on backtrack so
/// sibling branches may reuse nodes.
struct PathSearch<'a, T> {
    dag: &'a Dag<T>,
    target: NodeId,
    limit: Option<usize>,
    on_path: Vec<bool>,
    current: Vec<NodeId>,
    found: Vec<Vec<NodeId>>,
}

impl<T> PathSearch<'_, T> {
    fn is_full(&self) -> bool {
        self.limit.is_some_and(|max| self.found.len() >= max)
    }

    /// Iterative DFS from `start`; each frame is (node, next child position).
    fn run(&mut self, start: NodeId) {
        if self.is_full() {
            return;
        }

        let dag = self.dag;
        self.enter(start);
        let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];

        while let Some(&(node, next)) = stack.last() {
            // The target ends a path; its children are never explored.
            let child = if node == self.target {
                None
            } else {
                dag.slot(node).and_then(|n| n.children().get(next).copied())
            };

            let Some(child) = child else {
                stack.pop();
                self.leave(node);
                continue;
            };

            if let Some(frame) = stack.last_mut() {
                frame.1 += 1;
            }

            if self.on_path[child.index()] {
                continue;
            }
            if self.is_full() {
                break;
            }
            self.enter(child);
            stack.push((child, 0));
        }
    }

    fn enter(&mut self, node: NodeId) {
        self.on_path[node.index()] = true;
        self.current.push(node);
        if node == self.target {
            self.found.push(self.current.clone());
        }
    }

    fn leave(&mut self, node: NodeId) {
        self.current.pop();
        self.on_path[node.index()] = false;
    }
}
