// src/dag/cycle.rs

//! Reachability queries, including the guard run before every edge insertion.
//!
//! Nothing is cached: each check is a fresh O(V + E) breadth-first search over
//! the current graph.

use std::collections::{HashSet, VecDeque};

use crate::dag::graph::{Dag, NodeId};
use crate::errors::Result;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Children,
    Parents,
}

impl<T> Dag<T> {
    /// Whether inserting `source -> destination` would close a cycle.
    ///
    /// True when `destination` can already reach `source`, including the
    /// self-loop case `source == destination`.
    pub fn would_create_cycle(&self, source: &str, destination: &str) -> Result<bool> {
        let src = self.get_node(source)?;
        let dst = self.get_node(destination)?;
        Ok(self.would_create_cycle_ids(src, dst))
    }

    /// Whether a directed path leads from `from` to `to`. A node reaches itself.
    pub fn is_reachable(&self, from: &str, to: &str) -> Result<bool> {
        let start = self.get_node(from)?;
        let target = self.get_node(to)?;
        Ok(self.reaches(start, target))
    }

    /// Every node reachable from `name` along child edges, in BFS order.
    pub fn descendants(&self, name: &str) -> Result<Vec<NodeId>> {
        let start = self.get_node(name)?;
        Ok(self.closure(start, Direction::Children))
    }

    /// Every node that can reach `name`, in BFS order over parent edges.
    pub fn ancestors(&self, name: &str) -> Result<Vec<NodeId>> {
        let start = self.get_node(name)?;
        Ok(self.closure(start, Direction::Parents))
    }

    pub(crate) fn would_create_cycle_ids(&self, src: NodeId, dst: NodeId) -> bool {
        self.reaches(dst, src)
    }

    /// BFS from `start` over child edges; stops as soon as `target` is dequeued.
    fn reaches(&self, start: NodeId, target: NodeId) -> bool {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if current == target {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(node) = self.slot(current) {
                queue.extend(node.children().iter().copied());
            }
        }

        false
    }

    fn closure(&self, start: NodeId, direction: Direction) -> Vec<NodeId> {
        let mut visited: HashSet<NodeId> = HashSet::from([start]);
        let mut queue: VecDeque<NodeId> = VecDeque::from([start]);
        let mut out = Vec::new();

        while let Some(current) = queue.pop_front() {
            let Some(node) = self.slot(current) else {
                continue;
            };
            let next = match direction {
                Direction::Children => node.children(),
                Direction::Parents => node.parents(),
            };
            for &id in next {
                if visited.insert(id) {
                    out.push(id);
                    queue.push_back(id);
                }
            }
        }

        out
    }
}
