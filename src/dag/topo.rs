// src/dag/topo.rs

//! Topological ordering via depth-first search with three-colour marking.

use tracing::{debug, error};

use crate::dag::graph::{Dag, NodeId};
use crate::errors::{DagError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

impl<T> Dag<T> {
    /// All nodes ordered so that every edge `u -> v` has `u` before `v`.
    ///
    /// Roots are tried in registration order and children in insertion order,
    /// so the result is reproducible. A node met again while still on the DFS
    /// stack yields [`DagError::CycleInvariantViolated`]; the insertion guard
    /// makes that unreachable through the public API.
    pub fn topological_order(&self) -> Result<Vec<NodeId>> {
        let mut marks = vec![Mark::Unvisited; self.slot_count()];
        let mut post_order = Vec::with_capacity(self.node_count());

        for root in self.node_ids() {
            if marks[root.index()] == Mark::Unvisited {
                self.visit(root, &mut marks, &mut post_order)?;
            }
        }

        post_order.reverse();
        debug!(nodes = post_order.len(), "dag: topological order computed");
        Ok(post_order)
    }

    /// Same as [`Dag::topological_order`], resolved to names.
    pub fn topological_names(&self) -> Result<Vec<String>> {
        let order = self.topological_order()?;
        Ok(self.names_of(&order))
    }

    /// Iterative DFS from `root`; each frame is (node, next child position).
    fn visit(
        &self,
        root: NodeId,
        marks: &mut [Mark],
        post_order: &mut Vec<NodeId>,
    ) -> Result<()> {
        marks[root.index()] = Mark::InProgress;
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];

        while let Some(&(current, next)) = stack.last() {
            let child = self
                .slot(current)
                .and_then(|node| node.children().get(next).copied());

            let Some(child) = child else {
                stack.pop();
                marks[current.index()] = Mark::Done;
                post_order.push(current);
                continue;
            };

            if let Some(frame) = stack.last_mut() {
                frame.1 += 1;
            }

            match marks[child.index()] {
                Mark::Unvisited => {
                    marks[child.index()] = Mark::InProgress;
                    stack.push((child, 0));
                }
                Mark::InProgress => {
                    let name = self.name_of(child).unwrap_or("<removed>").to_string();
                    error!(node = %name, "dag: cycle found during topological sort");
                    return Err(DagError::CycleInvariantViolated(format!(
                        "node '{name}' was reached again while still being visited"
                    )));
                }
                Mark::Done => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_reports_cycle_planted_behind_the_guard() {
        let mut dag: Dag = Dag::new();
        let a = dag.add_node("A", ()).unwrap();
        let b = dag.add_node("B", ()).unwrap();
        assert!(dag.add_edge("A", "B").unwrap());

        dag.link_unchecked(b, a);

        match dag.topological_order() {
            Err(DagError::CycleInvariantViolated(msg)) => {
                assert!(msg.contains('A') || msg.contains('B'))
            }
            other => panic!("expected CycleInvariantViolated, got {other:?}"),
        }
    }

    #[test]
    fn guarded_graph_never_trips_the_invariant() {
        let mut dag: Dag = Dag::new();
        for name in ["A", "B", "C"] {
            dag.add_node(name, ()).unwrap();
        }
        dag.add_edge("A", "B").unwrap();
        dag.add_edge("B", "C").unwrap();
        assert!(!dag.add_edge("C", "A").unwrap());

        assert_eq!(dag.topological_names().unwrap(), vec!["A", "B", "C"]);
    }
}
