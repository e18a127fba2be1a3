//! Acyclicity check and topological ordering by depth-first search.
//!
//! Every vertex carries one of three marks: unvisited, on the current DFS
//! stack, or finished. Reaching a vertex that is still on the stack closes a
//! cycle. Otherwise the reverse of the finish order is a topological order.
//!
//! Roots are taken in reverse insertion order while out-edges are followed in
//! insertion order. Reversing the finish order then puts independent vertices
//! back in insertion order, so a graph without edges sorts to its own vertex
//! order.

use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::store::{Graph, Label, VertexId};

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Finished,
}

impl<V> Graph<V> {
    /// Iterative three-color DFS over the whole graph.
    ///
    /// `Ok` holds a topological order of every vertex id. `Err` holds the
    /// first cycle found, as `[v, .., u, v]` where `u -> v` is the back edge.
    pub(crate) fn depth_first_order(&self) -> core::result::Result<Vec<VertexId>, Vec<VertexId>> {
        let mut marks = vec![Mark::Unvisited; self.slot_bound()];
        let mut finished = Vec::with_capacity(self.vertex_count());
        let roots: Vec<VertexId> = self.vertex_ids().collect();

        for &root in roots.iter().rev() {
            if marks[root.index()] != Mark::Unvisited {
                continue;
            }
            marks[root.index()] = Mark::OnStack;
            let mut stack = vec![(root, self.successors(root))];

            while let Some(top) = stack.last_mut() {
                let u = top.0;
                match top.1.next() {
                    Some((v, _)) => match marks[v.index()] {
                        Mark::Unvisited => {
                            marks[v.index()] = Mark::OnStack;
                            stack.push((v, self.successors(v)));
                        }
                        Mark::OnStack => {
                            let mut cycle: Vec<VertexId> = stack
                                .iter()
                                .map(|&(w, _)| w)
                                .skip_while(|&w| w != v)
                                .collect();
                            cycle.push(v);
                            return Err(cycle);
                        }
                        Mark::Finished => {}
                    },
                    None => {
                        marks[u.index()] = Mark::Finished;
                        finished.push(u);
                        stack.pop();
                    }
                }
            }
        }

        finished.reverse();
        Ok(finished)
    }
}

impl<V: Label> Graph<V> {
    /// Returns every vertex in an order where each edge points forward.
    ///
    /// The order is fully determined by the graph and its insertion order.
    ///
    /// # Errors
    /// `NotAcyclic` if the graph has a cycle (self-loops included).
    pub fn topological_order(&self) -> Result<Vec<V>> {
        match self.depth_first_order() {
            Ok(order) => {
                debug!(vertices = order.len(), "topological order computed");
                Ok(self.labels_of(&order))
            }
            Err(cycle) => {
                warn!(cycle_len = cycle.len() - 1, "graph is not acyclic");
                Err(GraphError::NotAcyclic)
            }
        }
    }

    /// Returns `true` if the graph has no directed cycle.
    pub fn is_acyclic(&self) -> bool {
        self.depth_first_order().is_ok()
    }

    /// Returns a directed cycle if one exists, first vertex repeated at the
    /// end. A self-loop on `v` is reported as `[v, v]`.
    pub fn find_cycle(&self) -> Option<Vec<V>> {
        self.depth_first_order()
            .err()
            .map(|cycle| self.labels_of(&cycle))
    }
}
