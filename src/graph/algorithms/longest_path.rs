//! Highest-cost path in a DAG by dynamic programming over a topological order.

use tracing::debug;

use super::{narrow, trace_back, CostPath, PathOutcome, Total};
use crate::error::{GraphError, Result};
use crate::graph::store::{Graph, Label, VertexId};

impl<V: Label> Graph<V> {
    /// Finds the path from `source` to `destination` with the highest total
    /// cost.
    ///
    /// Vertices are processed once in topological order; every path into `v`
    /// only passes through vertices earlier in that order, so a single
    /// forward pass settles each `best[v]`. Ties keep the first predecessor
    /// found.
    ///
    /// # Errors
    /// `NonexistentVertex` if either endpoint is absent; `NotADag` if the
    /// graph has a cycle; `CostOverflow` if the highest cost does not fit in
    /// a [`Cost`](crate::Cost).
    pub fn highest_cost_path(&self, source: &V, destination: &V) -> Result<PathOutcome<CostPath<V>>> {
        let s = self.require(source)?;
        let d = self.require(destination)?;
        let order = self.depth_first_order().map_err(|_| GraphError::NotADag)?;

        let n = self.slot_bound();
        let mut best: Vec<Option<Total>> = vec![None; n];
        let mut pred: Vec<Option<VertexId>> = vec![None; n];
        best[s.index()] = Some(0);

        for &u in order.iter().skip_while(|&&u| u != s) {
            let Some(bu) = best[u.index()] else {
                continue;
            };
            for (v, cost) in self.successors(u) {
                let candidate = bu.saturating_add(Total::from(cost));
                if best[v.index()].map_or(true, |bv| candidate > bv) {
                    best[v.index()] = Some(candidate);
                    pred[v.index()] = Some(u);
                }
            }
        }

        let outcome = match (best[d.index()], trace_back(&pred, s, d)) {
            (Some(total), Some(ids)) => PathOutcome::Found(CostPath {
                vertices: self.labels_of(&ids),
                cost: narrow(total, source, destination)?,
            }),
            _ => PathOutcome::NoPath,
        };
        debug!(
            source = %source,
            destination = %destination,
            cost = outcome.as_ref().map(|p| p.cost),
            "highest-cost path finished"
        );
        Ok(outcome)
    }
}
