//! Bellman-Ford minimum-cost walk with negative edge costs.
//!
//! Relax (at most `|V| - 1` rounds):
//!   for each u in vertex order, for each (u, v, cost) in u's out-edges:
//!     dist[v] = min(dist[v], dist[u] + cost)
//!
//! Negative cycle check (one more pass): if any edge still relaxes, a cycle of
//! negative total cost is reachable from the source and no minimum exists.
//!
//! Complexity: `O(V · E)`.

use tracing::{debug, trace, warn};

use super::{narrow, trace_back, CostPath, PathOutcome, Total};
use crate::error::{GraphError, Result};
use crate::graph::store::{Graph, Label, VertexId};

impl<V: Label> Graph<V> {
    /// Finds the minimum total cost over all walks from `source` to
    /// `destination`. Edge costs may be negative.
    ///
    /// Without a reachable negative cycle the cheapest walk never repeats a
    /// vertex, so the returned vertex sequence is a simple path. Distances are
    /// summed in 128 bits, so costs near the `i64` bounds neither wrap nor hide
    /// a negative cycle.
    ///
    /// # Errors
    /// `NonexistentVertex` if either endpoint is absent;
    /// `NegativeCycleDetected` if a negative-cost cycle is reachable from
    /// `source`, whether or not it lies on a walk to `destination`;
    /// `CostOverflow` if the minimum cost does not fit in a [`Cost`](crate::Cost).
    pub fn min_cost_walk(&self, source: &V, destination: &V) -> Result<PathOutcome<CostPath<V>>> {
        let s = self.require(source)?;
        let d = self.require(destination)?;

        let n = self.slot_bound();
        let mut dist: Vec<Option<Total>> = vec![None; n];
        let mut pred: Vec<Option<VertexId>> = vec![None; n];
        dist[s.index()] = Some(0);

        let rounds = self.vertex_count().saturating_sub(1);
        for round in 0..rounds {
            let relaxed = self.relax_round(&mut dist, &mut pred);
            trace!(round, relaxed, "bellman-ford round");
            if relaxed == 0 {
                break;
            }
        }

        if self.still_relaxes(&dist) {
            warn!(source = %source, "negative-cost cycle reachable from source");
            return Err(GraphError::NegativeCycleDetected(source.to_string()));
        }

        let outcome = match (dist[d.index()], trace_back(&pred, s, d)) {
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
            "bellman-ford finished"
        );
        Ok(outcome)
    }

    /// One pass over every edge in store order. Returns the number of
    /// improvements made.
    fn relax_round(&self, dist: &mut [Option<Total>], pred: &mut [Option<VertexId>]) -> usize {
        let mut relaxed = 0;
        for u in self.vertex_ids() {
            let Some(du) = dist[u.index()] else {
                continue;
            };
            for (v, cost) in self.successors(u) {
                let candidate = du.saturating_add(Total::from(cost));
                if dist[v.index()].map_or(true, |dv| candidate < dv) {
                    dist[v.index()] = Some(candidate);
                    pred[v.index()] = Some(u);
                    relaxed += 1;
                }
            }
        }
        relaxed
    }

    fn still_relaxes(&self, dist: &[Option<Total>]) -> bool {
        self.vertex_ids().any(|u| {
            dist[u.index()].is_some_and(|du| {
                self.successors(u).any(|(v, cost)| {
                    let candidate = du.saturating_add(Total::from(cost));
                    dist[v.index()].map_or(true, |dv| candidate < dv)
                })
            })
        })
    }
}
