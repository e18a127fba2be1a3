//! Structural consistency checks.
//!
//! The store maintains four invariants after every public operation:
//! 1. every edge's endpoints are live vertices;
//! 2. no two edges share an ordered endpoint pair;
//! 3. each vertex's outbound/inbound lists mirror the edge set exactly;
//! 4. no edge survives the removal of one of its endpoints.
//!
//! (4) is a consequence of (1); it is checked through it.

use tracing::warn;

use super::{Graph, Label, VertexId};

#[inline]
fn violated(reason: &str) -> bool {
    warn!(reason, "graph invariant violated");
    false
}

impl<V: Label> Graph<V> {
    /// Checks every structural invariant, returning `false` (and logging the
    /// first violation) if any fails. Runs in `O(V + E·d)` where `d` is the
    /// largest degree.
    pub fn validate_invariants(&self) -> bool {
        let live = self.vertex_ids().count();
        if live != self.index.len() {
            return violated("label index and vertex table disagree on vertex count");
        }
        for (label, &id) in &self.index {
            if self.label(id) != Some(label) {
                return violated("label index points at a different or removed slot");
            }
        }

        if self.pairs.len() != self.edges.len() {
            return violated("pair index and edge arena disagree on edge count");
        }

        for (edge, record) in self.edges.iter() {
            let (Some(source), Some(target)) = (self.slot(record.source), self.slot(record.target))
            else {
                return violated("edge endpoint is not a live vertex");
            };
            if self.pairs.get(&(record.source, record.target)) != Some(&edge) {
                return violated("edge is missing from the pair index or duplicates a pair");
            }
            if source.outbound.iter().filter(|&&e| e == edge).count() != 1 {
                return violated("edge is not listed exactly once as outbound of its source");
            }
            if target.inbound.iter().filter(|&&e| e == edge).count() != 1 {
                return violated("edge is not listed exactly once as inbound of its target");
            }
        }

        let mut outbound_total = 0;
        let mut inbound_total = 0;
        for id in self.vertex_ids() {
            let Some(slot) = self.slot(id) else {
                return violated("live vertex id without a slot");
            };
            outbound_total += slot.outbound.len();
            inbound_total += slot.inbound.len();
            if !self.lists_point_at(id, &slot.outbound, |r| r.source)
                || !self.lists_point_at(id, &slot.inbound, |r| r.target)
            {
                return violated("adjacency list holds an edge of another vertex");
            }
        }
        if outbound_total != self.edges.len() || inbound_total != self.edges.len() {
            return violated("adjacency lists do not account for every edge exactly once");
        }

        true
    }

    fn lists_point_at(
        &self,
        id: VertexId,
        list: &[super::EdgeIdx],
        endpoint: impl Fn(&super::EdgeRecord) -> VertexId,
    ) -> bool {
        list.iter()
            .all(|&edge| self.edges.get(edge).is_some_and(|record| endpoint(record) == id))
    }
}
