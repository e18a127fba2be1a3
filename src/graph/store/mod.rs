//! Vertex set and edge store.
//!
//! `Graph` is arena-shaped: a flat vertex table indexed by [`VertexId`], an
//! edge arena, a label index and a pair index. Adjacency is kept as per-vertex
//! lists of edge indices in both directions, so degrees are `O(1)` and
//! neighbor enumeration is `O(degree)`.
//!
//! Vertex ids are handed out in ascending order, so ascending id order is
//! insertion order, and every enumeration the store exposes (vertices,
//! neighbors, edges) follows it. A removed vertex leaves an empty slot. Once
//! empty slots outnumber live vertices by more than [`SLOT_SLACK`], the vertex
//! table is compacted: live vertices are renumbered densely in the same
//! relative order, so the table stays `O(V)` under add/remove churn.
//!
//! Vertical split:
//! - `edges`: edge arena with slot reuse
//! - `adjacency`: per-vertex ordered edge lists
//! - `iter`: vertex, neighbor and edge iteration
//! - `invariants`: structural consistency checks
//! - `tests`: module tests

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};

mod adjacency;
mod edges;
mod invariants;
mod iter;
#[cfg(test)]
mod tests;

use adjacency::VertexSlot;
use edges::{EdgeIdx, EdgeRecord, EdgeStore};
pub use iter::{Edges, Neighbors, Vertices};

/// Empty vertex slots tolerated beyond the live vertex count before compaction.
const SLOT_SLACK: usize = 16;

/// Integer edge cost. May be negative.
pub type Cost = i64;

/// Requirements on vertex labels: comparable, hashable, printable.
pub trait Label: Clone + Eq + Hash + fmt::Display {}

impl<T> Label for T where T: Clone + Eq + Hash + fmt::Display {}

/// Stable arena index of a vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct VertexId(usize);

impl VertexId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// A directed graph with integer edge costs.
///
/// At most one edge exists per ordered pair of vertices; self-loops are
/// allowed. A failed mutation leaves the graph untouched.
///
/// `Clone` (and [`Graph::copy`]) produce a fully independent graph.
///
/// ```
/// use costgraph::{Graph, PathOutcome};
///
/// let mut g = Graph::new();
/// for v in ["a", "b", "c"] {
///     g.add_vertex(v.to_string()).unwrap();
/// }
/// g.add_edge(&"a".to_string(), &"b".to_string(), 4).unwrap();
/// g.add_edge(&"b".to_string(), &"c".to_string(), -1).unwrap();
///
/// assert_eq!(g.out_degree(&"a".to_string()), Ok(1));
/// let walk = g.min_cost_walk(&"a".to_string(), &"c".to_string()).unwrap();
/// assert!(matches!(walk, PathOutcome::Found(p) if p.cost == 3));
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V> {
    slots: Vec<Option<VertexSlot<V>>>,
    index: HashMap<V, VertexId>,
    edges: EdgeStore,
    pairs: HashMap<(VertexId, VertexId), EdgeIdx>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            edges: EdgeStore::new(),
            pairs: HashMap::new(),
        }
    }
}

impl<V> Graph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices::new(&self.slots, self.vertex_count())
    }

    /// All edges as `(source, target, cost)`: sources in insertion order, each
    /// source's out-edges in insertion order.
    pub fn edges(&self) -> Edges<'_, V> {
        Edges::new(self)
    }

    // ----- id-level access used by the algorithms -----

    /// Upper bound (exclusive) on vertex id indices; sizes dense per-vertex
    /// tables. At most `2 * vertex_count() + SLOT_SLACK`.
    #[inline]
    pub(crate) fn slot_bound(&self) -> usize {
        self.slots.len()
    }

    /// Live vertex ids in insertion order.
    pub(crate) fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| VertexId::new(i)))
    }

    /// Out-edges of `id` as `(target, cost)` in insertion order.
    pub(crate) fn successors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, Cost)> + '_ {
        self.slot(id).into_iter().flat_map(move |slot| {
            slot.outbound.iter().filter_map(move |&edge| {
                let record = self.edges.get(edge)?;
                Some((record.target, record.cost))
            })
        })
    }

    pub(crate) fn label(&self, id: VertexId) -> Option<&V> {
        self.slot(id).map(|slot| &slot.label)
    }

    /// Clones the labels of a sequence of ids.
    pub(crate) fn labels_of(&self, ids: &[VertexId]) -> Vec<V>
    where
        V: Clone,
    {
        ids.iter().filter_map(|&id| self.label(id).cloned()).collect()
    }

    fn slot(&self, id: VertexId) -> Option<&VertexSlot<V>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut VertexSlot<V>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }
}

impl<V: Label> Graph<V> {
    /// Builds a graph from a vertex list and `(source, target, cost)` triples.
    ///
    /// # Errors
    /// `VertexExists` for a repeated label, `NonexistentVertex` for a triple
    /// naming an unknown vertex, `EdgeExists` for a repeated pair.
    pub fn from_parts<I, E>(vertices: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V, Cost)>,
    {
        let mut graph = Self::new();
        for label in vertices {
            graph.add_vertex(label)?;
        }
        for (source, target, cost) in edges {
            graph.add_edge(&source, &target, cost)?;
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph assembled"
        );
        Ok(graph)
    }

    /// Deep copy. Mutating either graph never affects the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns `true` if `label` is a vertex.
    pub fn contains_vertex(&self, label: &V) -> bool {
        self.index.contains_key(label)
    }

    /// Adds an isolated vertex at the end of the vertex order.
    ///
    /// # Errors
    /// `VertexExists` if the label is already present.
    pub fn add_vertex(&mut self, label: V) -> Result<()> {
        if self.index.contains_key(&label) {
            return Err(GraphError::vertex_exists(&label));
        }
        let id = VertexId::new(self.slots.len());
        trace!(vertex = %label, id = id.0, "add vertex");
        self.index.insert(label.clone(), id);
        self.slots.push(Some(VertexSlot::new(label)));
        Ok(())
    }

    /// Removes a vertex and every edge incident to it.
    ///
    /// # Errors
    /// `NonexistentVertex` if the label is absent.
    pub fn remove_vertex(&mut self, label: &V) -> Result<()> {
        let id = self.require(label)?;
        let slot = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or_else(|| GraphError::nonexistent_vertex(label))?;
        self.index.remove(label);

        for &edge in &slot.outbound {
            if let Some(record) = self.edges.free(edge) {
                self.pairs.remove(&(record.source, record.target));
                if let Some(target) = self.slot_mut(record.target) {
                    target.unlink_inbound(edge);
                }
            }
        }
        // Self-loops were released with the outbound list and are skipped here.
        for &edge in &slot.inbound {
            if let Some(record) = self.edges.free(edge) {
                self.pairs.remove(&(record.source, record.target));
                if let Some(source) = self.slot_mut(record.source) {
                    source.unlink_outbound(edge);
                }
            }
        }

        trace!(
            vertex = %label,
            outbound = slot.outbound.len(),
            inbound = slot.inbound.len(),
            "remove vertex"
        );
        debug_assert_eq!(self.pairs.len(), self.edges.len());
        self.compact_if_sparse();
        Ok(())
    }

    /// Drops empty vertex slots once they outnumber live vertices by more than
    /// [`SLOT_SLACK`]. Relative id order, and with it every enumeration order,
    /// is unchanged.
    fn compact_if_sparse(&mut self) {
        let live = self.index.len();
        let empty = self.slots.len().saturating_sub(live);
        if empty <= live + SLOT_SLACK {
            return;
        }

        let mut renumbered = vec![None; self.slots.len()];
        let mut kept = Vec::with_capacity(live);
        for (old, slot) in self.slots.drain(..).enumerate() {
            if slot.is_some() {
                renumbered[old] = Some(VertexId::new(kept.len()));
                kept.push(slot);
            }
        }
        self.slots = kept;

        let moved = |id: VertexId| renumbered.get(id.0).copied().flatten().unwrap_or(id);
        for id in self.index.values_mut() {
            *id = moved(*id);
        }
        self.edges.remap_endpoints(moved);
        self.pairs = self
            .pairs
            .drain()
            .map(|((source, target), edge)| ((moved(source), moved(target)), edge))
            .collect();
        debug!(live, reclaimed = empty, "compacted vertex table");
    }

    /// Adds the edge `source -> target`.
    ///
    /// # Errors
    /// `NonexistentVertex` if an endpoint is absent, `EdgeExists` if the pair
    /// already has an edge.
    pub fn add_edge(&mut self, source: &V, target: &V, cost: Cost) -> Result<()> {
        let key = self.require_pair(source, target)?;
        if self.pairs.contains_key(&key) {
            return Err(GraphError::edge_exists(source, target));
        }
        let (s, t) = key;
        let edge = self.edges.alloc(EdgeRecord {
            source: s,
            target: t,
            cost,
        });
        self.pairs.insert(key, edge);
        if let Some(slot) = self.slot_mut(s) {
            slot.outbound.push(edge);
        }
        if let Some(slot) = self.slot_mut(t) {
            slot.inbound.push(edge);
        }
        trace!(source = %source, target = %target, cost, "add edge");
        debug_assert_eq!(self.pairs.len(), self.edges.len());
        Ok(())
    }

    /// Removes the edge `source -> target`, returning its cost.
    ///
    /// # Errors
    /// `NonexistentVertex` if an endpoint is absent, `NonexistentEdge` if the
    /// pair has no edge.
    pub fn remove_edge(&mut self, source: &V, target: &V) -> Result<Cost> {
        let key = self.require_pair(source, target)?;
        let edge = self
            .pairs
            .remove(&key)
            .ok_or_else(|| GraphError::nonexistent_edge(source, target))?;
        let record = self
            .edges
            .free(edge)
            .ok_or_else(|| GraphError::nonexistent_edge(source, target))?;
        if let Some(slot) = self.slot_mut(record.source) {
            slot.unlink_outbound(edge);
        }
        if let Some(slot) = self.slot_mut(record.target) {
            slot.unlink_inbound(edge);
        }
        trace!(source = %source, target = %target, "remove edge");
        Ok(record.cost)
    }

    /// Overwrites the cost of `source -> target`, returning the previous cost.
    /// Edge identity and adjacency order are unchanged.
    ///
    /// # Errors
    /// `NonexistentVertex` if an endpoint is absent, `NonexistentEdge` if the
    /// pair has no edge.
    pub fn update_edge(&mut self, source: &V, target: &V, cost: Cost) -> Result<Cost> {
        let edge = self.edge_index(source, target)?;
        let record = self
            .edges
            .get_mut(edge)
            .ok_or_else(|| GraphError::nonexistent_edge(source, target))?;
        let previous = core::mem::replace(&mut record.cost, cost);
        trace!(source = %source, target = %target, previous, cost, "update edge");
        Ok(previous)
    }

    /// Returns whether `source -> target` is an edge.
    ///
    /// # Errors
    /// `NonexistentVertex` if an endpoint is absent.
    pub fn is_edge(&self, source: &V, target: &V) -> Result<bool> {
        let key = self.require_pair(source, target)?;
        Ok(self.pairs.contains_key(&key))
    }

    /// Cost of the edge `source -> target`.
    ///
    /// # Errors
    /// `NonexistentVertex` if an endpoint is absent, `NonexistentEdge` if the
    /// pair has no edge.
    pub fn cost(&self, source: &V, target: &V) -> Result<Cost> {
        let edge = self.edge_index(source, target)?;
        self.edges
            .get(edge)
            .map(|record| record.cost)
            .ok_or_else(|| GraphError::nonexistent_edge(source, target))
    }

    /// Number of edges ending at `label`.
    ///
    /// # Errors
    /// `NonexistentVertex` if the label is absent.
    pub fn in_degree(&self, label: &V) -> Result<usize> {
        Ok(self.slot_of(label)?.inbound.len())
    }

    /// Number of edges starting at `label`.
    ///
    /// # Errors
    /// `NonexistentVertex` if the label is absent.
    pub fn out_degree(&self, label: &V) -> Result<usize> {
        Ok(self.slot_of(label)?.outbound.len())
    }

    /// Sources of edges ending at `label`, with costs, in insertion order.
    ///
    /// # Errors
    /// `NonexistentVertex` if the label is absent.
    pub fn in_neighbors(&self, label: &V) -> Result<Neighbors<'_, V>> {
        let slot = self.slot_of(label)?;
        Ok(Neighbors::inbound(self, &slot.inbound))
    }

    /// Targets of edges starting at `label`, with costs, in insertion order.
    ///
    /// # Errors
    /// `NonexistentVertex` if the label is absent.
    pub fn out_neighbors(&self, label: &V) -> Result<Neighbors<'_, V>> {
        let slot = self.slot_of(label)?;
        Ok(Neighbors::outbound(self, &slot.outbound))
    }

    /// Resolves a label to its id.
    pub(crate) fn require(&self, label: &V) -> Result<VertexId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::nonexistent_vertex(label))
    }

    fn require_pair(&self, source: &V, target: &V) -> Result<(VertexId, VertexId)> {
        Ok((self.require(source)?, self.require(target)?))
    }

    fn slot_of(&self, label: &V) -> Result<&VertexSlot<V>> {
        let id = self.require(label)?;
        self.slot(id)
            .ok_or_else(|| GraphError::nonexistent_vertex(label))
    }

    fn edge_index(&self, source: &V, target: &V) -> Result<EdgeIdx> {
        let key = self.require_pair(source, target)?;
        self.pairs
            .get(&key)
            .copied()
            .ok_or_else(|| GraphError::nonexistent_edge(source, target))
    }
}
