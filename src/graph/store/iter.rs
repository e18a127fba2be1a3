//! Ordered iteration over vertices, neighbors and edges.

use core::iter::FusedIterator;
use core::slice;

use super::adjacency::VertexSlot;
use super::edges::EdgeIdx;
use super::{Cost, Graph};

/// Vertex labels in insertion order.
pub struct Vertices<'a, V> {
    slots: slice::Iter<'a, Option<VertexSlot<V>>>,
    remaining: usize,
}

impl<'a, V> Vertices<'a, V> {
    pub(super) fn new(slots: &'a [Option<VertexSlot<V>>], live: usize) -> Self {
        Self {
            slots: slots.iter(),
            remaining: live,
        }
    }
}

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.by_ref().find_map(Option::as_ref)?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&slot.label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {}
impl<V> FusedIterator for Vertices<'_, V> {}

#[derive(Copy, Clone)]
enum Direction {
    Outbound,
    Inbound,
}

/// `(neighbor, cost)` pairs of one vertex, in edge insertion order.
///
/// Adjacency entries whose edge or neighbor is no longer live are skipped.
pub struct Neighbors<'a, V> {
    graph: &'a Graph<V>,
    edges: slice::Iter<'a, EdgeIdx>,
    direction: Direction,
}

impl<'a, V> Neighbors<'a, V> {
    pub(super) fn outbound(graph: &'a Graph<V>, edges: &'a [EdgeIdx]) -> Self {
        Self {
            graph,
            edges: edges.iter(),
            direction: Direction::Outbound,
        }
    }

    pub(super) fn inbound(graph: &'a Graph<V>, edges: &'a [EdgeIdx]) -> Self {
        Self {
            graph,
            edges: edges.iter(),
            direction: Direction::Inbound,
        }
    }
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = (&'a V, Cost);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let direction = self.direction;
        self.edges.by_ref().find_map(|&edge| {
            let record = graph.edges.get(edge)?;
            let other = match direction {
                Direction::Outbound => record.target,
                Direction::Inbound => record.source,
            };
            Some((graph.label(other)?, record.cost))
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {}
impl<V> FusedIterator for Neighbors<'_, V> {}

/// Every edge as `(source, target, cost)`, grouped by source in vertex order.
pub struct Edges<'a, V> {
    graph: &'a Graph<V>,
    slots: slice::Iter<'a, Option<VertexSlot<V>>>,
    current: Option<(&'a V, slice::Iter<'a, EdgeIdx>)>,
    remaining: usize,
}

impl<'a, V> Edges<'a, V> {
    pub(super) fn new(graph: &'a Graph<V>) -> Self {
        Self {
            graph,
            slots: graph.slots.iter(),
            current: None,
            remaining: graph.edge_count(),
        }
    }
}

impl<'a, V> Iterator for Edges<'a, V> {
    type Item = (&'a V, &'a V, Cost);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            if let Some((source, outbound)) = &mut self.current {
                let source = *source;
                let next = outbound.find_map(|&edge| {
                    let record = graph.edges.get(edge)?;
                    Some((source, graph.label(record.target)?, record.cost))
                });
                if next.is_some() {
                    self.remaining = self.remaining.saturating_sub(1);
                    return next;
                }
            }
            let slot = self.slots.by_ref().find_map(Option::as_ref)?;
            self.current = Some((&slot.label, slot.outbound.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Edges<'_, V> {}
impl<V> FusedIterator for Edges<'_, V> {}
