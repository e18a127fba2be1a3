//! Slot arena for edge records.
//!
//! Edges live in a flat vector of slots. Freed slots are threaded into a free
//! list and reused by the next allocation, so an edge index stays valid for as
//! long as the edge exists and the arena never grows past the peak edge count.

use super::{Cost, VertexId};

/// Index of an edge slot in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EdgeIdx(usize);

/// One directed, weighted edge. Endpoints are fixed at creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct EdgeRecord {
    pub(crate) source: VertexId,
    pub(crate) target: VertexId,
    pub(crate) cost: Cost,
}

#[derive(Clone, Debug)]
enum EdgeSlot {
    Occupied(EdgeRecord),
    Free(Option<usize>),
}

/// Arena of edge records with slot reuse.
#[derive(Clone, Debug, Default)]
pub(crate) struct EdgeStore {
    slots: Vec<EdgeSlot>,
    free_head: Option<usize>,
    len: usize,
}

impl EdgeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of live edges.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn alloc(&mut self, record: EdgeRecord) -> EdgeIdx {
        self.len += 1;
        if let Some(idx) = self.free_head {
            if let EdgeSlot::Free(next_free) = self.slots[idx] {
                self.free_head = next_free;
                self.slots[idx] = EdgeSlot::Occupied(record);
                return EdgeIdx(idx);
            }
            // A corrupt free list degrades to appending.
            self.free_head = None;
        }
        let idx = self.slots.len();
        self.slots.push(EdgeSlot::Occupied(record));
        EdgeIdx(idx)
    }

    /// Releases a slot, returning the record it held.
    pub(crate) fn free(&mut self, idx: EdgeIdx) -> Option<EdgeRecord> {
        let slot = self.slots.get_mut(idx.0)?;
        let EdgeSlot::Occupied(record) = *slot else {
            return None;
        };
        *slot = EdgeSlot::Free(self.free_head);
        self.free_head = Some(idx.0);
        self.len -= 1;
        Some(record)
    }

    pub(crate) fn get(&self, idx: EdgeIdx) -> Option<&EdgeRecord> {
        match self.slots.get(idx.0)? {
            EdgeSlot::Occupied(record) => Some(record),
            EdgeSlot::Free(_) => None,
        }
    }

    pub(crate) fn get_mut(&mut self, idx: EdgeIdx) -> Option<&mut EdgeRecord> {
        match self.slots.get_mut(idx.0)? {
            EdgeSlot::Occupied(record) => Some(record),
            EdgeSlot::Free(_) => None,
        }
    }

    /// Rewrites the endpoints of every live record, keeping slot positions.
    pub(crate) fn remap_endpoints(&mut self, mut remap: impl FnMut(VertexId) -> VertexId) {
        for slot in &mut self.slots {
            if let EdgeSlot::Occupied(record) = slot {
                record.source = remap(record.source);
                record.target = remap(record.target);
            }
        }
    }

    /// Live records in slot order (not insertion order).
    pub(crate) fn iter(&self) -> impl Iterator<Item = (EdgeIdx, &EdgeRecord)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| match slot {
            EdgeSlot::Occupied(record) => Some((EdgeIdx(i), record)),
            EdgeSlot::Free(_) => None,
        })
    }
}
