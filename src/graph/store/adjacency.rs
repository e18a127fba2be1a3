//! Per-vertex adjacency: label plus ordered outbound and inbound edge lists.

use super::edges::EdgeIdx;

/// A live vertex. Both lists hold edge indices in insertion order.
#[derive(Clone, Debug)]
pub(crate) struct VertexSlot<V> {
    pub(crate) label: V,
    pub(crate) outbound: Vec<EdgeIdx>,
    pub(crate) inbound: Vec<EdgeIdx>,
}

impl<V> VertexSlot<V> {
    pub(crate) fn new(label: V) -> Self {
        Self {
            label,
            outbound: Vec::new(),
            inbound: Vec::new(),
        }
    }

    /// Removes `edge` from the outbound list, keeping the order of the rest.
    pub(crate) fn unlink_outbound(&mut self, edge: EdgeIdx) -> bool {
        unlink(&mut self.outbound, edge)
    }

    /// Removes `edge` from the inbound list, keeping the order of the rest.
    pub(crate) fn unlink_inbound(&mut self, edge: EdgeIdx) -> bool {
        unlink(&mut self.inbound, edge)
    }
}

fn unlink(list: &mut Vec<EdgeIdx>, edge: EdgeIdx) -> bool {
    match list.iter().position(|&e| e == edge) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
