//! Path-finding and ordering algorithms over [`Graph`](crate::Graph).
//!
//! Each algorithm is an inherent method on `Graph` defined in its own module:
//! - `bfs`: fewest-hops path ([`Graph::shortest_path`](crate::Graph::shortest_path))
//! - `bellman_ford`: minimum-cost walk with negative costs
//!   ([`Graph::min_cost_walk`](crate::Graph::min_cost_walk))
//! - `topo`: acyclicity check and topological order
//!   ([`Graph::topological_order`](crate::Graph::topological_order))
//! - `longest_path`: highest-cost path in a DAG
//!   ([`Graph::highest_cost_path`](crate::Graph::highest_cost_path))
//!
//! Algorithms only read the store. Their per-vertex state lives in dense
//! vectors indexed by vertex id, and every loop follows the store's insertion
//! order, so ties always resolve the same way.
//!
//! Cost sums are accumulated as [`Total`] (`i128`) and narrowed back to
//! [`Cost`] only for the reported answer, so no intermediate distance is
//! clamped or wrapped at the `i64` bounds.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::store::{Cost, VertexId};

mod bellman_ford;
mod bfs;
mod longest_path;
mod topo;

/// Result of a path query between two existing vertices.
///
/// "No path" is an ordinary answer, distinct from every [`GraphError`](crate::GraphError).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "path", rename_all = "snake_case")]
pub enum PathOutcome<P> {
    /// The destination is reachable.
    Found(P),
    /// The destination is not reachable from the source.
    NoPath,
}

impl<P> PathOutcome<P> {
    /// Returns `true` for [`PathOutcome::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Converts into an `Option`, discarding the no-path distinction.
    pub fn found(self) -> Option<P> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }

    /// Borrows the path if one was found.
    pub fn as_ref(&self) -> Option<&P> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }
}

/// A path measured in edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopPath<V> {
    /// Vertices from source to destination, inclusive.
    pub vertices: Vec<V>,
    /// Number of edges on the path.
    pub length: usize,
}

/// A path measured by total edge cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPath<V> {
    /// Vertices from source to destination, inclusive.
    pub vertices: Vec<V>,
    /// Sum of the edge costs along the path.
    pub cost: Cost,
}

/// Running cost total. Any path of fewer than `2^64` edges sums to well
/// inside this range.
pub(crate) type Total = i128;

/// Converts a finished total into a reported [`Cost`].
pub(crate) fn narrow(total: Total, source: impl ToString, destination: impl ToString) -> Result<Cost> {
    Cost::try_from(total).map_err(|_| GraphError::cost_overflow(source, destination))
}

/// Follows predecessor links from `destination` back to `source`.
///
/// Returns `None` if the chain breaks or loops, which would mean the
/// predecessor table was not produced by a finished search.
pub(crate) fn trace_back(
    pred: &[Option<VertexId>],
    source: VertexId,
    destination: VertexId,
) -> Option<Vec<VertexId>> {
    let mut path = vec![destination];
    let mut cur = destination;
    while cur != source {
        cur = pred.get(cur.index()).copied().flatten()?;
        path.push(cur);
        if path.len() > pred.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}
