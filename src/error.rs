//! Error taxonomy for graph mutations, queries and algorithms.
//!
//! Every variant is an ordinary, recoverable outcome. "No path between two
//! valid vertices" is not an error: algorithms report it through
//! [`PathOutcome::NoPath`](crate::PathOutcome::NoPath).

use thiserror::Error;

/// Errors reported by the graph engine.
///
/// Vertex labels are carried in their `Display` rendering so the error type
/// stays independent of the label type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex with this label is already present.
    #[error("vertex already exists: {0}")]
    VertexExists(String),

    /// No vertex with this label is present.
    #[error("vertex does not exist: {0}")]
    NonexistentVertex(String),

    /// An edge with these endpoints is already present.
    #[error("edge already exists: {from} -> {to}")]
    EdgeExists {
        /// Source label.
        from: String,
        /// Target label.
        to: String,
    },

    /// No edge with these endpoints is present.
    #[error("edge does not exist: {from} -> {to}")]
    NonexistentEdge {
        /// Source label.
        from: String,
        /// Target label.
        to: String,
    },

    /// A random graph was requested with more edges than ordered vertex pairs.
    #[error("cannot place {edges} distinct edges over {vertices} vertices (at most vertices^2)")]
    InvalidEdgeCount {
        /// Requested vertex count.
        vertices: usize,
        /// Requested edge count.
        edges: usize,
    },

    /// A random graph was requested with an empty cost range.
    #[error("invalid cost range: {min} > {max}")]
    InvalidCostRange {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// A topological order was requested on a graph containing a cycle.
    #[error("graph contains a cycle, no topological order exists")]
    NotAcyclic,

    /// A longest path was requested on a graph that is not a DAG.
    #[error("highest-cost path requires a directed acyclic graph")]
    NotADag,

    /// A negative-cost cycle is reachable from the given source.
    #[error("negative-cost cycle reachable from {0}")]
    NegativeCycleDetected(String),

    /// The total cost of the answer lies outside the range of [`Cost`](crate::Cost).
    #[error("cost of the path from {from} to {to} does not fit in 64 bits")]
    CostOverflow {
        /// Source label.
        from: String,
        /// Destination label.
        to: String,
    },
}

impl GraphError {
    pub(crate) fn vertex_exists(label: impl ToString) -> Self {
        Self::VertexExists(label.to_string())
    }

    pub(crate) fn nonexistent_vertex(label: impl ToString) -> Self {
        Self::NonexistentVertex(label.to_string())
    }

    pub(crate) fn edge_exists(source: impl ToString, target: impl ToString) -> Self {
        Self::EdgeExists {
            from: source.to_string(),
            to: target.to_string(),
        }
    }

    pub(crate) fn cost_overflow(source: impl ToString, destination: impl ToString) -> Self {
        Self::CostOverflow {
            from: source.to_string(),
            to: destination.to_string(),
        }
    }

    pub(crate) fn nonexistent_edge(source: impl ToString, target: impl ToString) -> Self {
        Self::NonexistentEdge {
            from: source.to_string(),
            to: target.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_labels() {
        assert_eq!(
            GraphError::vertex_exists("a").to_string(),
            "vertex already exists: a"
        );
        assert_eq!(
            GraphError::nonexistent_edge("a", "b").to_string(),
            "edge does not exist: a -> b"
        );
        assert_eq!(
            GraphError::NegativeCycleDetected("s".into()).to_string(),
            "negative-cost cycle reachable from s"
        );
        assert_eq!(
            GraphError::cost_overflow("s", "t").to_string(),
            "cost of the path from s to t does not fit in 64 bits"
        );
    }
}
