//! Directed cost graph and the algorithms that run over it.
//!
//! The graph is organized into two layers:
//! - `store`: vertex set and edge store, the only mutable state
//! - `algorithms`: read-only path and ordering queries implemented on the store

pub(crate) mod algorithms;
pub(crate) mod store;

pub use algorithms::{CostPath, HopPath, PathOutcome};
pub use store::{Cost, Edges, Graph, Label, Neighbors, Vertices};
