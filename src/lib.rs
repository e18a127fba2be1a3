//! # `costgraph` - Directed Cost Graph Engine
//!
//! An in-memory directed graph with integer edge costs and a small set of
//! classic algorithms over it. Vertices are identified by caller-chosen labels;
//! at most one edge exists per ordered pair of vertices, and self-loops are
//! allowed.
//!
//! ## Guarantees
//!
//! ### Consistency
//! - **Atomic mutations**: every check runs before any state changes, so a
//!   failed call leaves the graph exactly as it was.
//! - **Mirrored adjacency**: each edge is listed once in its source's outbound
//!   list and once in its target's inbound list. [`Graph::validate_invariants`]
//!   checks this on demand.
//!
//! ### Determinism
//! - **Insertion order everywhere**: vertex enumeration, neighbor lists and
//!   edge enumeration all follow insertion order, and every algorithm iterates
//!   in that order. Equal-cost ties therefore resolve the same way on every run.
//!
//! ## Algorithms
//!
//! | Method | Question answered | Complexity |
//! |--------|-------------------|------------|
//! | [`Graph::shortest_path`] | fewest edges from `s` to `d` | `O(V + E)` |
//! | [`Graph::min_cost_walk`] | minimum total cost, negative costs allowed | `O(V · E)` |
//! | [`Graph::topological_order`] | an order in which every edge points forward | `O(V + E)` |
//! | [`Graph::highest_cost_path`] | maximum total cost in a DAG | `O(V + E)` |
//!
//! A missing path is not an error: path queries return
//! [`PathOutcome::NoPath`]. Errors are reserved for invalid input and
//! structural preconditions, see [`GraphError`].
//!
//! ## Example
//!
//! ```rust
//! use costgraph::{Graph, PathOutcome};
//!
//! let g: Graph<&str> = Graph::from_parts(
//!     ["A", "B", "C"],
//!     [("A", "B", 5), ("B", "C", 5), ("A", "C", 3)],
//! )
//! .unwrap();
//!
//! assert_eq!(g.topological_order().unwrap(), vec!["A", "B", "C"]);
//!
//! let cheapest = g.min_cost_walk(&"A", &"C").unwrap().found().unwrap();
//! assert_eq!((cheapest.vertices, cheapest.cost), (vec!["A", "C"], 3));
//!
//! let costliest = g.highest_cost_path(&"A", &"C").unwrap();
//! assert!(matches!(costliest, PathOutcome::Found(p) if p.cost == 10));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod io;

pub use error::{GraphError, Result};
pub use graph::{Cost, CostPath, Edges, Graph, HopPath, Label, Neighbors, PathOutcome, Vertices};
pub use io::{GraphSnapshot, LoadError, RandomGraphConfig};
