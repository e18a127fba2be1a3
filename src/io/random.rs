//! Seeded random graph generation.

use rand::rngs::StdRng;
use rand::{seq::index, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Cost, Graph};

const fn default_min_cost() -> Cost {
    0
}

const fn default_max_cost() -> Cost {
    100
}

/// Parameters of a random graph.
///
/// Vertices are labelled `"0"` to `"n-1"`. Edges are `edges` distinct ordered
/// pairs drawn uniformly from all `vertices²` pairs (self-loops included),
/// each with a cost drawn uniformly from `min_cost..=max_cost`.
///
/// Deserializes from JSON such as `{"vertices": 10, "edges": 25, "seed": 7}`;
/// the cost range defaults to `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of distinct edges.
    pub edges: usize,
    /// Smallest edge cost, inclusive.
    #[serde(default = "default_min_cost")]
    pub min_cost: Cost,
    /// Largest edge cost, inclusive.
    #[serde(default = "default_max_cost")]
    pub max_cost: Cost,
    /// Fixed seed for a reproducible graph; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RandomGraphConfig {
    /// `vertices` and `edges` with the default cost range and no seed.
    pub fn new(vertices: usize, edges: usize) -> Self {
        Self {
            vertices,
            edges,
            min_cost: default_min_cost(),
            max_cost: default_max_cost(),
            seed: None,
        }
    }

    /// Sets the inclusive cost range.
    #[must_use]
    pub fn with_costs(mut self, min_cost: Cost, max_cost: Cost) -> Self {
        self.min_cost = min_cost;
        self.max_cost = max_cost;
        self
    }

    /// Fixes the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of ordered vertex pairs, or `None` on overflow.
    fn pair_count(&self) -> Option<usize> {
        self.vertices.checked_mul(self.vertices)
    }

    /// Builds the graph. Edges are inserted in ascending `(source, target)`
    /// order.
    ///
    /// # Errors
    /// `InvalidEdgeCount` if `edges > vertices²`, `InvalidCostRange` if
    /// `min_cost > max_cost`.
    pub fn generate(&self) -> Result<Graph<String>> {
        let invalid_count = || GraphError::InvalidEdgeCount {
            vertices: self.vertices,
            edges: self.edges,
        };
        let pairs = self.pair_count().ok_or_else(invalid_count)?;
        if self.edges > pairs {
            return Err(invalid_count());
        }
        if self.min_cost > self.max_cost {
            return Err(GraphError::InvalidCostRange {
                min: self.min_cost,
                max: self.max_cost,
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut graph = Graph::new();
        for v in 0..self.vertices {
            graph.add_vertex(v.to_string())?;
        }
        if self.edges == 0 {
            return Ok(graph);
        }

        let mut chosen = index::sample(&mut rng, pairs, self.edges).into_vec();
        chosen.sort_unstable();
        for pair in chosen {
            let source = (pair / self.vertices).to_string();
            let target = (pair % self.vertices).to_string();
            let cost = rng.gen_range(self.min_cost..=self.max_cost);
            graph.add_edge(&source, &target, cost)?;
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            seed = self.seed,
            "random graph generated"
        );
        Ok(graph)
    }
}
