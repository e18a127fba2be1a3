//! Breadth-first search for the path with the fewest edges.

use std::collections::VecDeque;

use tracing::debug;

use super::{trace_back, HopPath, PathOutcome};
use crate::error::Result;
use crate::graph::store::{Graph, Label};

impl<V: Label> Graph<V> {
    /// Finds a path from `source` to `destination` with the fewest edges.
    ///
    /// Costs are ignored. The frontier is FIFO and neighbors are expanded in
    /// insertion order, so the parent of every vertex, and with it the returned
    /// path, is the same on every run. `source == destination` yields the
    /// single-vertex path of length 0.
    ///
    /// # Errors
    /// `NonexistentVertex` if either endpoint is absent.
    pub fn shortest_path(&self, source: &V, destination: &V) -> Result<PathOutcome<HopPath<V>>> {
        let s = self.require(source)?;
        let d = self.require(destination)?;

        let n = self.slot_bound();
        let mut visited = vec![false; n];
        let mut pred = vec![None; n];
        let mut queue = VecDeque::new();

        visited[s.index()] = true;
        queue.push_back(s);

        while let Some(u) = queue.pop_front() {
            if u == d {
                break;
            }
            for (v, _) in self.successors(u) {
                if !visited[v.index()] {
                    visited[v.index()] = true;
                    pred[v.index()] = Some(u);
                    queue.push_back(v);
                }
            }
        }

        let outcome = match trace_back(&pred, s, d).filter(|_| visited[d.index()]) {
            Some(ids) => PathOutcome::Found(HopPath {
                length: ids.len() - 1,
                vertices: self.labels_of(&ids),
            }),
            None => PathOutcome::NoPath,
        };
        debug!(
            source = %source,
            destination = %destination,
            hops = outcome.as_ref().map(|p| p.length),
            "bfs finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cost, Graph, HopPath, PathOutcome};

    fn weighted(vertices: &[&str], edges: &[(&str, &str, Cost)]) -> Graph<String> {
        Graph::from_parts(
            vertices.iter().map(|v| v.to_string()),
            edges.iter().map(|(a, b, c)| (a.to_string(), b.to_string(), *c)),
        )
        .unwrap()
    }

    fn graph(vertices: &[&str], edges: &[(&str, &str)]) -> Graph<String> {
        let edges: Vec<_> = edges.iter().map(|&(a, b)| (a, b, 1)).collect();
        weighted(vertices, &edges)
    }

    fn path(g: &Graph<String>, a: &str, b: &str) -> PathOutcome<HopPath<String>> {
        g.shortest_path(&a.to_string(), &b.to_string()).unwrap()
    }

    #[test]
    fn prefers_fewer_hops_over_lower_cost() {
        let g = weighted(&["a", "b", "c"], &[("a", "b", 1), ("b", "c", 1), ("a", "c", 50)]);
        let found = path(&g, "a", "c").found().unwrap();
        assert_eq!(found.vertices, vec!["a", "c"]);
        assert_eq!(found.length, 1);
    }

    #[test]
    fn ties_resolve_by_insertion_order() {
        // a -> {x, y} -> z ; x inserted first
        let g = graph(
            &["a", "x", "y", "z"],
            &[("a", "x"), ("a", "y"), ("y", "z"), ("x", "z")],
        );
        assert_eq!(path(&g, "a", "z").found().unwrap().vertices, vec!["a", "x", "z"]);
    }

    #[test]
    fn same_vertex_is_trivial_path() {
        let g = graph(&["a"], &[]);
        assert_eq!(
            path(&g, "a", "a"),
            PathOutcome::Found(HopPath {
                vertices: vec!["a".to_string()],
                length: 0
            })
        );
    }

    #[test]
    fn unreachable_is_no_path_not_error() {
        let g = graph(&["a", "b", "c"], &[("b", "a"), ("a", "c")]);
        assert_eq!(path(&g, "a", "b"), PathOutcome::NoPath);
        assert_eq!(path(&g, "c", "a"), PathOutcome::NoPath);
    }

    #[test]
    fn missing_vertex_is_an_error() {
        let g = graph(&["a"], &[]);
        assert!(g.shortest_path(&"a".to_string(), &"nope".to_string()).is_err());
    }
}
