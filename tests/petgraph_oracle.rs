//! Algorithms checked against petgraph and against exhaustive simple-path
//! enumeration on graphs of at most six vertices.

use costgraph::{Cost, Graph, GraphError, PathOutcome};
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

/// A small graph as `(vertex count, unique edges)`; vertices are `0..n`.
#[derive(Debug, Clone)]
struct Small {
    n: usize,
    edges: Vec<(usize, usize, Cost)>,
}

impl Small {
    fn build(&self) -> Graph<usize> {
        Graph::from_parts(0..self.n, self.edges.iter().copied()).unwrap()
    }

    fn petgraph(&self) -> DiGraph<(), f64> {
        let mut pg = DiGraph::new();
        let nodes: Vec<NodeIndex> = (0..self.n).map(|_| pg.add_node(())).collect();
        for &(a, b, c) in &self.edges {
            pg.add_edge(nodes[a], nodes[b], c as f64);
        }
        pg
    }

    /// `(hops, cost)` of every simple path from `s` to `d`.
    fn simple_paths(&self, s: usize, d: usize) -> Vec<(usize, Cost)> {
        fn walk(
            small: &Small,
            at: usize,
            d: usize,
            on_path: &mut [bool],
            hops: usize,
            cost: Cost,
            out: &mut Vec<(usize, Cost)>,
        ) {
            if at == d {
                out.push((hops, cost));
                return;
            }
            for &(a, b, c) in &small.edges {
                if a == at && !on_path[b] {
                    on_path[b] = true;
                    walk(small, b, d, on_path, hops + 1, cost + c, out);
                    on_path[b] = false;
                }
            }
        }

        let mut on_path = vec![false; self.n];
        on_path[s] = true;
        let mut out = Vec::new();
        walk(self, s, d, &mut on_path, 0, 0, &mut out);
        out
    }
}

fn small_graph(costs: std::ops::RangeInclusive<Cost>) -> impl Strategy<Value = Small> {
    (1usize..=6).prop_flat_map(move |n| {
        proptest::collection::vec((0..n, 0..n, costs.clone()), 0..=n * n).prop_map(move |raw| {
            let mut edges: Vec<(usize, usize, Cost)> = Vec::new();
            for (a, b, c) in raw {
                if !edges.iter().any(|&(x, y, _)| x == a && y == b) {
                    edges.push((a, b, c));
                }
            }
            Small { n, edges }
        })
    })
}

fn endpoints(small: &Small) -> impl Iterator<Item = (usize, usize)> {
    let n = small.n;
    (0..n).flat_map(move |s| (0..n).map(move |d| (s, d)))
}

proptest! {
    #[test]
    fn bfs_finds_fewest_hops(small in small_graph(0..=5)) {
        let g = small.build();
        for (s, d) in endpoints(&small) {
            let best = small.simple_paths(s, d).iter().map(|&(hops, _)| hops).min();
            let found = g.shortest_path(&s, &d).unwrap().found();
            prop_assert_eq!(found.as_ref().map(|p| p.length), best);
            if let Some(path) = found {
                prop_assert_eq!(path.vertices.len(), path.length + 1);
                for pair in path.vertices.windows(2) {
                    prop_assert_eq!(g.is_edge(&pair[0], &pair[1]), Ok(true));
                }
            }
        }
    }

    #[test]
    fn bellman_ford_matches_brute_force_on_non_negative_costs(small in small_graph(0..=9)) {
        let g = small.build();
        for (s, d) in endpoints(&small) {
            let best = small.simple_paths(s, d).iter().map(|&(_, cost)| cost).min();
            let found = g.min_cost_walk(&s, &d).unwrap().found();
            prop_assert_eq!(found.as_ref().map(|p| p.cost), best);
            if let Some(path) = found {
                let summed: Cost = path
                    .vertices
                    .windows(2)
                    .map(|pair| g.cost(&pair[0], &pair[1]).unwrap())
                    .sum();
                prop_assert_eq!(summed, path.cost);
            }
        }
    }

    #[test]
    fn bellman_ford_agrees_with_petgraph(small in small_graph(-4..=6)) {
        let g = small.build();
        let pg = small.petgraph();
        for s in 0..small.n {
            let oracle = algo::bellman_ford(&pg, NodeIndex::new(s));
            for d in 0..small.n {
                let ours = g.min_cost_walk(&s, &d);
                match &oracle {
                    Err(_) => {
                        prop_assert_eq!(ours, Err(GraphError::NegativeCycleDetected(s.to_string())));
                    }
                    Ok(paths) => {
                        let distance = paths.distances[d];
                        match ours.unwrap() {
                            PathOutcome::Found(path) => {
                                prop_assert_eq!(path.cost as f64, distance);
                            }
                            PathOutcome::NoPath => {
                                prop_assert!(distance.is_infinite());
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn acyclicity_agrees_with_petgraph(small in small_graph(0..=1)) {
        let g = small.build();
        let pg = small.petgraph();
        let cyclic = algo::is_cyclic_directed(&pg);
        prop_assert_eq!(g.is_acyclic(), !cyclic);

        match g.topological_order() {
            Ok(order) => {
                prop_assert!(!cyclic);
                prop_assert_eq!(order.len(), small.n);
                let mut position = vec![usize::MAX; small.n];
                for (i, &v) in order.iter().enumerate() {
                    position[v] = i;
                }
                for &(a, b, _) in &small.edges {
                    prop_assert!(position[a] < position[b], "edge {} -> {} points backward", a, b);
                }
            }
            Err(err) => {
                prop_assert!(cyclic);
                prop_assert_eq!(err, GraphError::NotAcyclic);
                let cycle = g.find_cycle().unwrap();
                prop_assert!(cycle.len() >= 2);
                prop_assert_eq!(cycle.first(), cycle.last());
                for pair in cycle.windows(2) {
                    prop_assert_eq!(g.is_edge(&pair[0], &pair[1]), Ok(true));
                }
            }
        }
    }

    #[test]
    fn longest_path_matches_brute_force_on_dags(small in small_graph(-5..=8)) {
        let g = small.build();
        if !g.is_acyclic() {
            prop_assert_eq!(g.highest_cost_path(&0, &0), Err(GraphError::NotADag));
            return Ok(());
        }
        for (s, d) in endpoints(&small) {
            let best = small.simple_paths(s, d).iter().map(|&(_, cost)| cost).max();
            let found = g.highest_cost_path(&s, &d).unwrap();
            prop_assert_eq!(found.found().map(|p| p.cost), best);
        }
    }
}
