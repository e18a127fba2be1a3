use super::*;

fn s(label: &str) -> String {
    label.to_string()
}

fn triangle() -> Graph<String> {
    Graph::from_parts(
        [s("a"), s("b"), s("c")],
        [(s("a"), s("b"), 1), (s("b"), s("c"), 2), (s("c"), s("a"), 3)],
    )
    .unwrap()
}

#[test]
fn from_parts_builds_ordered_graph() {
    let g = triangle();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.vertices().cloned().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert!(g.validate_invariants());
}

#[test]
fn from_parts_rejects_bad_input() {
    let dup_vertex = Graph::from_parts([s("a"), s("a")], Vec::<(String, String, Cost)>::new());
    assert_eq!(dup_vertex.unwrap_err(), GraphError::VertexExists(s("a")));

    let unknown = Graph::from_parts([s("a")], [(s("a"), s("z"), 1)]);
    assert_eq!(unknown.unwrap_err(), GraphError::NonexistentVertex(s("z")));

    let dup_edge = Graph::from_parts([s("a"), s("b")], [(s("a"), s("b"), 1), (s("a"), s("b"), 9)]);
    assert_eq!(
        dup_edge.unwrap_err(),
        GraphError::EdgeExists {
            from: s("a"),
            to: s("b")
        }
    );
}

#[test]
fn add_vertex_twice_fails_and_leaves_graph_unchanged() {
    let mut g = triangle();
    assert_eq!(g.add_vertex(s("b")), Err(GraphError::VertexExists(s("b"))));
    assert_eq!(g.vertex_count(), 3);
    assert!(g.validate_invariants());
}

#[test]
fn remove_vertex_drops_incident_edges_both_ways() {
    let mut g = triangle();
    g.remove_vertex(&s("b")).unwrap();

    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.out_degree(&s("a")), Ok(0));
    assert_eq!(g.in_degree(&s("c")), Ok(0));
    assert_eq!(g.is_edge(&s("c"), &s("a")), Ok(true));
    assert_eq!(g.out_degree(&s("b")), Err(GraphError::NonexistentVertex(s("b"))));
    assert!(g.validate_invariants());
}

#[test]
fn remove_vertex_with_self_loop() {
    let mut g = triangle();
    g.add_edge(&s("a"), &s("a"), -2).unwrap();
    assert_eq!(g.in_degree(&s("a")), Ok(2));
    assert_eq!(g.out_degree(&s("a")), Ok(2));

    g.remove_vertex(&s("a")).unwrap();
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edges().count(), 1);
    assert!(g.validate_invariants());
}

#[test]
fn removed_label_can_be_added_again_at_the_end() {
    let mut g = triangle();
    g.remove_vertex(&s("a")).unwrap();
    g.add_vertex(s("a")).unwrap();
    assert_eq!(g.vertices().cloned().collect::<Vec<_>>(), vec!["b", "c", "a"]);
    assert_eq!(g.in_degree(&s("a")), Ok(0));
    assert!(g.validate_invariants());
}

#[test]
fn edge_errors() {
    let mut g = triangle();
    assert_eq!(
        g.add_edge(&s("a"), &s("b"), 5),
        Err(GraphError::EdgeExists {
            from: s("a"),
            to: s("b")
        })
    );
    assert_eq!(
        g.add_edge(&s("a"), &s("q"), 5),
        Err(GraphError::NonexistentVertex(s("q")))
    );
    assert_eq!(
        g.remove_edge(&s("b"), &s("a")),
        Err(GraphError::NonexistentEdge {
            from: s("b"),
            to: s("a")
        })
    );
    assert_eq!(
        g.update_edge(&s("q"), &s("a"), 0),
        Err(GraphError::NonexistentVertex(s("q")))
    );
    assert_eq!(g.is_edge(&s("a"), &s("q")), Err(GraphError::NonexistentVertex(s("q"))));
    assert_eq!(g.cost(&s("a"), &s("b")), Ok(1));
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn update_edge_keeps_neighbor_order() {
    let mut g = Graph::from_parts(
        [s("a"), s("b"), s("c"), s("d")],
        [(s("a"), s("b"), 1), (s("a"), s("c"), 2), (s("a"), s("d"), 3)],
    )
    .unwrap();

    assert_eq!(g.update_edge(&s("a"), &s("c"), -20), Ok(2));
    let out: Vec<_> = g.out_neighbors(&s("a")).unwrap().map(|(v, c)| (v.clone(), c)).collect();
    assert_eq!(out, vec![(s("b"), 1), (s("c"), -20), (s("d"), 3)]);
    let inbound: Vec<_> = g.in_neighbors(&s("c")).unwrap().map(|(v, c)| (v.clone(), c)).collect();
    assert_eq!(inbound, vec![(s("a"), -20)]);
}

#[test]
fn remove_edge_then_add_back_appends() {
    let mut g = Graph::from_parts(
        [s("a"), s("b"), s("c")],
        [(s("a"), s("b"), 1), (s("a"), s("c"), 2)],
    )
    .unwrap();
    assert_eq!(g.remove_edge(&s("a"), &s("b")), Ok(1));
    g.add_edge(&s("a"), &s("b"), 7).unwrap();

    let out: Vec<_> = g.out_neighbors(&s("a")).unwrap().map(|(v, c)| (v.as_str(), c)).collect();
    assert_eq!(out, vec![("c", 2), ("b", 7)]);
    assert!(g.validate_invariants());
}

#[test]
fn edges_follow_vertex_then_insertion_order() {
    let mut g = Graph::new();
    for v in ["x", "y", "z"] {
        g.add_vertex(s(v)).unwrap();
    }
    g.add_edge(&s("z"), &s("x"), 1).unwrap();
    g.add_edge(&s("x"), &s("z"), 2).unwrap();
    g.add_edge(&s("x"), &s("y"), 3).unwrap();

    let edges: Vec<_> = g.edges().map(|(a, b, c)| (a.as_str(), b.as_str(), c)).collect();
    assert_eq!(edges, vec![("x", "z", 2), ("x", "y", 3), ("z", "x", 1)]);
    assert_eq!(g.edges().len(), 3);
}

#[test]
fn copy_is_independent() {
    let original = triangle();
    let mut copy = original.copy();

    copy.remove_vertex(&s("a")).unwrap();
    copy.update_edge(&s("b"), &s("c"), 100).unwrap();

    assert_eq!(original.vertex_count(), 3);
    assert_eq!(original.cost(&s("b"), &s("c")), Ok(2));
    assert_eq!(copy.vertex_count(), 2);
    assert!(original.validate_invariants());
    assert!(copy.validate_invariants());
}

#[test]
fn id_level_views_match_label_views() {
    let g = triangle();
    let ids: Vec<_> = g.vertex_ids().collect();
    assert_eq!(g.labels_of(&ids), vec![s("a"), s("b"), s("c")]);

    let a = g.require(&s("a")).unwrap();
    let succ: Vec<_> = g.successors(a).map(|(t, c)| (g.label(t).cloned(), c)).collect();
    assert_eq!(succ, vec![(Some(s("b")), 1)]);
    assert_eq!(g.slot_bound(), 3);
}

#[test]
fn integer_labels_work() {
    let mut g: Graph<u32> = Graph::new();
    g.add_vertex(1).unwrap();
    g.add_vertex(2).unwrap();
    g.add_edge(&1, &2, 0).unwrap();
    assert_eq!(g.remove_vertex(&3), Err(GraphError::NonexistentVertex("3".into())));
}

#[test]
fn churn_keeps_vertex_table_bounded() {
    let mut g = triangle();
    for round in 0..200 {
        let temp = format!("t{round}");
        g.add_vertex(temp.clone()).unwrap();
        g.add_edge(&temp, &s("a"), round).unwrap();
        g.add_edge(&s("b"), &temp, -round).unwrap();
        g.remove_vertex(&temp).unwrap();
        assert!(g.slot_bound() <= 2 * g.vertex_count() + SLOT_SLACK + 1);
    }
    assert!(g.validate_invariants());
    assert_eq!(g.vertices().cloned().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    let edges: Vec<_> = g.edges().map(|(a, b, c)| (a.as_str(), b.as_str(), c)).collect();
    assert_eq!(edges, vec![("a", "b", 1), ("b", "c", 2), ("c", "a", 3)]);
}

#[test]
fn compaction_keeps_insertion_order() {
    let mut g = Graph::new();
    for i in 0..40u32 {
        g.add_vertex(i).unwrap();
    }
    g.add_edge(&39, &0, 5).unwrap();
    g.add_edge(&0, &39, 6).unwrap();
    g.add_edge(&20, &20, -1).unwrap();
    for i in (1..39).filter(|&i| i != 20) {
        g.remove_vertex(&i).unwrap();
    }

    assert!(g.slot_bound() < 40);
    assert!(g.slot_bound() <= 2 * g.vertex_count() + SLOT_SLACK);
    assert!(g.validate_invariants());
    assert_eq!(g.vertices().copied().collect::<Vec<_>>(), vec![0, 20, 39]);
    assert_eq!(g.cost(&39, &0), Ok(5));
    assert_eq!(g.cost(&20, &20), Ok(-1));
    assert_eq!(g.topological_order(), Err(GraphError::NotAcyclic));

    g.add_vertex(7).unwrap();
    g.add_edge(&7, &0, 1).unwrap();
    assert_eq!(g.vertices().copied().collect::<Vec<_>>(), vec![0, 20, 39, 7]);
    assert!(g.validate_invariants());
}

#[test]
fn iteration_skips_dead_edge_entries() {
    let mut g = triangle();
    let a = g.require(&s("a")).unwrap();
    let b = g.require(&s("b")).unwrap();
    let edge = g.pairs[&(a, b)];
    // Free the arena slot without unlinking the adjacency lists.
    g.edges.free(edge);

    let out: Vec<_> = g.out_neighbors(&s("a")).unwrap().collect();
    assert!(out.is_empty());
    let inb: Vec<_> = g.in_neighbors(&s("b")).unwrap().collect();
    assert!(inb.is_empty());
    let edges: Vec<_> = g.edges().map(|(x, y, c)| (x.as_str(), y.as_str(), c)).collect();
    assert_eq!(edges, vec![("b", "c", 2), ("c", "a", 3)]);
    assert_eq!(g.successors(a).count(), 0);
    assert!(g.cost(&s("a"), &s("b")).is_err());
    assert!(!g.validate_invariants());
}
