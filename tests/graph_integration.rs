use algoviz::problems::graph::{Bfs, Dfs, Graph, Kruskal, Prim, UnitDijkstra};
use algoviz::{Algorithm, Answer};

fn assert_walkable(graph: &Graph, path: &[usize]) {
    for pair in path.windows(2) {
        assert!(
            graph.neighbors(pair[0]).contains(&pair[1]),
            "no edge {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn bfs_demo_path_endpoints() {
    let algo = Bfs::new(Graph::demo(), 0, Some(5));
    let steps = algo.produce();
    match algo.extract(&steps) {
        Answer::Path(path) => {
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&5));
            assert_walkable(&Graph::demo(), &path);
        }
        other => panic!("unexpected answer {other:?}"),
    }
}

#[test]
fn dfs_demo_path_endpoints() {
    let algo = Dfs::new(Graph::demo(), 0, Some(5));
    let steps = algo.produce();
    match algo.extract(&steps) {
        Answer::Path(path) => {
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&5));
            assert_walkable(&Graph::demo(), &path);
        }
        other => panic!("unexpected answer {other:?}"),
    }
}

#[test]
fn bfs_visited_flags_grow_monotonically() {
    let steps = Bfs::new(Graph::demo(), 0, None).produce();
    let mut seen = 0usize;
    for step in &steps {
        let visited = step.visited.as_ref().unwrap();
        let count = visited.iter().filter(|&&v| v).count();
        assert!(count >= seen, "visited set shrank");
        seen = count;
    }
    assert_eq!(seen, 6, "BFS should reach the whole demo graph");
}

#[test]
fn bfs_path_length_is_minimal_on_demo() {
    let algo = Bfs::new(Graph::demo(), 0, Some(5));
    let steps = algo.produce();
    let Answer::Path(path) = algo.extract(&steps) else {
        panic!("expected a path");
    };
    // 0 -> {1,2} -> 3 -> 5 is the 3-hop optimum.
    assert_eq!(path.len(), 4);
}

#[test]
fn dijkstra_agrees_with_bfs_hop_count() {
    for target in 1..6usize {
        let bfs = Bfs::new(Graph::demo(), 0, Some(target));
        let dij = UnitDijkstra::new(Graph::demo(), 0, Some(target));
        let bfs_len = match bfs.extract(&bfs.produce()) {
            Answer::Path(p) => p.len(),
            other => panic!("bfs gave {other:?}"),
        };
        let dij_len = match dij.extract(&dij.produce()) {
            Answer::Path(p) => p.len(),
            other => panic!("dijkstra gave {other:?}"),
        };
        assert_eq!(bfs_len, dij_len, "hop counts diverge for target {target}");
    }
}

#[test]
fn unreachable_target_is_not_found_everywhere() {
    // Vertex 3 is isolated.
    let graph = Graph::new(4, vec![vec![1, 2], vec![0, 2], vec![0, 1], vec![]]);
    let bfs = Bfs::new(graph.clone(), 0, Some(3));
    assert_eq!(bfs.extract(&bfs.produce()), Answer::NotFound);
    let dfs = Dfs::new(graph.clone(), 0, Some(3));
    assert_eq!(dfs.extract(&dfs.produce()), Answer::NotFound);
    let dij = UnitDijkstra::new(graph, 0, Some(3));
    assert_eq!(dij.extract(&dij.produce()), Answer::NotFound);
}

#[test]
fn start_out_of_range_produces_empty_sequence() {
    let bfs = Bfs::new(Graph::demo(), 17, Some(5));
    let steps = bfs.produce();
    assert!(steps.is_empty());
    assert_eq!(bfs.extract(&steps), Answer::NotFound);
}

#[test]
fn prim_covers_connected_graph() {
    let algo = Prim::new(Graph::demo());
    let steps = algo.produce();
    assert_eq!(steps.len(), 6);
    let order = steps.last().unwrap().path.as_ref().unwrap();
    assert_eq!(order[0], 0, "Prim grows from vertex 0");
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn prim_stops_at_component_boundary() {
    let graph = Graph::new(4, vec![vec![1], vec![0], vec![3], vec![2]]);
    let steps = Prim::new(graph).produce();
    // Only the component of vertex 0 is spanned.
    assert_eq!(steps.len(), 2);
}

#[test]
fn kruskal_demo_tree_properties() {
    let algo = Kruskal::new(Graph::demo());
    let steps = algo.produce();
    match algo.extract(&steps) {
        Answer::Mst { edges, cost } => {
            assert_eq!(edges.len(), 5);
            assert_eq!(cost, 5);
            for &(u, v) in &edges {
                assert!(Graph::demo().neighbors(u).contains(&v));
            }
        }
        other => panic!("unexpected answer {other:?}"),
    }
}

#[test]
fn kruskal_spans_forest_on_disconnected_graph() {
    let graph = Graph::new(4, vec![vec![1], vec![0], vec![3], vec![2]]);
    let algo = Kruskal::new(graph);
    let steps = algo.produce();
    // Two components, one edge each.
    assert_eq!(steps.len(), 2);
    match algo.extract(&steps) {
        Answer::Mst { edges, cost } => {
            assert_eq!(edges, vec![(0, 1), (2, 3)]);
            assert_eq!(cost, 2);
        }
        other => panic!("unexpected answer {other:?}"),
    }
}

#[test]
fn traversals_are_idempotent() {
    let bfs = Bfs::new(Graph::demo(), 0, Some(5));
    assert_eq!(bfs.produce(), bfs.produce());
    let dfs = Dfs::new(Graph::demo(), 0, Some(5));
    assert_eq!(dfs.produce(), dfs.produce());
    let kruskal = Kruskal::new(Graph::demo());
    assert_eq!(kruskal.produce(), kruskal.produce());
}
