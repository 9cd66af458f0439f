//! Graph step producers: BFS, DFS, Dijkstra, Prim, Kruskal.
//!
//! The graph model is an unweighted adjacency list; every edge counts
//! as weight 1. Dijkstra therefore degenerates to shortest hop count
//! (BFS order), and both spanning-tree builders charge one unit per
//! accepted edge. This is deliberate and surfaced in the type names
//! and docs rather than hidden.
//!
//! Traversals record one step per discovery event carrying the visited
//! flags and the current vertex. When a search target is reached, a
//! trailing step carries the start-to-target path reconstructed from
//! parent pointers (reverse walk, `-1` sentinel). When traversal
//! exhausts without reaching a requested target, the trailing step
//! carries whatever parent chain exists at the target, which the
//! extractor then rejects as not found.

use crate::answer::Answer;
use crate::step::{Family, Step};
use crate::traits::Algorithm;

const UNREACHED: i64 = i64::MAX / 4;

/// Unweighted undirected-ish graph: vertex count plus adjacency lists.
///
/// The structure stores whatever rows it is given; traversal treats
/// `adjacency[v]` as the out-neighbors of `v`. Undirectedness is a
/// property of the input, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: usize,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph from adjacency rows.
    ///
    /// # Panics
    /// Panics if the row count does not match `vertices` or any
    /// neighbor id is out of range. [`crate::parse::graph`] validates
    /// free-text input before constructing.
    pub fn new(vertices: usize, adjacency: Vec<Vec<usize>>) -> Self {
        assert_eq!(
            adjacency.len(),
            vertices,
            "adjacency rows must match vertex count"
        );
        for row in &adjacency {
            for &n in row {
                assert!(n < vertices, "neighbor {n} out of range");
            }
        }
        Self {
            vertices,
            adjacency,
        }
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// The 6-vertex demo graph used across tests and examples.
    pub fn demo() -> Self {
        Graph::new(
            6,
            vec![
                vec![1, 2],
                vec![0, 2, 3],
                vec![0, 1, 3, 4],
                vec![1, 2, 4, 5],
                vec![2, 3, 5],
                vec![3, 4],
            ],
        )
    }
}

/// Disjoint-set forest with path compression; union links the root of
/// `x` under the root of `y`.
#[derive(Debug, Clone)]
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) {
        let rx = self.find(x);
        let ry = self.find(y);
        self.parent[rx] = ry;
    }
}

/// Walk parent pointers back from `vertex` to the `-1` sentinel and
/// return the forward path.
fn parent_chain(parent: &[i64], vertex: usize) -> Vec<i64> {
    let mut path = Vec::new();
    let mut node = vertex as i64;
    while node != -1 {
        path.push(node);
        node = parent[node as usize];
    }
    path.reverse();
    path
}

/// Shared search-answer policy: the last step carrying a non-empty
/// path wins, provided the chain actually runs from start to target.
fn search_answer(steps: &[Step], start: usize, target: Option<usize>) -> Answer {
    let found = steps
        .iter()
        .rev()
        .find_map(|s| s.path.as_ref().filter(|p| !p.is_empty()));
    let Some(path) = found else {
        return Answer::NotFound;
    };
    let path: Vec<usize> = path.iter().map(|&v| v as usize).collect();
    if path.first() != Some(&start) {
        return Answer::NotFound;
    }
    if let Some(t) = target {
        if path.last() != Some(&t) {
            return Answer::NotFound;
        }
    }
    Answer::Path(path)
}

fn vertex_range(graph: &Graph, start: usize) -> bool {
    graph.vertices() > 0 && start < graph.vertices()
}

/// Breadth-first search with optional target vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bfs {
    pub graph: Graph,
    pub start: usize,
    pub target: Option<usize>,
}

impl Bfs {
    pub fn new(graph: Graph, start: usize, target: Option<usize>) -> Self {
        Self {
            graph,
            start,
            target,
        }
    }
}

impl Algorithm for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn family(&self) -> Family {
        Family::Graph
    }

    fn produce(&self) -> Vec<Step> {
        if !vertex_range(&self.graph, self.start) {
            return Vec::new();
        }
        let n = self.graph.vertices();
        let mut visited = vec![false; n];
        let mut parent = vec![-1i64; n];
        let mut queue = std::collections::VecDeque::new();
        let mut steps = Vec::new();

        visited[self.start] = true;
        queue.push_back(self.start);
        steps.push(Step::visit(&visited, self.start as i64, &[self.start as i64]));

        let mut found = false;
        'search: while let Some(current) = queue.pop_front() {
            for &neighbor in self.graph.neighbors(current) {
                if visited[neighbor] {
                    continue;
                }
                visited[neighbor] = true;
                parent[neighbor] = current as i64;
                queue.push_back(neighbor);
                if Some(neighbor) == self.target {
                    found = true;
                    let path = parent_chain(&parent, neighbor);
                    steps.push(Step::visit(&visited, neighbor as i64, &path));
                    break 'search;
                }
                steps.push(Step::visit(&visited, neighbor as i64, &[]));
            }
        }

        if !found {
            if let Some(target) = self.target {
                let path = parent_chain(&parent, target);
                steps.push(Step::visit(&visited, target as i64, &path));
            }
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        search_answer(steps, self.start, self.target)
    }

    fn display_array(&self) -> Vec<i64> {
        (0..self.graph.vertices() as i64).collect()
    }
}

/// Depth-first search with optional target vertex.
///
/// Runs on an explicit stack rather than recursion; neighbors are
/// pushed in reverse so visit order and parent chains match the
/// recursive formulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfs {
    pub graph: Graph,
    pub start: usize,
    pub target: Option<usize>,
}

impl Dfs {
    pub fn new(graph: Graph, start: usize, target: Option<usize>) -> Self {
        Self {
            graph,
            start,
            target,
        }
    }
}

impl Algorithm for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn family(&self) -> Family {
        Family::Graph
    }

    fn produce(&self) -> Vec<Step> {
        if !vertex_range(&self.graph, self.start) {
            return Vec::new();
        }
        let n = self.graph.vertices();
        let mut visited = vec![false; n];
        let mut parent = vec![-1i64; n];
        let mut stack: Vec<(usize, i64)> = vec![(self.start, -1)];
        let mut steps = Vec::new();
        let mut found = false;

        while let Some((vertex, via)) = stack.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;
            if vertex != self.start {
                parent[vertex] = via;
            }
            steps.push(Step::visit(&visited, vertex as i64, &[]));

            if Some(vertex) == self.target {
                found = true;
                let path = parent_chain(&parent, vertex);
                steps.push(Step::visit(&visited, vertex as i64, &path));
                break;
            }
            for &neighbor in self.graph.neighbors(vertex).iter().rev() {
                if !visited[neighbor] {
                    stack.push((neighbor, vertex as i64));
                }
            }
        }

        if !found {
            if let Some(target) = self.target {
                let path = parent_chain(&parent, target);
                steps.push(Step::visit(&visited, target as i64, &path));
            }
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        search_answer(steps, self.start, self.target)
    }

    fn display_array(&self) -> Vec<i64> {
        (0..self.graph.vertices() as i64).collect()
    }
}

/// Dijkstra restricted to unit edge weights: every relaxation adds 1,
/// so selection order equals hop count. Kept as an explicitly labeled
/// simplification of the weighted algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDijkstra {
    pub graph: Graph,
    pub start: usize,
    pub target: Option<usize>,
}

impl UnitDijkstra {
    pub fn new(graph: Graph, start: usize, target: Option<usize>) -> Self {
        Self {
            graph,
            start,
            target,
        }
    }
}

impl Algorithm for UnitDijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn family(&self) -> Family {
        Family::Graph
    }

    fn produce(&self) -> Vec<Step> {
        if !vertex_range(&self.graph, self.start) {
            return Vec::new();
        }
        let n = self.graph.vertices();
        let mut dist = vec![UNREACHED; n];
        let mut visited = vec![false; n];
        let mut parent = vec![-1i64; n];
        let mut steps = Vec::new();

        dist[self.start] = 0;
        steps.push(Step::visit(&visited, self.start as i64, &[self.start as i64]));

        let mut found = false;
        for _ in 0..n {
            let mut min_vertex = None;
            let mut min_dist = UNREACHED;
            for (v, &d) in dist.iter().enumerate() {
                if !visited[v] && d < min_dist {
                    min_dist = d;
                    min_vertex = Some(v);
                }
            }
            let Some(current) = min_vertex else {
                break;
            };
            visited[current] = true;

            if Some(current) == self.target {
                found = true;
                let path = parent_chain(&parent, current);
                steps.push(Step::visit(&visited, current as i64, &path));
                break;
            }
            steps.push(Step::visit(&visited, current as i64, &[]));

            for &neighbor in self.graph.neighbors(current) {
                if !visited[neighbor] && dist[current] + 1 < dist[neighbor] {
                    dist[neighbor] = dist[current] + 1;
                    parent[neighbor] = current as i64;
                }
            }
        }

        if !found {
            if let Some(target) = self.target {
                let path = parent_chain(&parent, target);
                steps.push(Step::visit(&visited, target as i64, &path));
            }
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        search_answer(steps, self.start, self.target)
    }

    fn display_array(&self) -> Vec<i64> {
        (0..self.graph.vertices() as i64).collect()
    }
}

/// Pair a flattened vertex sequence into edges, two at a time, and
/// charge unit cost per edge.
fn mst_answer(steps: &[Step]) -> Answer {
    let Some(path) = steps.last().and_then(|s| s.path.as_ref()) else {
        return Answer::NotFound;
    };
    let mut edges = Vec::new();
    let mut i = 0;
    while i + 1 < path.len() {
        edges.push((path[i] as usize, path[i + 1] as usize));
        i += 2;
    }
    if edges.is_empty() {
        return Answer::NotFound;
    }
    let cost = edges.len() as i64;
    Answer::Mst { edges, cost }
}

/// Prim's spanning tree under unit weights: each round adds the first
/// unvisited neighbor found scanning visited vertices in index order.
///
/// The recorded `path` is the vertex-addition order, not an edge list;
/// the extractor pairs it up per the renderer contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prim {
    pub graph: Graph,
}

impl Prim {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

impl Algorithm for Prim {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn family(&self) -> Family {
        Family::Graph
    }

    fn produce(&self) -> Vec<Step> {
        let n = self.graph.vertices();
        if n == 0 {
            return Vec::new();
        }
        let mut visited = vec![false; n];
        let mut path: Vec<i64> = Vec::new();
        let mut steps = Vec::new();

        visited[0] = true;
        path.push(0);
        steps.push(Step::visit(&visited, 0, &path));

        for _ in 0..n.saturating_sub(1) {
            let mut next = None;
            'scan: for v in 0..n {
                if !visited[v] {
                    continue;
                }
                for &neighbor in self.graph.neighbors(v) {
                    if !visited[neighbor] {
                        next = Some(neighbor);
                        break 'scan;
                    }
                }
            }
            let Some(vertex) = next else {
                break;
            };
            visited[vertex] = true;
            path.push(vertex as i64);
            steps.push(Step::visit(&visited, vertex as i64, &path));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        mst_answer(steps)
    }

    fn display_array(&self) -> Vec<i64> {
        (0..self.graph.vertices() as i64).collect()
    }
}

/// Kruskal's spanning tree under unit weights.
///
/// The deduplicated `u < v` edge list keeps its insertion order under
/// the stable sort, union-find with path compression rejects cycles,
/// and each accepted edge appends `u, v` to the flattened path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kruskal {
    pub graph: Graph,
}

impl Kruskal {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

impl Algorithm for Kruskal {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn family(&self) -> Family {
        Family::Graph
    }

    fn produce(&self) -> Vec<Step> {
        let n = self.graph.vertices();
        if n == 0 {
            return Vec::new();
        }
        let mut edges: Vec<(usize, usize, i64)> = Vec::new();
        for u in 0..n {
            for &v in self.graph.neighbors(u) {
                if u < v {
                    edges.push((u, v, 1));
                }
            }
        }
        edges.sort_by_key(|&(_, _, w)| w);

        let mut uf = UnionFind::new(n);
        let mut visited = vec![false; n];
        let mut path: Vec<i64> = Vec::new();
        let mut steps = Vec::new();

        for (u, v, _) in edges {
            if uf.find(u) == uf.find(v) {
                continue;
            }
            uf.union(u, v);
            visited[u] = true;
            visited[v] = true;
            path.push(u as i64);
            path.push(v as i64);
            steps.push(Step::visit(&visited, v as i64, &path));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        mst_answer(steps)
    }

    fn display_array(&self) -> Vec<i64> {
        (0..self.graph.vertices() as i64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_compresses_paths() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(3, 4);
        assert_eq!(uf.find(0), uf.find(2));
        assert_ne!(uf.find(0), uf.find(3));
        uf.union(2, 4);
        assert_eq!(uf.find(0), uf.find(3));
    }

    #[test]
    fn bfs_reaches_demo_target() {
        let algo = Bfs::new(Graph::demo(), 0, Some(5));
        let steps = algo.produce();
        match algo.extract(&steps) {
            Answer::Path(path) => {
                assert_eq!(path.first(), Some(&0));
                assert_eq!(path.last(), Some(&5));
            }
            other => panic!("unexpected answer {other:?}"),
        }
    }

    #[test]
    fn bfs_unreachable_target_is_not_found() {
        let graph = Graph::new(3, vec![vec![1], vec![0], vec![]]);
        let algo = Bfs::new(graph, 0, Some(2));
        let steps = algo.produce();
        // Trailing step still records the bare target chain.
        assert_eq!(steps.last().unwrap().path.as_ref().unwrap(), &vec![2]);
        assert_eq!(algo.extract(&steps), Answer::NotFound);
    }

    #[test]
    fn dfs_preorder_matches_recursive_formulation() {
        let algo = Dfs::new(Graph::demo(), 0, None);
        let order: Vec<i64> = algo
            .produce()
            .iter()
            .filter_map(|s| s.current)
            .collect();
        // 0 -> 1 -> 0's first unvisited from 1 is 2, then 3, 4, 5.
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn dijkstra_path_is_shortest_hop_count() {
        let algo = UnitDijkstra::new(Graph::demo(), 0, Some(5));
        let steps = algo.produce();
        match algo.extract(&steps) {
            Answer::Path(path) => {
                // 0..5 is 3 hops in the demo graph.
                assert_eq!(path.len(), 4);
                assert_eq!(path[0], 0);
                assert_eq!(path[3], 5);
            }
            other => panic!("unexpected answer {other:?}"),
        }
    }

    #[test]
    fn prim_adds_every_vertex_once() {
        let algo = Prim::new(Graph::demo());
        let steps = algo.produce();
        assert_eq!(steps.len(), 6);
        let added = steps.last().unwrap().path.as_ref().unwrap();
        let mut sorted = added.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn kruskal_accepts_a_spanning_set() {
        let algo = Kruskal::new(Graph::demo());
        let steps = algo.produce();
        // A 6-vertex connected graph needs exactly 5 tree edges.
        assert_eq!(steps.len(), 5);
        match algo.extract(&steps) {
            Answer::Mst { edges, cost } => {
                assert_eq!(edges.len(), 5);
                assert_eq!(cost, 5);
                let mut uf = UnionFind::new(6);
                for (u, v) in edges {
                    assert_ne!(uf.find(u), uf.find(v), "cycle edge accepted");
                    uf.union(u, v);
                }
            }
            other => panic!("unexpected answer {other:?}"),
        }
    }

    #[test]
    fn zero_vertex_graph_produces_nothing() {
        let graph = Graph::new(0, vec![]);
        assert!(Bfs::new(graph.clone(), 0, None).produce().is_empty());
        assert!(Prim::new(graph.clone()).produce().is_empty());
        assert!(Kruskal::new(graph).produce().is_empty());
    }
}
