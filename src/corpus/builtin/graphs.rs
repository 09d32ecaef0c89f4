//! Graph entry groups.

use crate::entry::{Entry, CONCEPT};

pub static GRAPH_TRAVERSAL: &[Entry] = &[
    Entry::new(
        "bfs(graph, start)",
        "Visit vertices in order of hop distance using a FIFO queue.",
        "O(V + E)",
        "Traversal",
        r#"fn bfs(graph: &[Vec<usize>], start: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.len()];
    let mut queue = std::collections::VecDeque::from([start]);
    dist[start] = Some(0);
    while let Some(u) = queue.pop_front() {
        for &v in &graph[u] {
            if dist[v].is_none() {
                dist[v] = dist[u].map(|d| d + 1);
                queue.push_back(v);
            }
        }
    }
    dist
}"#,
    ),
    Entry::new(
        "dfs(graph, start)",
        "Follow each branch as deep as possible before backtracking, using an explicit stack.",
        "O(V + E)",
        "Traversal",
        r#"fn dfs(graph: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut seen = vec![false; graph.len()];
    let (mut stack, mut order) = (vec![start], Vec::new());
    while let Some(u) = stack.pop() {
        if std::mem::replace(&mut seen[u], true) {
            continue;
        }
        order.push(u);
        stack.extend(graph[u].iter().rev().filter(|&&v| !seen[v]));
    }
    order
}"#,
    ),
    Entry::new(
        "topological_sort(graph)",
        "Kahn's algorithm: repeatedly emit vertices with no remaining incoming edges.",
        "O(V + E)",
        "Traversal",
        r#"let mut indegree = vec![0; n];
for edges in &graph { for &v in edges { indegree[v] += 1; } }
let mut ready: Vec<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();"#,
    ),
    Entry::new(
        "adjacency list",
        "Store each vertex's neighbours in its own list; compact for sparse graphs.",
        CONCEPT,
        "Representation",
        r#"let mut graph: Vec<Vec<usize>> = vec![Vec::new(); n];
graph[u].push(v);"#,
    ),
];

pub static SHORTEST_PATHS: &[Entry] = &[
    Entry::new(
        "dijkstra(graph, source)",
        "Settle vertices in order of tentative distance with a min-heap. Non-negative weights only.",
        "O((V + E) log V)",
        "Shortest Paths",
        r#"use std::{cmp::Reverse, collections::BinaryHeap};

fn dijkstra(graph: &[Vec<(usize, u64)>], source: usize) -> Vec<u64> {
    let mut dist = vec![u64::MAX; graph.len()];
    let mut heap = BinaryHeap::from([Reverse((0, source))]);
    dist[source] = 0;
    while let Some(Reverse((d, u))) = heap.pop() {
        if d > dist[u] {
            continue;
        }
        for &(v, w) in &graph[u] {
            if d + w < dist[v] {
                dist[v] = d + w;
                heap.push(Reverse((dist[v], v)));
            }
        }
    }
    dist
}"#,
    ),
    Entry::new(
        "bellman_ford(edges, source)",
        "Relax every edge V-1 times; a further improving pass reveals a negative cycle.",
        "O(V·E)",
        "Shortest Paths",
        r#"for _ in 1..n {
    for &(u, v, w) in &edges {
        if dist[u] != i64::MAX && dist[u] + w < dist[v] {
            dist[v] = dist[u] + w;
        }
    }
}"#,
    ),
];
