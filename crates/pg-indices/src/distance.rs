//! Hop distances by breadth-first search.
//!
//! `DistanceSums` streams one BFS per source and keeps only running totals,
//! so memory stays linear in the node count. `DistanceTable` materializes
//! every pair and is meant for inspection and tests on small graphs.

use std::collections::VecDeque;

use pg_graph::PowerGraph;
use rayon::prelude::*;

/// Hop distances between every pair of nodes, row-major by node index.
///
/// `None` marks an unreachable pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    n: usize,
    dist: Vec<Option<u32>>,
}

impl DistanceTable {
    /// One BFS per source node, sources processed in parallel.
    pub fn from_graph(graph: &PowerGraph) -> Self {
        let n = graph.node_count();
        let rows: Vec<Vec<Option<u32>>> = (0..n)
            .into_par_iter()
            .map(|source| bfs(graph, source))
            .collect();
        Self::from_rows(n, rows)
    }

    /// One BFS per source node on the calling thread.
    pub fn from_graph_sequential(graph: &PowerGraph) -> Self {
        let n = graph.node_count();
        let rows: Vec<Vec<Option<u32>>> = (0..n).map(|source| bfs(graph, source)).collect();
        Self::from_rows(n, rows)
    }

    fn from_rows(n: usize, rows: Vec<Vec<Option<u32>>>) -> Self {
        Self {
            n,
            dist: rows.into_iter().flatten().collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Distance from node `i` to node `j`, if reachable.
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        if i >= self.n || j >= self.n {
            return None;
        }
        self.dist[i * self.n + j]
    }

    /// Reachable unordered pairs `(i, j, d)` with `i < j`.
    pub fn reachable_pairs(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.n).flat_map(move |i| {
            (i + 1..self.n).filter_map(move |j| self.get(i, j).map(|d| (i, j, d)))
        })
    }
}

/// Wiener and Gutman totals accumulated one BFS source at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceSums {
    /// Sum of `d(i, j)` over reachable pairs `i < j`.
    pub wiener: u64,
    /// Sum of `d(i, j) * deg(i) * deg(j)` over reachable pairs `i < j`.
    pub gutman: u64,
}

impl DistanceSums {
    /// Totals over all sources, sources processed in parallel.
    pub fn from_graph(graph: &PowerGraph) -> Self {
        let degrees = graph.degrees();
        (0..graph.node_count())
            .into_par_iter()
            .map(|source| source_sums(graph, &degrees, source))
            .reduce(Self::default, Self::add)
    }

    /// Totals over all sources on the calling thread.
    pub fn from_graph_sequential(graph: &PowerGraph) -> Self {
        let degrees = graph.degrees();
        (0..graph.node_count())
            .map(|source| source_sums(graph, &degrees, source))
            .fold(Self::default(), Self::add)
    }

    fn add(self, other: Self) -> Self {
        Self {
            wiener: self.wiener + other.wiener,
            gutman: self.gutman + other.gutman,
        }
    }
}

/// Contribution of pairs `(source, j)` with `j > source`.
fn source_sums(graph: &PowerGraph, degrees: &[usize], source: usize) -> DistanceSums {
    let dist = bfs(graph, source);
    let mut sums = DistanceSums::default();
    for (j, d) in dist.iter().enumerate().skip(source + 1) {
        if let Some(d) = *d {
            sums.wiener += d as u64;
            sums.gutman += d as u64 * degrees[source] as u64 * degrees[j] as u64;
        }
    }
    sums
}

fn bfs(graph: &PowerGraph, source: usize) -> Vec<Option<u32>> {
    let mut dist = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let next = dist[u].map_or(0, |d| d + 1);
        for &v in graph.neighbors(u) {
            if dist[v].is_none() {
                dist[v] = Some(next);
                queue.push_back(v);
            }
        }
    }
    dist
}
