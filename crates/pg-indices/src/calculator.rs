//! Degree- and distance-based indices over a `PowerGraph`.
//!
//! All functions are pure. Pairs are summed once each (`i < j`), and pairs
//! with no connecting path contribute nothing.

use pg_graph::PowerGraph;

use crate::distance::DistanceSums;
use crate::kind::{IndexKind, IndexResult, IndexSelection};

/// First Zagreb index: sum of squared degrees.
pub fn first_zagreb_index(graph: &PowerGraph) -> u64 {
    graph.degrees().iter().map(|&d| (d as u64) * (d as u64)).sum()
}

/// Wiener index: sum of hop distances over unordered node pairs.
pub fn wiener_index(graph: &PowerGraph) -> u64 {
    if is_trivial(graph) {
        return 0;
    }
    DistanceSums::from_graph(graph).wiener
}

/// Gutman index: sum of `d(u, v) * deg(u) * deg(v)` over unordered node pairs.
pub fn gutman_index(graph: &PowerGraph) -> u64 {
    if is_trivial(graph) {
        return 0;
    }
    DistanceSums::from_graph(graph).gutman
}

/// Compute the selected indices, sharing one pass of BFS sums between
/// Wiener and Gutman.
pub fn compute(graph: &PowerGraph, selection: &IndexSelection, parallel: bool) -> IndexResult {
    let sums = if selection.needs_distances() && !is_trivial(graph) {
        Some(if parallel {
            DistanceSums::from_graph(graph)
        } else {
            DistanceSums::from_graph_sequential(graph)
        })
    } else {
        None
    };

    let result: IndexResult = selection
        .iter()
        .map(|kind| {
            let value = match (kind, sums) {
                (IndexKind::Zagreb, _) => first_zagreb_index(graph),
                (IndexKind::Wiener, Some(s)) => s.wiener,
                (IndexKind::Gutman, Some(s)) => s.gutman,
                // Fewer than two nodes or no edges
                (_, None) => 0,
            };
            (kind, value)
        })
        .collect();

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        ?result,
        "computed indices"
    );
    result
}

fn is_trivial(graph: &PowerGraph) -> bool {
    graph.node_count() < 2 || graph.edge_count() == 0
}
