//! Single-exponent operations: indices and display graphs.

use pg_core::PgConfig;
use pg_graph::{PowerGraph, build_power_graph, build_power_graph_sequential};
use pg_group::{ModularGroup, enumerate};
use pg_indices::{IndexResult, IndexSelection, compute};

use crate::error::AppResult;

/// `p = 2, k = 1`: the group is `{1}` and every index is zero.
pub fn is_degenerate(p: u64, k: u32) -> bool {
    p == 2 && k == 1
}

/// Graph to draw, or a marker that there is nothing to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayGraph {
    Graph(PowerGraph),
    EmptyGroup,
}

/// Compute the selected indices of the power graph of `(Z/p^kZ)*`.
///
/// Inputs are assumed validated. The degenerate group short-circuits to zeros.
pub fn compute_indices(
    p: u64,
    k: u32,
    selection: &IndexSelection,
    config: &PgConfig,
) -> AppResult<IndexResult> {
    if is_degenerate(p, k) {
        tracing::debug!(p, k, "degenerate group, all indices zero");
        return Ok(IndexResult::zeros(selection));
    }
    compute_indices_via_graph(p, k, selection, config)
}

/// Same as [`compute_indices`] but always runs the full pipeline.
pub fn compute_indices_via_graph(
    p: u64,
    k: u32,
    selection: &IndexSelection,
    config: &PgConfig,
) -> AppResult<IndexResult> {
    let group = enumerate(p, k)?;
    let graph = build_graph(&group, config)?;
    Ok(compute(&graph, selection, config.parallel))
}

/// Build the power graph for display; the degenerate group yields a marker.
pub fn build_graph_for_display(p: u64, k: u32, config: &PgConfig) -> AppResult<DisplayGraph> {
    if is_degenerate(p, k) {
        return Ok(DisplayGraph::EmptyGroup);
    }
    let group = enumerate(p, k)?;
    Ok(DisplayGraph::Graph(build_graph(&group, config)?))
}

pub(crate) fn build_graph(group: &ModularGroup, config: &PgConfig) -> AppResult<PowerGraph> {
    let graph = if config.parallel {
        build_power_graph(group)?
    } else {
        build_power_graph_sequential(group)?
    };
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_indices::IndexKind;

    #[test]
    fn degenerate_detection() {
        assert!(is_degenerate(2, 1));
        assert!(!is_degenerate(2, 2));
        assert!(!is_degenerate(3, 1));
    }

    #[test]
    fn display_marker_for_degenerate_group() {
        let cfg = PgConfig::default();
        assert_eq!(build_graph_for_display(2, 1, &cfg).unwrap(), DisplayGraph::EmptyGroup);
        match build_graph_for_display(3, 1, &cfg).unwrap() {
            DisplayGraph::Graph(g) => assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 2)]),
            DisplayGraph::EmptyGroup => panic!("mod 3 has a graph"),
        }
    }

    #[test]
    fn selection_restricts_output() {
        let sel = IndexSelection::new([IndexKind::Gutman]).unwrap();
        let result = compute_indices(2, 2, &sel, &PgConfig::default()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(IndexKind::Gutman), Some(1));
    }
}
